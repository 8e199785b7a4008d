pub mod attendance;
pub mod member;
pub mod seat;

pub use attendance::{AttendanceRow, SyncStatus};
pub use member::MemberRow;
pub use seat::SeatRow;
