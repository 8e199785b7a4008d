pub mod attendance_service;
pub mod reconcile_service;
pub mod roster_service;
pub mod sheet_service;
