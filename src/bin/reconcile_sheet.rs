use dotenvy::dotenv;

use reception::database::Store;
use reception::services::reconcile_service;
use reception::services::sheet_service::SheetConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let store = Store::connect_from_env().await;
    let config = SheetConfig::from_env();

    match reconcile_service::reconcile_pending(&store, &config).await {
        Ok(report) => {
            println!(
                "sheet reconcile: candidates={}, synced={}, failed={}",
                report.candidates, report.synced, report.failed
            );
        }
        Err(e) => {
            eprintln!("sheet reconcile failed: {}", e);
            std::process::exit(1);
        }
    }
}
