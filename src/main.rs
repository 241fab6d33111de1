use lead_sync::utils::error::ErrorSeverity;
use lead_sync::utils::{logger, validation::Validate};
use lead_sync::{CrmRestClient, LeadSyncPipeline, OdooRpcClient, SyncConfig, SyncEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    tracing::info!("Starting lead-sync");

    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let backend = OdooRpcClient::new(&config)?;
    let gateway = CrmRestClient::new(&config)?;
    let engine = SyncEngine::new(LeadSyncPipeline::new(backend, gateway));

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Project sync completed");
            println!("✅ Project sync completed.");
            println!(
                "   {} synced, {} skipped, {} failed out of {} leads",
                report.synced, report.skipped, report.failed, report.total
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Sync failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
