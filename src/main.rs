use aukiolo::{probe, startup};
use tracing::{error, info};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Firestore connectivity probe");

    // Load configuration
    let config = startup::load_config()?;

    if !config.firebase_app_id.is_empty() {
        info!("Using Firebase app {}", config.firebase_app_id);
    }

    // Run the probe once; both failure kinds are caught and logged here so
    // the script always exits cleanly
    match probe::run(&config).await {
        Ok(report) => {
            info!(
                "Probe finished: {} documents in '{}'",
                report.document_count,
                probe::TARGET_COLLECTION
            );
        }
        Err(e) => {
            error!("Connectivity probe failed: {}", e);
        }
    }

    Ok(())
}
