use clap::Parser;
use emvco_harvest::walker;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return;
        }
    };

    println!("Note: the walk requires a WebDriver server (e.g. ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL or --webdriver-url if not using the default http://localhost:4444"
    );

    // Connect and start the walk; records arrive on the receiver as the
    // walker moves through the listing pages
    let (mut records, walk_handle) = match walker::start(config).await {
        Ok(started) => started,
        Err(e) => {
            ::log::error!("Failed to start walk: {}", e);
            return;
        }
    };

    // Emit records as JSON lines as they come in
    let mut emitted = 0u32;
    let start_time = std::time::Instant::now();

    while let Some(record) = records.recv().await {
        emitted += 1;
        match serde_json::to_string(&record) {
            Ok(line) => println!("{}", line),
            Err(e) => ::log::error!("Failed to serialize record '{}': {}", record.title, e),
        }
    }

    let duration = start_time.elapsed();
    match walk_handle.await {
        Ok(Ok(summary)) => ::log::info!(
            "Walk complete - {} pages, {} records in {:.2} seconds",
            summary.pages,
            summary.emitted,
            duration.as_secs_f64()
        ),
        Ok(Err(e)) => ::log::error!("Walk failed after {} records: {}", emitted, e),
        Err(e) => ::log::error!("Walk task panicked: {}", e),
    }
}
