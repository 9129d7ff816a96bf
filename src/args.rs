use clap::Parser;
use emvco_harvest::config::{ContainerPolicy, WalkConfig};

#[derive(Parser, Debug)]
#[command(name = "emvco-harvest")]
#[command(about = "Walks the EMVCo specifications listing and emits document records")]
#[command(version)]
pub struct Args {
    /// Listing URL to start from (defaults to the EMVCo specifications page)
    #[arg(long)]
    pub url: Option<String>,

    /// WebDriver server URL
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// Settle delay after render-triggering actions, in milliseconds
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Stop after visiting this many listing pages
    #[arg(long)]
    pub page_cap: Option<u32>,

    /// Treat a missing listing container as a clean stop instead of an error
    #[arg(long)]
    pub stop_on_missing_container: bool,

    /// JSON configuration file to start from
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// Resolves the final walk configuration: config file (or defaults),
    /// then the WEBDRIVER_URL environment variable, then flag overrides.
    pub fn into_config(self) -> Result<WalkConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => WalkConfig::from_file(path)?,
            None => WalkConfig::default(),
        };

        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        if let Some(url) = self.url {
            config.start_url = url;
        }
        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        }
        if let Some(settle_ms) = self.settle_ms {
            config.settle_ms = settle_ms;
        }
        if let Some(page_cap) = self.page_cap {
            config.page_cap = Some(page_cap);
        }
        if self.stop_on_missing_container {
            config.on_missing_container = ContainerPolicy::Stop;
        }

        Ok(config)
    }
}
