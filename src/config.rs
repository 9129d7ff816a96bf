use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Fixed entry point: the EMVCo specifications listing
pub const HOST: &str = "https://www.emvco.com/specifications/";

/// What to do when a page has no listing container.
///
/// The end-of-data signal is a missing next-page control; a missing listing
/// container is a different condition and gets its own explicit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerPolicy {
    /// Surface a hard error and abort the walk
    #[default]
    Fail,
    /// Treat it like the missing next control: log and stop cleanly
    Stop,
}

/// Configuration for the listing walk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// URL of the listing page to start from
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Fixed pause after render-triggering actions, in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Timeout budget for individual element waits, in seconds
    #[serde(default = "default_element_timeout_secs")]
    pub element_timeout_secs: u64,

    /// Optional ceiling on the number of listing pages to visit
    #[serde(default)]
    pub page_cap: Option<u32>,

    /// Policy for a page without the listing container
    #[serde(default)]
    pub on_missing_container: ContainerPolicy,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            webdriver_url: default_webdriver_url(),
            settle_ms: default_settle_ms(),
            element_timeout_secs: default_element_timeout_secs(),
            page_cap: None,
            on_missing_container: ContainerPolicy::default(),
        }
    }
}

impl WalkConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Settle delay as a duration
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Element wait timeout as a duration
    pub fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout_secs)
    }
}

/// Default value for start_url
fn default_start_url() -> String {
    HOST.to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default settle delay (the listing is client-rendered and needs a pause
/// after navigation and pagination clicks)
fn default_settle_ms() -> u64 {
    3000
}

/// Default timeout for individual element waits
fn default_element_timeout_secs() -> u64 {
    20
}
