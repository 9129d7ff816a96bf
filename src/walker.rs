use crate::config::{ContainerPolicy, WalkConfig};
use crate::consent;
use crate::extract;
use crate::page::RenderedPage;
use crate::record::SpecRecord;
use crate::selectors;
use crate::webdriver::FantocciniPage;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

/// Error that terminates a walk.
///
/// Field-level extraction failures never surface here; they degrade to
/// defaults or skip single items inside [`crate::extract`].
#[derive(Debug, Error)]
pub enum WalkError<E: std::error::Error + 'static> {
    /// The listing container was missing and the configured policy is to fail
    #[error("listing container not found: {0}")]
    ContainerMissing(#[source] E),

    /// A traversal-level page access failed
    #[error("page access failed: {0}")]
    Page(#[from] E),

    /// The downstream record receiver went away mid-walk
    #[error("record sink closed")]
    SinkClosed,
}

/// Counters reported when a walk finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    /// Listing pages visited
    pub pages: u32,
    /// Records emitted to the sink
    pub emitted: u32,
    /// Items skipped over a missing load-bearing field
    pub skipped: u32,
}

/// Walks the paginated listing, emitting one record per extractable item.
///
/// The page session is exclusively owned for the duration of the walk; the
/// traversal is strictly sequential. The walk ends cleanly when no next-page
/// control is found (the normal end-of-data signal) or when the configured
/// page cap is reached; a missing listing container follows
/// [`WalkConfig::on_missing_container`].
pub async fn walk<P: RenderedPage>(
    page: &mut P,
    config: &WalkConfig,
    records: &mpsc::Sender<SpecRecord>,
) -> Result<WalkSummary, WalkError<P::Error>> {
    ::log::debug!("Walker entering {}", config.start_url);
    page.navigate(&config.start_url).await?;
    page.settle(config.settle()).await;

    consent::dismiss(page).await;
    page.settle(config.settle()).await;

    // Give the client-side render a bounded chance to produce the listing
    // before the loop starts querying it.
    if let Err(e) = page
        .wait_for(&selectors::LISTING_CONTAINER, config.element_timeout())
        .await
    {
        ::log::debug!("Listing container not ready after initial wait: {}", e);
    }

    let mut summary = WalkSummary::default();

    loop {
        ::log::debug!("Loading listing items...");
        let container = match page.find(&selectors::LISTING_CONTAINER).await {
            Ok(container) => container,
            Err(e) => match config.on_missing_container {
                ContainerPolicy::Fail => return Err(WalkError::ContainerMissing(e)),
                ContainerPolicy::Stop => {
                    ::log::warn!("Listing container missing, stopping walk: {}", e);
                    break;
                }
            },
        };
        let items = page
            .find_all_in(&container, &selectors::LISTING_ITEM)
            .await?;
        summary.pages += 1;
        ::log::debug!("Processing {} listing items...", items.len());

        for item in &items {
            match extract::extract_item(page, item).await {
                Some(record) => {
                    records
                        .send(record)
                        .await
                        .map_err(|_| WalkError::SinkClosed)?;
                    summary.emitted += 1;
                }
                None => summary.skipped += 1,
            }
        }

        if let Some(cap) = config.page_cap {
            if summary.pages >= cap {
                ::log::info!("Page cap of {} reached, stopping walk", cap);
                break;
            }
        }

        let next = match page.find(&selectors::NEXT_CONTROL).await {
            Ok(next) => next,
            Err(e) => {
                // Normal termination: the last page renders no next control
                ::log::debug!("No next-page control found, ending walk: {}", e);
                break;
            }
        };
        page.click_via_script(&next).await?;
        page.settle(config.settle()).await;
        log_current_page(page).await;
    }

    ::log::info!(
        "Walk finished: {} pages, {} records emitted, {} items skipped",
        summary.pages,
        summary.emitted,
        summary.skipped
    );
    Ok(summary)
}

/// Best-effort diagnostic read of the current-page indicator
async fn log_current_page<P: RenderedPage>(page: &mut P) {
    match page.find(&selectors::CURRENT_PAGE).await {
        Ok(indicator) => match page.text(&indicator).await {
            Ok(number) => ::log::info!("Moved to listing page {}", number),
            Err(e) => ::log::debug!("Could not read current-page indicator: {}", e),
        },
        Err(e) => ::log::debug!("No current-page indicator: {}", e),
    }
}

/// Result of a walk running against the live WebDriver adapter
pub type LiveWalkResult = Result<WalkSummary, WalkError<fantoccini::error::CmdError>>;

/// Connects to the WebDriver endpoint, spawns the walk, and returns the
/// record receiver together with the walk's join handle.
pub async fn start(
    config: WalkConfig,
) -> Result<(mpsc::Receiver<SpecRecord>, JoinHandle<LiveWalkResult>), Box<dyn std::error::Error>> {
    Url::parse(&config.start_url)?;
    ::log::info!("Starting listing walk at {}", config.start_url);

    let mut page = FantocciniPage::connect(&config.webdriver_url).await?;
    let (records_tx, records_rx) = mpsc::channel::<SpecRecord>(256);

    let handle = tokio::spawn(async move {
        let result = walk(&mut page, &config, &records_tx).await;
        page.close().await;
        result
    });

    Ok((records_rx, handle))
}
