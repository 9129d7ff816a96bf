use crate::page::RenderedPage;
use crate::selectors;

/// Dismisses the cookie-consent banner if one is present.
///
/// One-shot and best-effort: the banner may be absent, already dismissed, or
/// rendered without its accept control, none of which should stop the walk.
pub async fn dismiss<P: RenderedPage>(page: &mut P) {
    match try_dismiss(page).await {
        Ok(()) => ::log::info!("Consent banner dismissed"),
        Err(e) => ::log::debug!("No consent banner dismissed: {}", e),
    }
}

async fn try_dismiss<P: RenderedPage>(page: &mut P) -> Result<(), P::Error> {
    let buttons = page.find(&selectors::CONSENT_BUTTONS).await?;
    let accept = page.find_in(&buttons, &selectors::CONSENT_ACCEPT).await?;
    // The control can be overlaid, so click at the DOM level rather than
    // through normal pointer interaction.
    page.click_via_script(&accept).await
}
