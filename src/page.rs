use crate::selectors::Selector;
use std::time::Duration;

/// Capability interface over a rendered, queryable view of a web page.
///
/// The walker core depends only on this trait, so the live WebDriver adapter
/// ([`crate::webdriver::FantocciniPage`]) and the snapshot accessor
/// ([`crate::offline::StaticPage`]) are interchangeable.
///
/// Element handles are ephemeral: they are only valid until the next
/// navigation or render-triggering action, and callers re-query rather than
/// hold them across page transitions.
pub trait RenderedPage {
    /// Handle to one element within the current page
    type Element: Clone;
    /// Adapter-specific failure type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Navigate the page view to the given URL
    async fn navigate(&mut self, url: &str) -> Result<(), Self::Error>;

    /// Find the first element matching the selector anywhere on the page
    async fn find(&mut self, selector: &Selector<'_>) -> Result<Self::Element, Self::Error>;

    /// Find every element matching the selector anywhere on the page
    async fn find_all(&mut self, selector: &Selector<'_>)
    -> Result<Vec<Self::Element>, Self::Error>;

    /// Find the first matching element within the given scope
    async fn find_in(
        &mut self,
        scope: &Self::Element,
        selector: &Selector<'_>,
    ) -> Result<Self::Element, Self::Error>;

    /// Find every matching element within the given scope
    async fn find_all_in(
        &mut self,
        scope: &Self::Element,
        selector: &Selector<'_>,
    ) -> Result<Vec<Self::Element>, Self::Error>;

    /// Visible text of an element
    async fn text(&mut self, element: &Self::Element) -> Result<String, Self::Error>;

    /// Value of an attribute on an element, if set
    async fn attr(
        &mut self,
        element: &Self::Element,
        name: &str,
    ) -> Result<Option<String>, Self::Error>;

    /// Click an element at the DOM level, bypassing normal interaction
    /// layering (the target may be overlaid or not natively clickable)
    async fn click_via_script(&mut self, element: &Self::Element) -> Result<(), Self::Error>;

    /// Wait until an element matching the selector is present, up to the
    /// given timeout
    async fn wait_for(
        &mut self,
        selector: &Selector<'_>,
        timeout: Duration,
    ) -> Result<Self::Element, Self::Error>;

    /// Fixed pause allowing client-side rendering to finish after a
    /// render-triggering action. Accessors whose content is already rendered
    /// override this with a no-op.
    async fn settle(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
