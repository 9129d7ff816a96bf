//! Snapshot-backed page accessor.
//!
//! Implements [`RenderedPage`] over a fixed sequence of pre-rendered HTML
//! snapshots, one per listing page. Script-clicking an element carrying a
//! `data-direction` of "next" advances to the following snapshot, so the
//! walker's pagination loop runs unchanged against canned markup. Used by the
//! test suites and for offline dry runs.

use crate::page::RenderedPage;
use crate::selectors::Selector;
use scraper::{ElementRef, Html};
use std::time::Duration;
use thiserror::Error;

/// Failure in the snapshot accessor
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No element matched the selector
    #[error("no element matched {0}")]
    NotFound(String),

    /// The selector could not be compiled for the snapshot backend
    #[error("invalid selector: {0}")]
    BadSelector(String),

    /// The accessor has no snapshot to serve
    #[error("no snapshot loaded")]
    NoSnapshot,
}

/// Element handle: the matched element's outer HTML.
///
/// Snapshots are re-parsed per query, so a handle is just serialized markup;
/// that matches how the walker treats handles (ephemeral, re-queried after
/// every page transition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet(String);

/// A [`RenderedPage`] over pre-rendered page snapshots
pub struct StaticPage {
    snapshots: Vec<String>,
    current: usize,
    /// Whether the consent accept control was script-clicked
    pub consent_dismissed: bool,
}

/// Elements the text-match selector should never resolve to
const STRUCTURAL_TAGS: &[&str] = &["html", "head", "body"];

impl StaticPage {
    /// Creates an accessor serving the given snapshots in order
    pub fn new(snapshots: Vec<String>) -> Self {
        Self {
            snapshots,
            current: 0,
            consent_dismissed: false,
        }
    }

    fn document(&self) -> Result<Html, SnapshotError> {
        let html = self
            .snapshots
            .get(self.current)
            .ok_or(SnapshotError::NoSnapshot)?;
        Ok(Html::parse_document(html))
    }

    fn css(selector: &Selector<'_>) -> Result<scraper::Selector, SnapshotError> {
        let css = match selector {
            Selector::Id(id) => format!("#{}", id),
            Selector::Tag(tag) => (*tag).to_string(),
            Selector::Class(class) => format!(".{}", class),
            Selector::AttrContains { tag, attr, value } => {
                format!("{}[{}*='{}']", tag, attr, value)
            }
            Selector::Text(_) => {
                return Err(SnapshotError::BadSelector(
                    "text selectors have no CSS form".to_string(),
                ));
            }
        };
        scraper::Selector::parse(&css).map_err(|e| SnapshotError::BadSelector(e.to_string()))
    }

    fn select_within(doc: &Html, selector: &Selector<'_>) -> Result<Vec<Snippet>, SnapshotError> {
        if let Selector::Text(wanted) = selector {
            return Ok(doc
                .root_element()
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter(|el| !STRUCTURAL_TAGS.contains(&el.value().name()))
                .filter(|el| el.text().collect::<String>().trim() == *wanted)
                .map(|el| Snippet(el.html()))
                .collect());
        }
        let css = Self::css(selector)?;
        Ok(doc.select(&css).map(|el| Snippet(el.html())).collect())
    }

    /// Re-parses a handle's markup so it can be queried as a scope
    fn reparse(snippet: &Snippet) -> Html {
        Html::parse_document(&snippet.0)
    }

    /// The handle's own element inside its re-parsed document
    fn handle_root(doc: &Html) -> Option<ElementRef<'_>> {
        let body = scraper::Selector::parse("body").unwrap();
        doc.select(&body)
            .next()?
            .children()
            .filter_map(ElementRef::wrap)
            .next()
    }
}

impl RenderedPage for StaticPage {
    type Element = Snippet;
    type Error = SnapshotError;

    async fn navigate(&mut self, url: &str) -> Result<(), SnapshotError> {
        ::log::debug!("Snapshot navigation to {}", url);
        if self.snapshots.is_empty() {
            return Err(SnapshotError::NoSnapshot);
        }
        self.current = 0;
        Ok(())
    }

    async fn find(&mut self, selector: &Selector<'_>) -> Result<Snippet, SnapshotError> {
        let doc = self.document()?;
        Self::select_within(&doc, selector)?
            .into_iter()
            .next()
            .ok_or_else(|| SnapshotError::NotFound(selector.to_string()))
    }

    async fn find_all(&mut self, selector: &Selector<'_>) -> Result<Vec<Snippet>, SnapshotError> {
        let doc = self.document()?;
        Self::select_within(&doc, selector)
    }

    async fn find_in(
        &mut self,
        scope: &Snippet,
        selector: &Selector<'_>,
    ) -> Result<Snippet, SnapshotError> {
        let doc = Self::reparse(scope);
        Self::select_within(&doc, selector)?
            .into_iter()
            .next()
            .ok_or_else(|| SnapshotError::NotFound(selector.to_string()))
    }

    async fn find_all_in(
        &mut self,
        scope: &Snippet,
        selector: &Selector<'_>,
    ) -> Result<Vec<Snippet>, SnapshotError> {
        let doc = Self::reparse(scope);
        Self::select_within(&doc, selector)
    }

    async fn text(&mut self, element: &Snippet) -> Result<String, SnapshotError> {
        let doc = Self::reparse(element);
        let Some(root) = Self::handle_root(&doc) else {
            return Ok(String::new());
        };
        Ok(root.text().collect::<String>().trim().to_string())
    }

    async fn attr(
        &mut self,
        element: &Snippet,
        name: &str,
    ) -> Result<Option<String>, SnapshotError> {
        let doc = Self::reparse(element);
        Ok(Self::handle_root(&doc)
            .and_then(|el| el.value().attr(name))
            .map(|value| value.to_string()))
    }

    async fn click_via_script(&mut self, element: &Snippet) -> Result<(), SnapshotError> {
        let doc = Self::reparse(element);
        let Some(root) = Self::handle_root(&doc) else {
            return Ok(());
        };

        let is_next = root
            .value()
            .attr("data-direction")
            .is_some_and(|value| value.contains("next"));
        if is_next {
            if self.current + 1 < self.snapshots.len() {
                self.current += 1;
            }
            return Ok(());
        }

        if root.text().collect::<String>().trim() == "Accept" {
            self.consent_dismissed = true;
        }
        Ok(())
    }

    async fn wait_for(
        &mut self,
        selector: &Selector<'_>,
        _timeout: Duration,
    ) -> Result<Snippet, SnapshotError> {
        self.find(selector).await
    }

    // Snapshots are already rendered; never sleep.
    async fn settle(&mut self, _delay: Duration) {}
}
