use crate::dates;
use crate::page::RenderedPage;
use crate::record::{RecordExtras, SpecRecord};
use crate::selectors::{self, Selector};
use chrono::NaiveDate;

/// Default substituted for optional fields that fail to extract
pub const FIELD_DEFAULT: &str = " ";

/// Outcome of extracting a single field from a listing item.
///
/// Every fallback policy is explicit: a field either extracted, degraded to
/// its documented default, or was load-bearing enough that the whole item
/// must be skipped. One field's outcome never prevents attempting the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The field was present and extracted
    Value(T),
    /// The field was missing; the documented default stands in
    Fallback(T),
    /// A load-bearing field was missing; skip the whole item
    Skip,
}

impl<T> Field<T> {
    /// Extracted or defaulted value; `None` means the item must be skipped
    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(value) | Field::Fallback(value) => Some(value),
            Field::Skip => None,
        }
    }
}

/// Reads the text of a classed sub-element, logging the cause on a miss
async fn item_text<P: RenderedPage>(
    page: &mut P,
    item: &P::Element,
    selector: &Selector<'_>,
) -> Option<String> {
    match page.find_in(item, selector).await {
        Ok(element) => match page.text(&element).await {
            Ok(text) => Some(text),
            Err(e) => {
                ::log::debug!("Failed to read text of {}: {}", selector, e);
                None
            }
        },
        Err(e) => {
            ::log::debug!("No {} element in item: {}", selector, e);
            None
        }
    }
}

/// Document title. Load-bearing: a miss skips the item.
pub async fn title<P: RenderedPage>(page: &mut P, item: &P::Element) -> Field<String> {
    match item_text(page, item, &selectors::TITLE).await {
        Some(text) => Field::Value(text),
        None => Field::Skip,
    }
}

/// Document version, defaulting to a single space
pub async fn version<P: RenderedPage>(page: &mut P, item: &P::Element) -> Field<String> {
    match item_text(page, item, &selectors::VERSION).await {
        Some(text) => Field::Value(text),
        None => Field::Fallback(FIELD_DEFAULT.to_string()),
    }
}

/// Publication date. Load-bearing: a missing element or an unparseable
/// date skips the item.
pub async fn published<P: RenderedPage>(page: &mut P, item: &P::Element) -> Field<NaiveDate> {
    let Some(text) = item_text(page, item, &selectors::PUBLISHED).await else {
        return Field::Skip;
    };
    match dates::parse_published(&text) {
        Some(date) => Field::Value(date),
        None => {
            ::log::debug!("Unparseable published date: {:?}", text);
            Field::Skip
        }
    }
}

/// Technology category, defaulting to a single space
pub async fn tech_category<P: RenderedPage>(page: &mut P, item: &P::Element) -> Field<String> {
    match item_text(page, item, &selectors::TECH_CATEGORY).await {
        Some(text) => Field::Value(text),
        None => Field::Fallback(FIELD_DEFAULT.to_string()),
    }
}

/// Document type (specification category), defaulting to a single space
pub async fn doc_type<P: RenderedPage>(page: &mut P, item: &P::Element) -> Field<String> {
    match item_text(page, item, &selectors::SPEC_CATEGORY).await {
        Some(text) => Field::Value(text),
        None => Field::Fallback(FIELD_DEFAULT.to_string()),
    }
}

/// Deep-link identifier from the item anchor. Load-bearing.
pub async fn access_link<P: RenderedPage>(page: &mut P, item: &P::Element) -> Field<String> {
    let anchor = match page.find_in(item, &selectors::ITEM_ANCHOR).await {
        Ok(anchor) => anchor,
        Err(e) => {
            ::log::debug!("No anchor element in item: {}", e);
            return Field::Skip;
        }
    };
    match page.attr(&anchor, selectors::LINK_ATTR).await {
        Ok(Some(link)) => Field::Value(link),
        Ok(None) => {
            ::log::debug!("Item anchor has no {} attribute", selectors::LINK_ATTR);
            Field::Skip
        }
        Err(e) => {
            ::log::debug!("Failed to read {} attribute: {}", selectors::LINK_ATTR, e);
            Field::Skip
        }
    }
}

/// Lock-state truth table over the two mutually exclusive markers.
///
/// The not-available marker wins, and an item carrying neither marker is
/// treated as locked.
pub fn lock_state(not_available: bool, available: bool) -> bool {
    if not_available {
        true
    } else if available {
        false
    } else {
        true
    }
}

/// Whether a marker sub-element is present in the item
async fn marker_present<P: RenderedPage>(
    page: &mut P,
    item: &P::Element,
    selector: &Selector<'_>,
) -> bool {
    match page.find_all_in(item, selector).await {
        Ok(found) => !found.is_empty(),
        Err(e) => {
            ::log::debug!("Failed to query {} marker: {}", selector, e);
            false
        }
    }
}

/// Derives the lock state of one listing item from its markers
pub async fn locked<P: RenderedPage>(page: &mut P, item: &P::Element) -> bool {
    let not_available = marker_present(page, item, &selectors::LOCKED_MARKER).await;
    let available = marker_present(page, item, &selectors::UNLOCKED_MARKER).await;
    lock_state(not_available, available)
}

/// Runs every field extractor against one listing item.
///
/// Returns `None` when a load-bearing field (title, published date, access
/// link) is missing; the caller continues with the next item either way.
pub async fn extract_item<P: RenderedPage>(page: &mut P, item: &P::Element) -> Option<SpecRecord> {
    let Some(title) = title(page, item).await.into_value() else {
        ::log::debug!("Skipping item without a title");
        return None;
    };

    let version = version(page, item)
        .await
        .into_value()
        .unwrap_or_else(|| FIELD_DEFAULT.to_string());

    let Some(published) = published(page, item).await.into_value() else {
        ::log::debug!("Skipping item without a publication date: {}", title);
        return None;
    };

    let tech = tech_category(page, item)
        .await
        .into_value()
        .unwrap_or_else(|| FIELD_DEFAULT.to_string());

    let doc_type = doc_type(page, item)
        .await
        .into_value()
        .unwrap_or_else(|| FIELD_DEFAULT.to_string());

    let locked = locked(page, item).await;

    let Some(link) = access_link(page, item).await.into_value() else {
        ::log::debug!("Skipping item without an access link: {}", title);
        return None;
    };

    Some(SpecRecord {
        title,
        link,
        published,
        locked,
        other: RecordExtras {
            doc_type,
            tech,
            version,
            book: FIELD_DEFAULT.to_string(),
        },
    })
}
