use super::snapshots::{self, ItemHtml};
use crate::extract::{self, FIELD_DEFAULT, Field};
use crate::offline::{Snippet, StaticPage};
use crate::page::RenderedPage;
use crate::selectors;
use chrono::NaiveDate;

/// Builds a one-item listing snapshot and hands back the item handle
async fn single_item_page(item: ItemHtml) -> (StaticPage, Snippet) {
    let html = snapshots::listing_page(&[item.render()], 1, false);
    let mut page = StaticPage::new(vec![html]);
    page.navigate("snapshot:listing").await.unwrap();

    let container = page.find(&selectors::LISTING_CONTAINER).await.unwrap();
    let items = page
        .find_all_in(&container, &selectors::LISTING_ITEM)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    (page, items.into_iter().next().unwrap())
}

#[tokio::test]
async fn complete_item_extracts_every_field() {
    let (mut page, item) = single_item_page(ItemHtml::complete()).await;
    let record = extract::extract_item(&mut page, &item).await.unwrap();

    assert_eq!(record.title, "EMV Book 1");
    assert_eq!(record.link, "post-123");
    assert_eq!(record.published, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
    assert!(!record.locked);
    assert_eq!(record.other.version, "v4.4");
    assert_eq!(record.other.tech, "Contact");
    assert_eq!(record.other.doc_type, "Specification");
    assert_eq!(record.other.book, " ");
}

#[tokio::test]
async fn missing_version_defaults_to_single_space() {
    let item = ItemHtml {
        version: None,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    assert_eq!(
        extract::version(&mut page, &item).await,
        Field::Fallback(FIELD_DEFAULT.to_string())
    );

    let record = extract::extract_item(&mut page, &item).await.unwrap();
    assert_eq!(record.other.version, " ");
}

#[tokio::test]
async fn missing_categories_default_to_single_space() {
    let item = ItemHtml {
        tech: None,
        spec: None,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    let record = extract::extract_item(&mut page, &item).await.unwrap();
    assert_eq!(record.other.tech, " ");
    assert_eq!(record.other.doc_type, " ");
}

#[tokio::test]
async fn missing_title_skips_item() {
    let item = ItemHtml {
        title: None,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    assert_eq!(extract::title(&mut page, &item).await, Field::Skip);
    assert!(extract::extract_item(&mut page, &item).await.is_none());
}

#[tokio::test]
async fn missing_published_date_skips_item() {
    let item = ItemHtml {
        published: None,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;
    assert!(extract::extract_item(&mut page, &item).await.is_none());
}

#[tokio::test]
async fn unparseable_published_date_skips_item() {
    let item = ItemHtml {
        published: Some("coming soon"),
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    assert_eq!(extract::published(&mut page, &item).await, Field::Skip);
    assert!(extract::extract_item(&mut page, &item).await.is_none());
}

#[tokio::test]
async fn missing_link_attribute_skips_item() {
    let item = ItemHtml {
        link: None,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    assert_eq!(extract::access_link(&mut page, &item).await, Field::Skip);
    assert!(extract::extract_item(&mut page, &item).await.is_none());
}

#[test]
fn lock_state_truth_table() {
    // {not-available present, available absent} -> locked
    assert!(extract::lock_state(true, false));
    // {not-available absent, available present} -> unlocked
    assert!(!extract::lock_state(false, true));
    // {neither present} -> locked
    assert!(extract::lock_state(false, false));
    // {both present} -> locked, not-available takes precedence
    assert!(extract::lock_state(true, true));
}

#[tokio::test]
async fn item_without_markers_is_locked() {
    let item = ItemHtml {
        markers: "",
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    let record = extract::extract_item(&mut page, &item).await.unwrap();
    assert!(record.locked);
}

#[tokio::test]
async fn item_with_both_markers_is_locked() {
    let item = ItemHtml {
        markers: snapshots::BOTH_MARKERS,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    let record = extract::extract_item(&mut page, &item).await.unwrap();
    assert!(record.locked);
}

#[tokio::test]
async fn item_with_not_available_marker_is_locked() {
    let item = ItemHtml {
        markers: snapshots::NOT_AVAILABLE,
        ..ItemHtml::complete()
    };
    let (mut page, item) = single_item_page(item).await;

    let record = extract::extract_item(&mut page, &item).await.unwrap();
    assert!(record.locked);
}
