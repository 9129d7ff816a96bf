use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized specification document extracted from the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRecord {
    /// Document title
    pub title: String,

    /// Deep-link identifier taken from the item anchor
    pub link: String,

    /// Publication date
    pub published: NaiveDate,

    /// Whether downloading the document requires additional access
    pub locked: bool,

    /// Secondary metadata side channel
    pub other: RecordExtras,
}

/// Secondary metadata carried alongside a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordExtras {
    /// Document type (specification category)
    pub doc_type: String,

    /// Technology category
    pub tech: String,

    /// Document version
    pub version: String,

    /// Reserved book label, always a single space
    pub book: String,
}
