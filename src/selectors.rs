use std::fmt;

/// A query into the rendered page.
///
/// Deliberately smaller than full CSS/XPath: these five forms cover every
/// lookup the listing markup needs, and every page accessor can support them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Element carrying the given id attribute
    Id(&'a str),
    /// Elements with the given tag name
    Tag(&'a str),
    /// Elements carrying the given class
    Class(&'a str),
    /// Tagged elements whose attribute value contains the given substring
    AttrContains {
        tag: &'a str,
        attr: &'a str,
        value: &'a str,
    },
    /// Element whose visible text matches exactly
    Text(&'a str),
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Tag(tag) => write!(f, "{}", tag),
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::AttrContains { tag, attr, value } => {
                write!(f, "{}[{}*='{}']", tag, attr, value)
            }
            Selector::Text(text) => write!(f, "text '{}'", text),
        }
    }
}

// Contract with the EMVCo listing markup. Brittle by nature: a site redesign
// breaks these before anything else.

/// Container holding the listing items of the current page
pub const LISTING_CONTAINER: Selector<'static> = Selector::Id("filterable_search_results");

/// One listing item (a single specification document)
pub const LISTING_ITEM: Selector<'static> = Selector::Tag("article");

/// Document title
pub const TITLE: Selector<'static> = Selector::Class("title-name");

/// Document version
pub const VERSION: Selector<'static> = Selector::Class("version");

/// Publication date text
pub const PUBLISHED: Selector<'static> = Selector::Class("published");

/// Technology category tag
pub const TECH_CATEGORY: Selector<'static> = Selector::Class("tech-cat");

/// Specification category tag (document type)
pub const SPEC_CATEGORY: Selector<'static> = Selector::Class("spec-cat");

/// Marker present on items that cannot be downloaded
pub const LOCKED_MARKER: Selector<'static> = Selector::Class("not-available-download");

/// Marker present on items that can be downloaded
pub const UNLOCKED_MARKER: Selector<'static> = Selector::Class("available-download");

/// Anchor of a listing item, carrying the deep-link attribute
pub const ITEM_ANCHOR: Selector<'static> = Selector::Tag("a");

/// Attribute on the item anchor holding the deep-link identifier
pub const LINK_ATTR: &str = "data-post-link";

/// Pagination control leading to the next listing page
pub const NEXT_CONTROL: Selector<'static> = Selector::AttrContains {
    tag: "a",
    attr: "data-direction",
    value: "next",
};

/// Indicator showing the current page number, read for diagnostics only
pub const CURRENT_PAGE: Selector<'static> = Selector::Id("current_page");

/// Container of the cookie-consent banner buttons
pub const CONSENT_BUTTONS: Selector<'static> = Selector::Class("ui-button");

/// Visible text of the consent accept control
pub const CONSENT_ACCEPT: Selector<'static> = Selector::Text("Accept");
