//! Shared snapshot markup for the extractor and walker suites, shaped like
//! the live listing: an id'd container of article items with classed
//! sub-elements, a data-direction pagination control, and a current-page
//! indicator.

/// Marker span on downloadable items
pub const AVAILABLE: &str = "<span class=\"available-download\"></span>";

/// Marker span on items that need additional access
pub const NOT_AVAILABLE: &str = "<span class=\"not-available-download\"></span>";

/// Both markers at once, for the precedence case
pub const BOTH_MARKERS: &str =
    "<span class=\"not-available-download\"></span><span class=\"available-download\"></span>";

/// One listing item, built field by field. `None` leaves the corresponding
/// sub-element out entirely.
pub struct ItemHtml {
    pub title: Option<&'static str>,
    pub version: Option<&'static str>,
    pub published: Option<&'static str>,
    pub tech: Option<&'static str>,
    pub spec: Option<&'static str>,
    /// Raw marker span(s), empty for the neither-marker case
    pub markers: &'static str,
    /// Value of the anchor's data-post-link attribute; `None` renders an
    /// anchor without the attribute
    pub link: Option<&'static str>,
}

impl Default for ItemHtml {
    fn default() -> Self {
        Self {
            title: None,
            version: None,
            published: None,
            tech: None,
            spec: None,
            markers: "",
            link: None,
        }
    }
}

impl ItemHtml {
    /// The fully populated end-to-end scenario item
    pub fn complete() -> Self {
        Self {
            title: Some("EMV Book 1"),
            version: Some("v4.4"),
            published: Some("June 2023"),
            tech: Some("Contact"),
            spec: Some("Specification"),
            markers: AVAILABLE,
            link: Some("post-123"),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<article>");
        if let Some(title) = self.title {
            out.push_str(&format!("<h3 class=\"title-name\">{}</h3>", title));
        }
        if let Some(version) = self.version {
            out.push_str(&format!("<span class=\"version\">{}</span>", version));
        }
        if let Some(published) = self.published {
            out.push_str(&format!("<span class=\"published\">{}</span>", published));
        }
        if let Some(tech) = self.tech {
            out.push_str(&format!("<span class=\"tech-cat\">{}</span>", tech));
        }
        if let Some(spec) = self.spec {
            out.push_str(&format!("<span class=\"spec-cat\">{}</span>", spec));
        }
        out.push_str(self.markers);
        match self.link {
            Some(link) => out.push_str(&format!("<a data-post-link=\"{}\">View</a>", link)),
            None => out.push_str("<a href=\"#\">View</a>"),
        }
        out.push_str("</article>");
        out
    }
}

/// Wraps items into a full listing page; `has_next` adds the pagination
/// control that leads to the following snapshot.
pub fn listing_page(items: &[String], page_num: u32, has_next: bool) -> String {
    let mut body = String::from("<div id=\"filterable_search_results\">");
    for item in items {
        body.push_str(item);
    }
    body.push_str("</div>");
    if has_next {
        body.push_str("<a data-direction=\"next\" href=\"#\">Next</a>");
    }
    body.push_str(&format!("<span id=\"current_page\">{}</span>", page_num));
    format!("<html><body>{}</body></html>", body)
}

/// A page like the above but without the listing container
pub fn page_without_container() -> String {
    "<html><body><p>Nothing to see</p></body></html>".to_string()
}

/// Overlays a consent banner onto a rendered page
pub fn with_consent_banner(page: &str) -> String {
    page.replacen(
        "<body>",
        "<body><div class=\"ui-button\"><span>Accept</span></div>",
        1,
    )
}
