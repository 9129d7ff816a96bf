use crate::page::RenderedPage;
use crate::selectors::Selector;
use fantoccini::elements::Element;
use fantoccini::error::{CmdError, NewSessionError};
use fantoccini::{Client, ClientBuilder, Locator};
use std::time::Duration;

/// WebDriver-ready form of a [`Selector`]
enum Compiled {
    Css(String),
    XPath(String),
}

impl Compiled {
    fn of(selector: &Selector<'_>) -> Self {
        match selector {
            Selector::Id(id) => Compiled::Css(format!("#{}", id)),
            Selector::Tag(tag) => Compiled::Css((*tag).to_string()),
            Selector::Class(class) => Compiled::Css(format!(".{}", class)),
            Selector::AttrContains { tag, attr, value } => {
                Compiled::XPath(format!("//{}[contains(@{},'{}')]", tag, attr, value))
            }
            Selector::Text(text) => Compiled::XPath(format!("//*[text() = '{}']", text)),
        }
    }

    /// Variant for element-relative finds; an absolute XPath axis would
    /// otherwise escape back to the document root.
    fn scoped(self) -> Self {
        match self {
            Compiled::XPath(path) if path.starts_with("//") => {
                Compiled::XPath(format!(".{}", path))
            }
            other => other,
        }
    }

    fn locator(&self) -> Locator<'_> {
        match self {
            Compiled::Css(css) => Locator::Css(css),
            Compiled::XPath(xpath) => Locator::XPath(xpath),
        }
    }
}

/// Live [`RenderedPage`] backed by a fantoccini WebDriver session
pub struct FantocciniPage {
    client: Client,
}

impl FantocciniPage {
    /// Connects to a WebDriver server
    pub async fn connect(webdriver_url: &str) -> Result<Self, NewSessionError> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                Ok(Self { client })
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
                Err(e)
            }
        }
    }

    /// Ends the browser session
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}

impl RenderedPage for FantocciniPage {
    type Element = Element;
    type Error = CmdError;

    async fn navigate(&mut self, url: &str) -> Result<(), CmdError> {
        self.client.goto(url).await
    }

    async fn find(&mut self, selector: &Selector<'_>) -> Result<Element, CmdError> {
        let compiled = Compiled::of(selector);
        self.client.find(compiled.locator()).await
    }

    async fn find_all(&mut self, selector: &Selector<'_>) -> Result<Vec<Element>, CmdError> {
        let compiled = Compiled::of(selector);
        self.client.find_all(compiled.locator()).await
    }

    async fn find_in(
        &mut self,
        scope: &Element,
        selector: &Selector<'_>,
    ) -> Result<Element, CmdError> {
        let compiled = Compiled::of(selector).scoped();
        scope.find(compiled.locator()).await
    }

    async fn find_all_in(
        &mut self,
        scope: &Element,
        selector: &Selector<'_>,
    ) -> Result<Vec<Element>, CmdError> {
        let compiled = Compiled::of(selector).scoped();
        scope.find_all(compiled.locator()).await
    }

    async fn text(&mut self, element: &Element) -> Result<String, CmdError> {
        element.text().await
    }

    async fn attr(&mut self, element: &Element, name: &str) -> Result<Option<String>, CmdError> {
        element.attr(name).await
    }

    async fn click_via_script(&mut self, element: &Element) -> Result<(), CmdError> {
        let element = serde_json::to_value(element)?;
        self.client
            .execute("arguments[0].click();", vec![element])
            .await?;
        Ok(())
    }

    async fn wait_for(
        &mut self,
        selector: &Selector<'_>,
        timeout: Duration,
    ) -> Result<Element, CmdError> {
        let compiled = Compiled::of(selector);
        self.client
            .wait()
            .at_most(timeout)
            .for_element(compiled.locator())
            .await
    }
}
