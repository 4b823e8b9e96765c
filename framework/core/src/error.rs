/// Returned by a [crate::browser::BrowserTarget] whose browser type is blank, so there is nothing
/// to derive expectation tags from.
#[derive(derive_more::Error, derive_more::Display, Debug, PartialEq, Eq)]
#[display("Browser type {browser_type:?} is unknown, cannot compute expectation tags")]
pub struct UnknownBrowserError {
    browser_type: String,
}

impl UnknownBrowserError {
    pub fn new(browser_type: &str) -> Self {
        Self {
            browser_type: browser_type.to_string(),
        }
    }

    pub fn browser_type(&self) -> &str {
        &self.browser_type
    }
}
