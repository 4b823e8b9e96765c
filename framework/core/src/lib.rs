mod browser;
mod error;

pub mod prelude {
    pub use crate::browser::{BrowserTarget, PossibleBrowser};
    pub use crate::error::UnknownBrowserError;
}
