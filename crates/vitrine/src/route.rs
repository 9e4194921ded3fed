//! Core traits and structs to define the pages of your website.
//!
//! Every route must implement the [`Route`] trait. Routes are then passed to
//! [`unveil()`](crate::unveil), through the [`routes!`](crate::routes) macro, to be built.
use std::path::{Path, PathBuf};

use crate::routing::{guess_if_route_is_endpoint, route_file_path, route_url};

/// The result of a page render, can be either text or raw bytes.
///
/// Typically used through the [`Into<RenderResult>`](std::convert::Into) and [`From<RenderResult>`](std::convert::From) implementations for common types.
/// End users should rarely need to interact with this enum directly.
///
/// ## Example
/// ```rust
/// use vitrine::route::{PageContext, RenderResult, Route};
///
/// pub struct Index;
///
/// impl Route for Index {
///     fn path(&self) -> &'static str {
///         "/"
///     }
///
///     fn render(&self, _ctx: &PageContext) -> RenderResult {
///         "<h1>Hello, world!</h1>".into()
///     }
/// }
/// ```
pub enum RenderResult {
    Text(String),
    Raw(Vec<u8>),
}

impl From<String> for RenderResult {
    fn from(val: String) -> Self {
        RenderResult::Text(val)
    }
}

impl From<&str> for RenderResult {
    fn from(val: &str) -> Self {
        RenderResult::Text(val.to_string())
    }
}

impl From<Vec<u8>> for RenderResult {
    fn from(val: Vec<u8>) -> Self {
        RenderResult::Raw(val)
    }
}

impl From<&[u8]> for RenderResult {
    fn from(val: &[u8]) -> Self {
        RenderResult::Raw(val.to_vec())
    }
}

impl From<maud::Markup> for RenderResult {
    fn from(val: maud::Markup) -> Self {
        RenderResult::Text(val.into_string())
    }
}

impl RenderResult {
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        match self {
            RenderResult::Text(text) => text.into_bytes(),
            RenderResult::Raw(bytes) => bytes,
        }
    }
}

/// Allows to access various data about the current build in a [`Route`] implementation.
pub struct PageContext<'a> {
    /// The canonical URL path of the page being rendered, e.g. `/about/`.
    pub current_path: &'a str,
    /// The base URL as defined in [`BuildOptions::base_url`](crate::BuildOptions::base_url).
    pub base_url: Option<&'a str>,
}

impl PageContext<'_> {
    /// Returns the canonical URL for the current page. If [`BuildOptions::base_url`](crate::BuildOptions::base_url) is not set, this will return `None`.
    pub fn canonical_url(&self) -> Option<String> {
        self.base_url
            .map(|base| format!("{}{}", base.trim_end_matches('/'), self.current_path))
    }
}

/// Must be implemented for every page of your website.
///
/// The struct implementing this trait can be passed to [`unveil()`](crate::unveil), through the [`routes!`](crate::routes) macro, to be built.
///
/// ## Example
/// ```rust
/// use vitrine::route::{PageContext, RenderResult, Route};
///
/// pub struct About;
///
/// impl Route for About {
///     fn path(&self) -> &'static str {
///         "/about"
///     }
///
///     fn render(&self, _ctx: &PageContext) -> RenderResult {
///         "<h1>About us</h1>".into()
///     }
/// }
/// ```
pub trait Route: Sync + Send {
    /// The raw path this route is served from, e.g. `/about` or `404.html`.
    ///
    /// Paths with a file extension are treated as endpoints and written
    /// verbatim; every other path becomes a directory with an `index.html`.
    fn path(&self) -> &'static str;

    fn render(&self, ctx: &PageContext) -> RenderResult;

    /// The canonical URL for this route, e.g. `/about/` or `/404.html`.
    fn url(&self) -> String {
        route_url(self.path())
    }

    /// The file this route is written to, relative to the output directory.
    fn file_path(&self, output_dir: &Path) -> PathBuf {
        route_file_path(self.path(), output_dir)
    }

    /// Whether this route is an endpoint (a file such as `robots.txt`) rather than a page.
    fn is_endpoint(&self) -> bool {
        guess_if_route_is_endpoint(self.path())
    }
}
