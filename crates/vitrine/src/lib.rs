//! Vitrine generates small static websites.
//!
//! A site is a set of [`Route`](route::Route) implementations, each owning one
//! path and rendering one document. [`unveil()`] renders every registered
//! route into the output directory, copies static files alongside them, and
//! optionally writes a sitemap.
//!
//! ## Example
//! ```rust,no_run
//! use vitrine::{BuildOptions, BuildOutput, routes, unveil};
//! use vitrine::route::{PageContext, RenderResult, Route};
//!
//! pub struct Index;
//!
//! impl Route for Index {
//!     fn path(&self) -> &'static str {
//!         "/"
//!     }
//!
//!     fn render(&self, _ctx: &PageContext) -> RenderResult {
//!         "<h1>Hello, world!</h1>".into()
//!     }
//! }
//!
//! fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
//!     unveil(routes![Index], BuildOptions::default())
//! }
//! ```

pub mod errors;
pub mod route;
pub mod sitemap;

mod routing;

pub use build::metadata::{BuildOutput, PageOutput, StaticAssetOutput};
pub use build::options::BuildOptions;

mod build;
mod logging;

use build::execute_build;
use route::Route;

/// Helps to define every route that should be built by [`unveil()`].
///
/// ## Example
/// ```rust
/// use vitrine::routes;
/// # use vitrine::route::{PageContext, RenderResult, Route};
/// #
/// # pub struct Index;
/// # impl Route for Index {
/// #     fn path(&self) -> &'static str { "/" }
/// #     fn render(&self, _ctx: &PageContext) -> RenderResult { "".into() }
/// # }
/// # pub struct About;
/// # impl Route for About {
/// #     fn path(&self) -> &'static str { "/about" }
/// #     fn render(&self, _ctx: &PageContext) -> RenderResult { "".into() }
/// # }
///
/// let all_routes: &[&dyn Route] = routes![Index, About];
/// ```
#[macro_export]
macro_rules! routes {
    [$($route:expr),* $(,)?] => {
        &[$(&$route),*]
    };
}

/// The version of Vitrine being used.
///
/// Can be used to create a generator tag in the output HTML.
///
/// ## Example
/// ```rust
/// use vitrine::GENERATOR;
///
/// format!("<meta name=\"generator\" content=\"{}\">", GENERATOR);
/// ```
pub const GENERATOR: &str = concat!("Vitrine v", env!("CARGO_PKG_VERSION"));

/// Vitrine entrypoint. Renders every registered route and writes the output files.
///
/// ## Example
/// Should be called from the main function of the binary crate.
/// ```rust,no_run
/// use vitrine::{BuildOptions, BuildOutput, routes, unveil};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///     unveil(routes![], BuildOptions::default())
/// }
/// ```
pub fn unveil(
    routes: &[&dyn Route],
    options: BuildOptions,
) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    logging::init_logging();

    Ok(execute_build(routes, &options)?)
}
