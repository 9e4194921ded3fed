use std::path::PathBuf;

use crate::sitemap::SitemapOptions;

/// Vitrine build options. Should be passed to [`unveil()`](crate::unveil()).
///
/// ## Examples
/// Default values:
/// ```rust,no_run
/// use vitrine::{BuildOptions, BuildOutput, routes, unveil};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///     unveil(routes![], BuildOptions::default())
/// }
/// ```
/// Custom values:
/// ```rust,no_run
/// use vitrine::{BuildOptions, BuildOutput, routes, unveil};
/// use vitrine::sitemap::SitemapOptions;
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///     unveil(
///         routes![],
///         BuildOptions {
///             base_url: Some("https://example.com".to_string()),
///             output_dir: "out".into(),
///             sitemap: SitemapOptions {
///                 enabled: true,
///                 ..Default::default()
///             },
///             ..Default::default()
///         },
///     )
/// }
/// ```
pub struct BuildOptions {
    /// Base URL for the site, e.g. `https://example.com`.
    /// This value is used to generate canonical URLs and can be used wherever the full site URL is needed (e.g. in SEO meta tags) through [`PageContext::base_url`](crate::route::PageContext::base_url) in pages.
    pub base_url: Option<String>,

    /// The directory the built site is written to. Default: `dist`
    pub output_dir: PathBuf,

    /// A directory of files copied verbatim into the output directory, if it exists. Default: `public`
    pub static_dir: Option<PathBuf>,

    /// Whether to clean the output directory before building. Default: `true`
    pub clean_output_dir: bool,

    /// Options for sitemap generation. See [`SitemapOptions`] for configuration.
    pub sitemap: SitemapOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            output_dir: PathBuf::from("dist"),
            static_dir: Some(PathBuf::from("public")),
            clean_output_dir: true,
            sitemap: SitemapOptions::default(),
        }
    }
}
