//! Error types for Vitrine.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust uses the Debug trait to show errors when they're returned from main,
                    // but thiserror uses the Display trait. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum BuildError {
    #[error("`{route}` is registered more than once, every path must resolve to exactly one page")]
    DuplicateRoute { route: String },

    #[error("failed to create output directory: {path}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{route}` to {path}")]
    WriteFailed {
        route: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy static file {path}")]
    StaticCopyFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the sitemap requires `base_url` to be set in `BuildOptions`")]
    SitemapWithoutBaseUrl,

    #[error("failed to write sitemap to {path}")]
    SitemapWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl_debug_for_error!(BuildError);
