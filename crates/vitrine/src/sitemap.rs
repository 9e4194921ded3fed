//! Sitemap generation.
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::BuildError;

/// Options for sitemap generation. Should be passed to [`unveil()`](crate::unveil) through [`BuildOptions`](crate::BuildOptions).
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Whether to generate a sitemap. Default: `false`
    ///
    /// Generation requires [`BuildOptions::base_url`](crate::BuildOptions::base_url) to be set, since sitemap entries must be absolute URLs.
    pub enabled: bool,
    /// The filename for the sitemap. Default: `"sitemap.xml"`
    pub filename: String,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: "sitemap.xml".to_string(),
        }
    }
}

/// A single URL entry in the sitemap.
#[derive(Debug)]
pub struct SitemapEntry {
    pub loc: String,
}

impl SitemapEntry {
    fn to_xml(&self) -> String {
        format!("<url><loc>{}</loc></url>", escape_xml(&self.loc))
    }
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generates a sitemap file from pre-built entries. Returns the path of the written file.
pub fn generate_sitemap(
    entries: Vec<SitemapEntry>,
    output_dir: &Path,
    options: &SitemapOptions,
) -> Result<PathBuf, BuildError> {
    // Sort entries by URL for consistency
    let mut sorted_entries = entries;
    sorted_entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");
    for entry in &sorted_entries {
        xml.push_str(&entry.to_xml());
    }
    xml.push_str("</urlset>");

    let path = output_dir.join(&options.filename);
    fs::write(&path, xml).map_err(|source| BuildError::SitemapWriteFailed {
        path: path.clone(),
        source,
    })?;

    log::info!(
        target: "sitemap",
        "Generated sitemap with {} URLs at {}",
        sorted_entries.len(),
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("https://example.com/?a=1&b=2"),
            "https://example.com/?a=1&amp;b=2"
        );
        assert_eq!(escape_xml("<\"'>"), "&lt;&quot;&apos;&gt;");
    }

    #[test]
    fn test_generate_sitemap_sorts_entries() {
        let dir = tempfile::tempdir().unwrap();

        let entries = vec![
            SitemapEntry {
                loc: "https://example.com/services/".to_string(),
            },
            SitemapEntry {
                loc: "https://example.com/".to_string(),
            },
        ];

        let path = generate_sitemap(entries, dir.path(), &SitemapOptions::default()).unwrap();
        let xml = std::fs::read_to_string(path).unwrap();

        let root_pos = xml.find("<loc>https://example.com/</loc>").unwrap();
        let services_pos = xml.find("<loc>https://example.com/services/</loc>").unwrap();
        assert!(root_pos < services_pos);
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn test_generate_sitemap_custom_filename() {
        let dir = tempfile::tempdir().unwrap();

        let options = SitemapOptions {
            enabled: true,
            filename: "sitemap-pages.xml".to_string(),
        };

        let path = generate_sitemap(vec![], dir.path(), &options).unwrap();

        assert_eq!(path, dir.path().join("sitemap-pages.xml"));
        assert!(path.exists());
    }
}
