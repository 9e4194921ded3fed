use vitrine::sitemap::SitemapOptions;
use vitrine::{BuildOptions, BuildOutput};

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    glamified_website::build(BuildOptions {
        base_url: Some("https://glamifiedsolutions.com".to_string()),
        sitemap: SitemapOptions {
            enabled: true,
            ..Default::default()
        },
        ..Default::default()
    })
}
