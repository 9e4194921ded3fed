use std::fs;
use std::path::PathBuf;

use vitrine::BuildOptions;
use vitrine::sitemap::SitemapOptions;

fn build_site() -> (tempfile::TempDir, vitrine::BuildOutput) {
    let dir = tempfile::tempdir().unwrap();

    let output = glamified_website::build(BuildOptions {
        base_url: Some("https://glamifiedsolutions.com".to_string()),
        output_dir: dir.path().to_path_buf(),
        static_dir: Some(PathBuf::from("public")),
        clean_output_dir: true,
        sitemap: SitemapOptions {
            enabled: true,
            ..Default::default()
        },
    })
    .unwrap();

    (dir, output)
}

#[test]
fn builds_every_page_of_the_site() {
    let (dir, output) = build_site();

    // Six pages, the fallback document, and robots.txt
    assert_eq!(output.pages.len(), 8);

    for file in [
        "index.html",
        "services/index.html",
        "projects/index.html",
        "about/index.html",
        "recruitment/index.html",
        "contact/index.html",
        "404.html",
        "robots.txt",
    ] {
        assert!(dir.path().join(file).exists(), "missing {file}");
    }
}

#[test]
fn copies_the_static_files() {
    let (dir, output) = build_site();

    assert!(!output.static_files.is_empty());
    assert!(dir.path().join("styles.css").exists());
    assert!(dir.path().join("favicon.svg").exists());
}

#[test]
fn home_page_carries_the_site_chrome() {
    let (dir, _) = build_site();

    let home = fs::read_to_string(dir.path().join("index.html")).unwrap();

    assert!(home.contains("Glamified Solutions"));
    assert!(home.contains("https://wa.me/919516929348"));
    assert!(home.contains("tel:+919516929348"));
    assert!(home.contains("href=\"/styles.css\""));
}

#[test]
fn unknown_paths_redirect_to_home() {
    let (dir, _) = build_site();

    let fallback = fs::read_to_string(dir.path().join("404.html")).unwrap();

    assert!(fallback.contains("http-equiv=\"refresh\""));
    assert!(fallback.contains("0;url=/"));
}

#[test]
fn contact_page_links_the_mail_address() {
    let (dir, _) = build_site();

    let contact = fs::read_to_string(dir.path().join("contact/index.html")).unwrap();

    assert!(contact.contains("mailto:glamifiedsolutions@gmail.com"));
    assert!(contact.contains("data-recipient=\"glamifiedsolutions@gmail.com\""));
    // The prefilled fallback link is the encoder's output
    assert!(contact.contains("subject=%5BWebsite%5D%20Inquiry"));
}

#[test]
fn nav_marks_the_current_page_as_active() {
    let (dir, _) = build_site();

    let services = fs::read_to_string(dir.path().join("services/index.html")).unwrap();

    assert!(services.contains("nav-link active\" href=\"/services\""));
    assert!(!services.contains("nav-link active\" href=\"/contact\""));
}

#[test]
fn sitemap_lists_pages_but_not_endpoints() {
    let (dir, _) = build_site();

    let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();

    for path in ["/", "/services/", "/projects/", "/about/", "/recruitment/", "/contact/"] {
        assert!(
            sitemap.contains(&format!("<loc>https://glamifiedsolutions.com{path}</loc>")),
            "sitemap missing {path}"
        );
    }
    assert!(!sitemap.contains("404.html"));
    assert!(!sitemap.contains("robots.txt"));
}

#[test]
fn robots_txt_references_the_sitemap() {
    let (dir, _) = build_site();

    let robots = fs::read_to_string(dir.path().join("robots.txt")).unwrap();

    assert!(robots.starts_with("User-agent: *"));
    assert!(robots.contains("Sitemap: https://glamifiedsolutions.com/sitemap.xml"));
}
