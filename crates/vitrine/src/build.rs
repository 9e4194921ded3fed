use std::fs;
use std::path::Path;
use std::time::Instant;

use colored::{ColoredString, Colorize};
use log::info;
use rustc_hash::FxHashSet;

use crate::BuildOptions;
use crate::build::metadata::BuildOutput;
use crate::errors::BuildError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title};
use crate::route::{PageContext, Route};
use crate::sitemap::{SitemapEntry, generate_sitemap};

pub mod metadata;
pub mod options;

pub fn execute_build(
    routes: &[&dyn Route],
    options: &BuildOptions,
) -> Result<BuildOutput, BuildError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    if options.sitemap.enabled && options.base_url.is_none() {
        return Err(BuildError::SitemapWithoutBaseUrl);
    }

    // Every path must resolve to exactly one page
    let mut seen_routes = FxHashSet::default();
    for route in routes {
        if !seen_routes.insert(route.url()) {
            return Err(BuildError::DuplicateRoute { route: route.url() });
        }
    }

    if options.clean_output_dir && options.output_dir.exists() {
        let _ = fs::remove_dir_all(&options.output_dir);
    }

    fs::create_dir_all(&options.output_dir).map_err(|source| BuildError::CreateDirFailed {
        path: options.output_dir.clone(),
        source,
    })?;

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    if let Some(static_dir) = &options.static_dir {
        if static_dir.exists() {
            print_title("copying static files");
            copy_static_dir(static_dir, static_dir, &options.output_dir, &mut build_metadata)?;
        }
    }

    print_title("generating pages");
    let pages_start = Instant::now();

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let section_format_options = FormatElapsedTimeOptions {
        sec_red_threshold: 5,
        sec_yellow_threshold: 1,
        millis_red_threshold: None,
        millis_yellow_threshold: None,
        ..Default::default()
    };

    let mut sitemap_entries = Vec::new();

    for route in routes {
        let route_start = Instant::now();

        let url = route.url();
        let ctx = PageContext {
            current_path: &url,
            base_url: options.base_url.as_deref(),
        };

        let result = route.render(&ctx);

        let file_path = route.file_path(&options.output_dir);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|source| BuildError::CreateDirFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&file_path, result.into_bytes()).map_err(|source| BuildError::WriteFailed {
            route: url.clone(),
            path: file_path.clone(),
            source,
        })?;

        info!(
            target: "build",
            "{} {}",
            url.bold(),
            format_elapsed_time(route_start.elapsed(), &route_format_options)
        );

        if !route.is_endpoint() {
            if let Some(base_url) = &options.base_url {
                sitemap_entries.push(SitemapEntry {
                    loc: format!("{}{}", base_url.trim_end_matches('/'), url),
                });
            }
        }

        build_metadata.add_page(url, file_path);
    }

    info!(
        target: "build",
        "{}",
        format!(
            "{} pages generated in {}",
            build_metadata.pages.len(),
            format_elapsed_time(pages_start.elapsed(), &section_format_options)
        )
        .bold()
    );

    if options.sitemap.enabled {
        generate_sitemap(sitemap_entries, &options.output_dir, &options.sitemap)?;
    }

    info!(
        target: "build",
        "{}",
        format!(
            "Build completed in {}",
            format_elapsed_time(build_start.elapsed(), &section_format_options)
        )
        .bold()
    );

    Ok(build_metadata)
}

fn copy_static_dir(
    dir: &Path,
    static_root: &Path,
    output_dir: &Path,
    build_metadata: &mut BuildOutput,
) -> Result<(), BuildError> {
    let entries = fs::read_dir(dir).map_err(|source| BuildError::StaticCopyFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| BuildError::StaticCopyFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let Ok(relative) = path.strip_prefix(static_root) else {
            continue;
        };
        let destination = output_dir.join(relative);

        if path.is_dir() {
            fs::create_dir_all(&destination).map_err(|source| BuildError::CreateDirFailed {
                path: destination.clone(),
                source,
            })?;
            copy_static_dir(&path, static_root, output_dir, build_metadata)?;
        } else {
            fs::copy(&path, &destination).map_err(|source| BuildError::StaticCopyFailed {
                path: path.clone(),
                source,
            })?;
            build_metadata.add_static_file(destination, path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RenderResult;
    use crate::sitemap::SitemapOptions;

    struct TestRoute {
        route: &'static str,
        body: &'static str,
    }

    impl Route for TestRoute {
        fn path(&self) -> &'static str {
            self.route
        }

        fn render(&self, _ctx: &PageContext) -> RenderResult {
            self.body.into()
        }
    }

    fn options_for(dir: &Path) -> BuildOptions {
        BuildOptions {
            output_dir: dir.to_path_buf(),
            static_dir: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_writes_pages_and_endpoints() {
        let dir = tempfile::tempdir().unwrap();

        let index = TestRoute {
            route: "/",
            body: "<h1>index</h1>",
        };
        let about = TestRoute {
            route: "/about",
            body: "<h1>about</h1>",
        };
        let not_found = TestRoute {
            route: "404.html",
            body: "<h1>redirect</h1>",
        };

        let output = execute_build(
            &[&index, &about, &not_found],
            &options_for(dir.path()),
        )
        .unwrap();

        assert_eq!(output.pages.len(), 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "<h1>index</h1>"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("about/index.html")).unwrap(),
            "<h1>about</h1>"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("404.html")).unwrap(),
            "<h1>redirect</h1>"
        );
    }

    #[test]
    fn test_build_rejects_duplicate_routes() {
        let dir = tempfile::tempdir().unwrap();

        let first = TestRoute {
            route: "/about",
            body: "",
        };
        let second = TestRoute {
            route: "/about/",
            body: "",
        };

        let error = execute_build(&[&first, &second], &options_for(dir.path())).unwrap_err();

        assert!(matches!(error, BuildError::DuplicateRoute { .. }));
    }

    #[test]
    fn test_sitemap_requires_base_url() {
        let dir = tempfile::tempdir().unwrap();

        let mut options = options_for(dir.path());
        options.sitemap = SitemapOptions {
            enabled: true,
            ..Default::default()
        };

        let error = execute_build(&[], &options).unwrap_err();

        assert!(matches!(error, BuildError::SitemapWithoutBaseUrl));
    }

    #[test]
    fn test_sitemap_excludes_endpoints() {
        let dir = tempfile::tempdir().unwrap();

        let index = TestRoute {
            route: "/",
            body: "",
        };
        let not_found = TestRoute {
            route: "404.html",
            body: "",
        };

        let mut options = options_for(dir.path());
        options.base_url = Some("https://example.com".to_string());
        options.sitemap = SitemapOptions {
            enabled: true,
            ..Default::default()
        };

        execute_build(&[&index, &not_found], &options).unwrap();

        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(!xml.contains("404.html"));
    }

    #[test]
    fn test_static_files_copied() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = tempfile::tempdir().unwrap();

        fs::write(static_dir.path().join("styles.css"), "body {}").unwrap();
        fs::create_dir(static_dir.path().join("fonts")).unwrap();
        fs::write(static_dir.path().join("fonts/serif.woff2"), [0u8; 4]).unwrap();

        let mut options = options_for(dir.path());
        options.static_dir = Some(static_dir.path().to_path_buf());

        let output = execute_build(&[], &options).unwrap();

        assert_eq!(output.static_files.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("styles.css")).unwrap(),
            "body {}"
        );
        assert!(dir.path().join("fonts/serif.woff2").exists());
    }

    #[test]
    fn test_clean_output_dir_removes_stale_files() {
        let dir = tempfile::tempdir().unwrap();

        fs::write(dir.path().join("stale.html"), "old").unwrap();

        let index = TestRoute {
            route: "/",
            body: "new",
        };

        execute_build(&[&index], &options_for(dir.path())).unwrap();

        assert!(!dir.path().join("stale.html").exists());
        assert!(dir.path().join("index.html").exists());
    }
}
