use std::path::{Path, PathBuf};

pub fn guess_if_route_is_endpoint(raw_route: &str) -> bool {
    let real_path = Path::new(&raw_route);

    real_path.extension().is_some()
}

pub fn route_url(raw_route: &str) -> String {
    // Collapse consecutive slashes
    let parts: Vec<&str> = raw_route.split('/').filter(|s| !s.is_empty()).collect();
    let mut result = parts.join("/");

    // Ensure leading slash
    if !result.starts_with('/') {
        result.insert(0, '/');
    }

    // Ensure trailing slash for non-endpoints
    if !guess_if_route_is_endpoint(raw_route) && !result.ends_with('/') {
        result.push('/');
    }

    result
}

pub fn route_file_path(raw_route: &str, output_dir: &Path) -> PathBuf {
    let mut path = PathBuf::from(output_dir);
    path.extend(raw_route.split('/').filter(|s| !s.is_empty()));

    if !guess_if_route_is_endpoint(raw_route) {
        path.push("index.html");
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_guess_extension() {
        assert!(guess_if_route_is_endpoint("/api/data.json"));
        assert!(guess_if_route_is_endpoint("404.html"));
        assert!(guess_if_route_is_endpoint("/robots.txt"));
    }

    #[test]
    fn test_endpoint_guess_page() {
        assert!(!guess_if_route_is_endpoint("/"));
        assert!(!guess_if_route_is_endpoint("/about"));
        assert!(!guess_if_route_is_endpoint("/projects/"));
    }

    #[test]
    fn test_route_url_collapses_consecutive_slashes() {
        assert_eq!(route_url("//about//team"), "/about/team/");
    }

    #[test]
    fn test_route_url_root() {
        assert_eq!(route_url("/"), "/");
    }

    #[test]
    fn test_route_url_existing_trailing_slash() {
        assert_eq!(route_url("/about/"), "/about/");
    }

    #[test]
    fn test_file_path_strips_empty_segments() {
        let expected = Path::new("/dist/about/team/index.html");

        assert_eq!(route_file_path("//about//team/", Path::new("/dist")), expected);
    }
}
