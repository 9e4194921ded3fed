//! The pages of the site.
//!
//! Every reachable path belongs to exactly one [`PageId`]; anything outside
//! the known set resolves to the home page. The same registry drives the
//! header navigation, footer links, and in-page CTAs, so links can't drift
//! from the route surface.

mod about;
mod contact;
mod index;
mod projects;
mod recruitment;
mod robots;
mod services;

pub use about::About;
pub use contact::Contact;
pub use index::Index;
pub use projects::Projects;
pub use recruitment::Recruitment;
pub use robots::Robots;
pub use services::Services;

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;

/// Identifies one of the site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Services,
    Projects,
    About,
    Recruitment,
    Contact,
}

impl PageId {
    /// Header navigation, in display order.
    pub const NAV: [PageId; 6] = [
        PageId::Home,
        PageId::Services,
        PageId::Projects,
        PageId::About,
        PageId::Recruitment,
        PageId::Contact,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            PageId::Home => "/",
            PageId::Services => "/services",
            PageId::Projects => "/projects",
            PageId::About => "/about",
            PageId::Recruitment => "/recruitment",
            PageId::Contact => "/contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Services => "Services",
            PageId::Projects => "Projects",
            PageId::About => "About",
            PageId::Recruitment => "Recruitment",
            PageId::Contact => "Contact",
        }
    }

    /// Resolves a request path to a page.
    ///
    /// The mapping is total: query strings, fragments, and trailing slashes
    /// are ignored, and any path outside the known set falls back to
    /// [`PageId::Home`] rather than a not-found page.
    pub fn from_path(path: &str) -> PageId {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match path {
            "" => PageId::Home,
            "/services" => PageId::Services,
            "/projects" => PageId::Projects,
            "/about" => PageId::About,
            "/recruitment" => PageId::Recruitment,
            "/contact" => PageId::Contact,
            _ => PageId::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve_to_their_page() {
        assert_eq!(PageId::from_path("/"), PageId::Home);
        assert_eq!(PageId::from_path("/services"), PageId::Services);
        assert_eq!(PageId::from_path("/projects"), PageId::Projects);
        assert_eq!(PageId::from_path("/about"), PageId::About);
        assert_eq!(PageId::from_path("/recruitment"), PageId::Recruitment);
        assert_eq!(PageId::from_path("/contact"), PageId::Contact);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(PageId::from_path("/xyz"), PageId::Home);
        assert_eq!(PageId::from_path("/services/extra"), PageId::Home);
        assert_eq!(PageId::from_path("/projects/atlas-insights"), PageId::Home);
    }

    #[test]
    fn test_trailing_slashes_are_ignored() {
        assert_eq!(PageId::from_path("/services/"), PageId::Services);
        assert_eq!(PageId::from_path("/contact///"), PageId::Contact);
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(PageId::from_path("/about?utm_source=mail"), PageId::About);
        assert_eq!(PageId::from_path("/services#uiux"), PageId::Services);
    }

    #[test]
    fn test_every_nav_path_round_trips() {
        for page in PageId::NAV {
            assert_eq!(PageId::from_path(page.path()), page);
        }
    }
}
