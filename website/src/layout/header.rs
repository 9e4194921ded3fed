use maud::{Markup, PreEscaped, html};

use crate::config::SiteInfo;
use crate::routes::PageId;

pub fn header(site: &SiteInfo, active: PageId) -> Markup {
    html! {
        header class="site-header" {
            div class="container header-inner" {
                a class="brand" href=(PageId::Home.path()) aria-label=(format!("{} home", site.name)) {
                    (PreEscaped(include_str!("../../assets/logo.svg")))
                    span class="brand-name" { (site.name) }
                }
                nav class="site-nav" {
                    @for page in PageId::NAV {
                        a class=(if page == active { "nav-link active" } else { "nav-link" })
                            href=(page.path()) {
                            (page.label())
                        }
                    }
                }
                a class="call-button" href=(site.tel_url()) { "Call Us" }
            }
        }
    }
}
