use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use vitrine::route::PageContext;

mod header;
pub use header::header;

use crate::config::SiteInfo;
use crate::routes::PageId;

const CLIENT_LOGOS: [(&str, &str); 6] = [
    (
        "Vite",
        "https://upload.wikimedia.org/wikipedia/commons/f/f1/Vitejs-logo.svg",
    ),
    (
        "React",
        "https://upload.wikimedia.org/wikipedia/commons/a/a7/React-icon.svg",
    ),
    (
        "Tailwind",
        "https://upload.wikimedia.org/wikipedia/commons/d/d5/Tailwind_CSS_Logo.svg",
    ),
    (
        "Cloudflare",
        "https://upload.wikimedia.org/wikipedia/commons/4/4b/Cloudflare_Logo.svg",
    ),
    ("Supabase", "https://supabase.com/images/logo-dark.svg"),
    (
        "Netlify",
        "https://www.netlify.com/v3/img/components/logomark-dark.png",
    ),
];

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "Glamified Solutions".to_string(),
            description: Some(
                "Technology, AI and product development for teams that want outcomes: \
                 faster releases, measurable SEO wins, and interfaces that feel effortless."
                    .to_string(),
            ),
        }
    }
}

impl SeoMeta {
    pub fn render(&self, site: &SiteInfo, ctx: &PageContext) -> Markup {
        let formatted_title = if self.title == site.name {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, site.name)
        };

        let description = self
            .description
            .clone()
            .unwrap_or_else(|| SeoMeta::default().description.unwrap_or_default());

        let canonical_url = ctx.canonical_url();

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            // Open Graph meta tags
            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(canonical_url) = &canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }
        }
    }
}

pub fn layout(
    main: Markup,
    active: PageId,
    seo: SeoMeta,
    site: &SiteInfo,
    ctx: &PageContext,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(vitrine::GENERATOR);
                link rel="icon" href="/favicon.svg";
                link rel="stylesheet" href="/styles.css";
                (seo.render(site, ctx))
            }
            body {
                (header(site, active))
                (marquee())
                main {
                    (main)
                }
                (footer(site))
                (whatsapp_button(site))
            }
        }
    }
}

fn marquee() -> Markup {
    html! {
        div class="marquee" {
            div class="container marquee-track" {
                // The list is doubled so the animation loops without a gap
                @for _ in 0..2 {
                    @for (alt, src) in CLIENT_LOGOS {
                        img src=(src) alt=(alt) loading="lazy";
                    }
                }
            }
        }
    }
}

fn footer(site: &SiteInfo) -> Markup {
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                div {
                    div class="brand" {
                        (PreEscaped(include_str!("../assets/logo.svg")))
                        span class="brand-name" { (site.name) }
                    }
                    p class="muted" { (site.tagline) }
                }
                div class="footer-links" {
                    div {
                        div class="footer-title" { "Company" }
                        a href=(PageId::About.path()) { "About" }
                        a href=(PageId::Projects.path()) { "Projects" }
                        a href=(PageId::Recruitment.path()) { "Careers" }
                    }
                    div {
                        div class="footer-title" { "Services" }
                        a href=(PageId::Services.path()) { "AI & Web Engineering" }
                        a href=(format!("{}#uiux", PageId::Services.path())) { "UI/UX" }
                        a href=(format!("{}#perf", PageId::Services.path())) { "Performance" }
                    }
                }
                div {
                    div class="footer-title" { "Contact" }
                    p class="muted" { (site.email) }
                    p class="muted" { (site.phone_display) }
                }
            }
            div class="footer-copyright" {
                (format!("© {} {}. All rights reserved.", chrono::Local::now().year(), site.name))
            }
        }
    }
}

fn whatsapp_button(site: &SiteInfo) -> Markup {
    html! {
        a class="whatsapp-button"
            href=(site.whatsapp_url())
            target="_blank"
            rel="noreferrer"
            aria-label="Chat on WhatsApp" {
            (PreEscaped(include_str!("../assets/whatsapp.svg")))
        }
    }
}
