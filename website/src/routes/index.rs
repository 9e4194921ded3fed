use maud::html;
use vitrine::route::{PageContext, RenderResult, Route};

use crate::components::{check_list, cta, ghost_link, heading, metric, section};
use crate::config::SITE;
use crate::layout::{SeoMeta, layout};
use crate::routes::PageId;

pub struct Index;

const SELLING_POINTS: [&str; 3] = [
    "AI that ships (not slides).",
    "Product strategy with technical depth.",
    "Accessible, SEO-strong, and fast by default.",
];

const FEATURES: [(&str, &str); 4] = [
    (
        "AI Engineering",
        "Applied ML, RAG pipelines, model evals, privacy-minded deployment.",
    ),
    (
        "Software Development",
        "Type-safe web apps, mobile-ready frontends, scalable APIs & DevOps.",
    ),
    (
        "IT & Cloud Solutions",
        "Cloud architecture, cost optimization, observability, zero-downtime releases.",
    ),
    (
        "Consulting & Strategy",
        "Roadmapping, UX audits, PMF experiments, growth SEO.",
    ),
];

impl Route for Index {
    fn path(&self) -> &'static str {
        PageId::Home.path()
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        layout(
            html! {
                (section(html! {
                    div class="hero" {
                        div {
                            h1 {
                                "Technology, AI & Product Development, "
                                span class="accent" { "built to perform" }
                            }
                            p class="lede" {
                                "Glamified Solutions blends AI engineering, robust software craftsmanship, "
                                "and sharp product sense. We deliver outcomes: faster releases, measurable "
                                "SEO wins, and interfaces that feel effortless."
                            }
                            div class="hero-actions" {
                                (cta(PageId::Services, "Explore Services"))
                                (ghost_link(PageId::Projects, "View Case Studies"))
                            }
                            (check_list(&SELLING_POINTS))
                        }
                        div class="hero-image" {
                            img src="https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1600&auto=format&fit=crop"
                                alt="AI & product engineering"
                                loading="lazy";
                        }
                    }
                }))

                (section(html! {
                    (heading("What we do best"))
                    div class="card-grid four" {
                        @for (title, description) in FEATURES {
                            div class="card" {
                                div class="card-title" { (title) }
                                p class="muted" { (description) }
                            }
                        }
                    }
                }))

                (section(html! {
                    div class="metric-row" {
                        (metric("1.6s", "LCP on 4G"))
                        (metric("+28%", "Lead conversion uplift"))
                        (metric("99.95%", "Observed uptime"))
                    }
                }))
            },
            PageId::Home,
            SeoMeta::default(),
            &SITE,
            ctx,
        )
        .into()
    }
}
