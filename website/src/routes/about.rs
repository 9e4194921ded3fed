use maud::html;
use vitrine::route::{PageContext, RenderResult, Route};

use crate::components::{heading, section};
use crate::config::SITE;
use crate::layout::{SeoMeta, layout};
use crate::routes::PageId;

pub struct About;

const VALUES: [(&str, &str); 3] = [
    (
        "Clarity over clutter",
        "We remove friction until only the essential remains.",
    ),
    (
        "Integrity in delivery",
        "Transparent scopes, predictable sprints, measurable outcomes.",
    ),
    (
        "Accessibility first",
        "Inclusive design as a non-negotiable baseline.",
    ),
];

impl Route for About {
    fn path(&self) -> &'static str {
        PageId::About.path()
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        layout(
            section(html! {
                (heading("About Glamified Solutions"))
                div class="split" {
                    div {
                        p class="muted" {
                            "Our mission is to elevate digital products through restraint and rigor: "
                            "products that look calm and feel instant. We operate as a senior, "
                            "cross-functional pod that plugs into your roadmap and ships meaningful "
                            "increments."
                        }
                        p class="muted" {
                            "Leadership has delivered platforms for commerce, fintech, hospitality, "
                            "and SaaS. We favor open standards, type safety, and observability."
                        }
                        div class="card-grid three" {
                            @for (title, description) in VALUES {
                                div class="card value-card" {
                                    div class="card-title" { (title) }
                                    p class="muted" { (description) }
                                }
                            }
                        }
                    }
                    div class="side-image" {
                        img src="https://images.unsplash.com/photo-1545235617-9465d2a55698?q=80&w=1600&auto=format&fit=crop"
                            alt="Studio"
                            loading="lazy";
                    }
                }
            }),
            PageId::About,
            SeoMeta {
                title: "About".to_string(),
                description: Some(
                    "A senior, cross-functional pod elevating digital products through \
                     restraint and rigor."
                        .to_string(),
                ),
            },
            &SITE,
            ctx,
        )
        .into()
    }
}
