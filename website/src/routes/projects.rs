use maud::html;
use vitrine::route::{PageContext, RenderResult, Route};

use crate::components::{cta, heading, section};
use crate::config::SITE;
use crate::layout::{SeoMeta, layout};
use crate::routes::PageId;

pub struct Projects;

struct CaseStudy {
    client: &'static str,
    title: &'static str,
    summary: &'static str,
    stats: [&'static str; 3],
    image: &'static str,
}

const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        client: "Atlas Insights",
        title: "RAG research assistant for 50k+ PDFs",
        summary: "Retrieval-augmented QA with hybrid search and deterministic citations, \
                  reducing research time by 63%.",
        stats: [
            "-63% research time",
            "Grounded answers with sources",
            "Cost-optimized inference",
        ],
        image: "https://images.unsplash.com/photo-1587613865763-4b8b0b1a6a83?q=80&w=1600&auto=format&fit=crop",
    },
    CaseStudy {
        client: "Vela Commerce",
        title: "Headless storefront with AI-led merchandising",
        summary: "Design system + personalization that adapts collections in real time \
                  based on intent.",
        stats: ["+21% add-to-cart", "1.7s mobile LCP", "0 CLS transitions"],
        image: "https://images.unsplash.com/photo-1520975922284-9c5c0d7c3ffe?q=80&w=1600&auto=format&fit=crop",
    },
    CaseStudy {
        client: "Meridian Fintech",
        title: "Secure onboarding for a fintech scaleup",
        summary: "KYC flow redesign, AA accessibility, and event-driven microservices \
                  with audit trails.",
        stats: ["-35% dev time", "99.95% uptime", "AA contrast throughout"],
        image: "https://images.unsplash.com/photo-1559523182-a284c3fb7ffd?q=80&w=1600&auto=format&fit=crop",
    },
];

impl Route for Projects {
    fn path(&self) -> &'static str {
        PageId::Projects.path()
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        layout(
            section(html! {
                (heading("Case Studies"))
                p class="lede" { "A few recent outcomes across AI, product, and platform." }
                div class="card-grid three" {
                    @for case in &CASE_STUDIES {
                        article class="card case-card" {
                            div class="case-image" {
                                img src=(case.image) alt=(case.client) loading="lazy";
                            }
                            div class="case-body" {
                                div class="case-client" { (case.client) }
                                div class="card-title" { (case.title) }
                                p class="muted" { (case.summary) }
                                ul class="stat-chips" {
                                    @for stat in case.stats {
                                        li { (stat) }
                                    }
                                }
                            }
                        }
                    }
                }
                div class="section-actions" {
                    (cta(PageId::Contact, "Request a detailed deck"))
                }
            }),
            PageId::Projects,
            SeoMeta {
                title: "Projects".to_string(),
                description: Some(
                    "Case studies across AI, product, and platform work, with the \
                     outcomes that mattered."
                        .to_string(),
                ),
            },
            &SITE,
            ctx,
        )
        .into()
    }
}
