use maud::{Markup, html};
use vitrine::route::{PageContext, RenderResult, Route};

use crate::components::{check_list, cta, heading, section};
use crate::config::SITE;
use crate::layout::{SeoMeta, layout};
use crate::routes::PageId;

pub struct Services;

struct Service {
    anchor: &'static str,
    title: &'static str,
    points: [&'static str; 3],
}

const SERVICES: [Service; 4] = [
    Service {
        anchor: "ai",
        title: "AI Engineering",
        points: [
            "RAG & vector search on your data",
            "Model selection, evals & guardrails",
            "LLM apps with observability & cost control",
        ],
    },
    Service {
        anchor: "web",
        title: "Software Development",
        points: [
            "React/TypeScript frontends",
            "Node/Edge APIs, GraphQL & REST",
            "CI/CD, testing, performance budgets",
        ],
    },
    Service {
        anchor: "perf",
        title: "IT & Cloud Solutions",
        points: [
            "Cloud architecture & security baselines",
            "Infra as Code, auto-scaling, CDN",
            "Monitoring, alerting, SLOs",
        ],
    },
    Service {
        anchor: "uiux",
        title: "Consulting & Product Strategy",
        points: [
            "UX research & design systems",
            "Roadmaps, OKRs, and ROI models",
            "SEO/IA audits & experimentation",
        ],
    },
];

fn service_card(service: &Service) -> Markup {
    html! {
        div class="card service-card" id=(service.anchor) {
            div class="card-title" { (service.title) }
            (check_list(&service.points))
        }
    }
}

impl Route for Services {
    fn path(&self) -> &'static str {
        PageId::Services.path()
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        layout(
            section(html! {
                (heading("Services: AI, Product & IT, end to end"))
                p class="lede" {
                    "From ideation to launch and ongoing growth, we combine strategy, design, "
                    "and engineering. Engagements are transparent, sprint-based, and outcome-driven."
                }
                div class="split" {
                    div class="card-stack" {
                        @for service in &SERVICES {
                            (service_card(service))
                        }
                    }
                    div class="side-image" {
                        img src="https://images.unsplash.com/photo-1498050108023-c5249f4df085?q=80&w=1600&auto=format&fit=crop"
                            alt="Engineering"
                            loading="lazy";
                    }
                }
                div class="section-actions" {
                    (cta(PageId::Contact, "Book a discovery call"))
                }
            }),
            PageId::Services,
            SeoMeta {
                title: "Services".to_string(),
                description: Some(
                    "AI engineering, software development, cloud, and product strategy, \
                     delivered end to end in transparent, outcome-driven sprints."
                        .to_string(),
                ),
            },
            &SITE,
            ctx,
        )
        .into()
    }
}
