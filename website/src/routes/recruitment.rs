use maud::html;
use vitrine::route::{PageContext, RenderResult, Route};

use crate::components::{check_list, cta, heading, section};
use crate::config::SITE;
use crate::layout::{SeoMeta, layout};
use crate::routes::PageId;

pub struct Recruitment;

struct OpenRole {
    title: &'static str,
    kind: &'static str,
    bullets: [&'static str; 3],
}

const EMPLOYER_SERVICES: [&str; 4] = [
    "Role scoping & scorecards",
    "2-round technical screening",
    "Onsite-ready takehomes (optional)",
    "Offer support & onboarding",
];

const OPEN_ROLES: [OpenRole; 2] = [
    OpenRole {
        title: "Senior Frontend Engineer",
        kind: "Remote / India",
        bullets: [
            "React + TypeScript expertise",
            "Care about a11y & perf",
            "Own features end-to-end",
        ],
    },
    OpenRole {
        title: "Product Designer",
        kind: "Remote / Hybrid",
        bullets: [
            "Systems thinker",
            "Micro-interactions & motion",
            "Figma + tokens",
        ],
    },
];

impl Route for Recruitment {
    fn path(&self) -> &'static str {
        PageId::Recruitment.path()
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        layout(
            section(html! {
                (heading("Recruitment & Hiring Solutions"))
                p class="lede" {
                    "We help clients hire exceptional tech talent and we also hire selectively "
                    "for our own team. Our talent network spans frontend, backend, data, DevOps, "
                    "and product design."
                }
                div class="card-grid two" {
                    div class="card" {
                        div class="card-title" { "For Employers" }
                        (check_list(&EMPLOYER_SERVICES))
                        div class="section-actions" {
                            (cta(PageId::Contact, "Request talent shortlist"))
                        }
                    }
                    div class="card" {
                        div class="card-title" { "Join Our Team" }
                        p class="muted" {
                            "We keep a high bar and a calm pace. If you value craft and kindness, "
                            "we'd love to hear from you."
                        }
                        div class="card-stack" {
                            @for role in &OPEN_ROLES {
                                div class="card role-card" {
                                    div class="card-title" { (role.title) }
                                    div class="role-kind" { (role.kind) }
                                    (check_list(&role.bullets))
                                }
                            }
                        }
                        div class="section-actions" {
                            (cta(PageId::Contact, "Apply"))
                        }
                    }
                }
            }),
            PageId::Recruitment,
            SeoMeta {
                title: "Recruitment".to_string(),
                description: Some(
                    "Hiring support for employers and open roles on our own team, across \
                     engineering, data, and design."
                        .to_string(),
                ),
            },
            &SITE,
            ctx,
        )
        .into()
    }
}
