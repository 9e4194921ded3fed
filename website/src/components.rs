//! Small markup helpers shared by the pages.

use maud::{Markup, html};

use crate::routes::PageId;

pub fn section(inner: Markup) -> Markup {
    html! {
        section class="section" {
            div class="container" {
                (inner)
            }
        }
    }
}

pub fn heading(text: &str) -> Markup {
    html! {
        h2 class="luxe-underline" { (text) }
    }
}

/// Primary call-to-action button linking to another page.
pub fn cta(target: PageId, label: &str) -> Markup {
    html! {
        a class="cta-button" href=(target.path()) {
            (label)
            span class="cta-arrow" { "→" }
        }
    }
}

/// Secondary, outlined link next to a [`cta`].
pub fn ghost_link(target: PageId, label: &str) -> Markup {
    html! {
        a class="ghost-button" href=(target.path()) { (label) }
    }
}

pub fn metric(value: &str, label: &str) -> Markup {
    html! {
        div class="metric" {
            div class="metric-value" { (value) }
            div class="metric-label" { (label) }
        }
    }
}

pub fn check_list(items: &[&str]) -> Markup {
    html! {
        ul class="check-list" {
            @for item in items {
                li {
                    span class="check" aria-hidden="true" { "✓" }
                    (item)
                }
            }
        }
    }
}
