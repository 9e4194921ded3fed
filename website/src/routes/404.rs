use maud::html;
use vitrine::route::{PageContext, RenderResult, Route};

use crate::routes::PageId;

/// Served by static hosts for any path outside the known set. The immediate
/// refresh gives unknown routes redirect-to-home semantics instead of a dead
/// end.
pub struct NotFound;

impl Route for NotFound {
    fn path(&self) -> &'static str {
        "404.html"
    }

    fn render(&self, _: &PageContext) -> RenderResult {
        html! {
            head {
                meta http-equiv="refresh" content=(format!("0;url={}", PageId::Home.path()));
            }
        }
        .into()
    }
}
