use vitrine::route::{PageContext, RenderResult, Route};

pub struct Robots;

impl Route for Robots {
    fn path(&self) -> &'static str {
        "robots.txt"
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        let mut robots = String::from("User-agent: *\nAllow: /\n");

        if let Some(base_url) = ctx.base_url {
            robots.push_str(&format!(
                "Sitemap: {}/sitemap.xml\n",
                base_url.trim_end_matches('/')
            ));
        }

        robots.into()
    }
}
