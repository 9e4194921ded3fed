use maud::{PreEscaped, html};
use vitrine::route::{PageContext, RenderResult, Route};

use crate::components::{heading, section};
use crate::config::SITE;
use crate::layout::{SeoMeta, layout};
use crate::mailto;
use crate::routes::PageId;

pub struct Contact;

impl Route for Contact {
    fn path(&self) -> &'static str {
        PageId::Contact.path()
    }

    fn render(&self, ctx: &PageContext) -> RenderResult {
        // Prefilled template mail for visitors who skip the form
        let direct_mail = mailto::template_uri(SITE.email);

        layout(
            section(html! {
                (heading("Let's build something refined"))
                p class="lede" { "Tell us what you need. We respond within two business days." }

                // Submission is handed to the visitor's mail client; the page
                // itself never sends anything. Required fields are enforced by
                // the browser's native validation.
                form class="contact-form" data-contact-form data-recipient=(SITE.email) {
                    input required name="name" placeholder="Your name" aria-label="Your name";
                    input required type="email" name="email" placeholder="Email" aria-label="Email";
                    input name="phone" placeholder="Phone" aria-label="Phone" class="span-2";
                    textarea required name="message" placeholder="Message" aria-label="Message"
                        rows="6" class="span-2" {}
                    div class="form-actions span-2" {
                        button type="submit" class="submit-button" data-magnetic { "Send Email" }
                        a class="mail-fallback" href=(direct_mail) {
                            (format!("Or write to {}", SITE.email))
                        }
                    }
                }

                div class="card-grid three contact-cards" {
                    div class="card" { (SITE.email) }
                    div class="card" { (SITE.phone_display) }
                    div class="card" { (SITE.location) }
                }

                script {
                    (PreEscaped(include_str!("../../assets/contact-form.js")))
                }
            }),
            PageId::Contact,
            SeoMeta {
                title: "Contact".to_string(),
                description: Some(
                    "Tell us what you need. We respond within two business days.".to_string(),
                ),
            },
            &SITE,
            ctx,
        )
        .into()
    }
}
