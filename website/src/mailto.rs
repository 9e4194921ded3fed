//! Builds the `mailto:` URI the contact form hands to the visitor's mail client.
//!
//! The site never sends mail itself. Submitting the form navigates the
//! browser to the URI built here, which opens the default mail client with
//! recipient, subject, and body prefilled (RFC 6068). The in-page script
//! performs the same encoding at submit time; this module is the canonical
//! definition of it and prefills the direct-mail fallback link at build time.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left intact by `encodeURIComponent`: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SUBJECT_PREFIX: &str = "[Website] ";
const SUBJECT_FALLBACK: &str = "Inquiry";

fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_ENCODE_SET).to_string()
}

/// A single contact-form submission.
///
/// Built at the form boundary, used once to produce the outgoing URI, never
/// persisted. Required-field enforcement (name, email, message) is the
/// browser's native form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// `[Website] <name>`, or a fixed fallback subject when no name was given.
    pub fn subject(&self) -> String {
        if self.name.is_empty() {
            format!("{SUBJECT_PREFIX}{SUBJECT_FALLBACK}")
        } else {
            format!("{SUBJECT_PREFIX}{}", self.name)
        }
    }

    /// The four labeled body lines, always in the same order.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nMessage: {}",
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or(""),
            self.message
        )
    }
}

/// Builds the percent-encoded `mailto:` URI for a submission.
pub fn mailto_uri(recipient: &str, submission: &ContactSubmission) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(&submission.subject()),
        encode_component(&submission.body())
    )
}

/// A prefilled template mail, used by the "write to us directly" link on the
/// contact page.
pub fn template_uri(recipient: &str) -> String {
    mailto_uri(recipient, &ContactSubmission::default())
}
