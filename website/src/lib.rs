//! The Glamified Solutions marketing site.
//!
//! Six informational pages rendered to static HTML, a mailto-based contact
//! form, and a WhatsApp deep link. [`build()`] is the whole pipeline; the
//! binary in `main.rs` only picks the production options.

pub mod config;
pub mod layout;
pub mod mailto;
pub mod routes;

mod components;

use vitrine::{BuildOptions, BuildOutput, routes, unveil};

use crate::routes::{About, Contact, Index, NotFound, Projects, Recruitment, Robots, Services};

/// Renders every page of the site with the given options.
pub fn build(options: BuildOptions) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    unveil(
        routes![
            Index,
            Services,
            Projects,
            About,
            Recruitment,
            Contact,
            NotFound,
            Robots
        ],
        options,
    )
}
