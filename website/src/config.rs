//! Site identity. One value, passed explicitly to whatever renders it.

pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    /// Country code and digits only, shared by the `tel:` and WhatsApp links.
    pub phone_digits: &'static str,
    pub location: &'static str,
}

impl SiteInfo {
    pub fn tel_url(&self) -> String {
        format!("tel:+{}", self.phone_digits)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.phone_digits)
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Glamified Solutions",
    tagline: "We craft digital experiences with minimal luxury: fast, simple, and built to scale.",
    email: "glamifiedsolutions@gmail.com",
    phone_display: "+91 95169 29348",
    phone_digits: "919516929348",
    location: "India • Remote-first",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_links_share_the_phone_number() {
        assert_eq!(SITE.whatsapp_url(), "https://wa.me/919516929348");
        assert_eq!(SITE.tel_url(), "tel:+919516929348");
    }

    #[test]
    fn test_mailto_link_targets_the_site_address() {
        assert_eq!(SITE.mailto_url(), "mailto:glamifiedsolutions@gmail.com");
    }
}
