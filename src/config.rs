//! Site-wide contact constants and link builders.

pub const WHATSAPP_NUMBER: &str = "5511999999999";
pub const CONTACT_EMAIL: &str = "contato@carvacode.com";
pub const CONTACT_PHONE_DISPLAY: &str = "(11) 99999-9999";
pub const WORKING_HOURS: &str = "Seg-Sex 9h às 18h";

/// WhatsApp deep link with a prefilled, URL-encoded message.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

pub fn mailto_url() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url("Olá! Gostaria de agendar uma consultoria.");
        assert!(url.starts_with("https://wa.me/5511999999999?text="));
        assert!(url.contains("Ol%C3%A1%21%20Gostaria"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_mailto_url() {
        assert_eq!(mailto_url(), "mailto:contato@carvacode.com");
    }
}
