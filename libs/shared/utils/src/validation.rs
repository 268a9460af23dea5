use regex::Regex;
use std::sync::OnceLock;

/// Simple local@domain.tld check, same pattern the form always used.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
    pattern.is_match(email)
}

pub fn is_ten_digit_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Phone input filter: keep digits only, capped at ten characters.
pub fn normalize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(10)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@clinic.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two words@x.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        assert!(is_ten_digit_phone("9876543210"));
        assert!(!is_ten_digit_phone("987654321"));
        assert!(!is_ten_digit_phone("98765432100"));
        assert!(!is_ten_digit_phone("987654321x"));
    }

    #[test]
    fn normalize_strips_and_caps() {
        assert_eq!(normalize_phone("(987) 654-3210"), "9876543210");
        assert_eq!(normalize_phone("98765432109999"), "9876543210");
        assert_eq!(normalize_phone("abc"), "");
    }
}
