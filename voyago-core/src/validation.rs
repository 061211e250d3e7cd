use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\+?[\d\s\-\(\)]{10,15}$").expect("phone pattern is valid")
    })
}

/// Standard email address check.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Phone numbers: 10-15 characters of digits, spaces, hyphens or
/// parentheses, with an optional leading `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

/// IATA location codes are exactly three ASCII letters.
pub fn is_valid_iata(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(is_valid_email("a+b@sub.domain.co"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("trailing@dot."));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(is_valid_phone("(022) 555-1234"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("12345678901234567890"));
        assert!(!is_valid_phone("98765x3210"));
    }

    #[test]
    fn test_iata_validation() {
        assert!(is_valid_iata("DEL"));
        assert!(is_valid_iata("bom"));
        assert!(!is_valid_iata("DELH"));
        assert!(!is_valid_iata("D1L"));
        assert!(!is_valid_iata(""));
    }
}
