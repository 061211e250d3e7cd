use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alphabet for booking references: uppercase letters and digits only.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default reference length, matching the confirmation codes shown to users.
pub const DEFAULT_REFERENCE_LENGTH: usize = 8;

/// Opaque confirmation identifier returned to the user on success.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// Draw a random reference of the given length. Uniqueness is the
    /// caller's concern: the assembler re-draws on collision against the
    /// booking store.
    pub fn generate(length: usize) -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reference_format() {
        let reference = BookingReference::generate(DEFAULT_REFERENCE_LENGTH);
        assert_eq!(reference.as_str().len(), DEFAULT_REFERENCE_LENGTH);
        assert!(reference
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_no_collisions_over_many_draws() {
        // 36^8 possible codes; 10k draws should never collide in practice.
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let reference = BookingReference::generate(DEFAULT_REFERENCE_LENGTH);
            assert_eq!(reference.as_str().len(), DEFAULT_REFERENCE_LENGTH);
            assert!(seen.insert(reference));
        }
    }
}
