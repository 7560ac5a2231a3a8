//! Random identifiers for toasts, drafts, and anything else the console keys.

#[cfg(test)]
#[path = "id_test.rs"]
mod tests;

use uuid::Uuid;

/// Generate a random version-4 UUID as lowercase hyphenated text.
#[must_use]
pub fn uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Check that `raw` has the version-4 layout `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`
/// with lowercase hex digits and `y` in `8..=b`.
#[must_use]
pub fn is_v4_layout(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        let ok = match i {
            8 | 13 | 18 | 23 => b == b'-',
            14 => b == b'4',
            19 => matches!(b, b'8' | b'9' | b'a' | b'b'),
            _ => b.is_ascii_digit() || (b'a'..=b'f').contains(&b),
        };
        if !ok {
            return false;
        }
    }
    true
}
