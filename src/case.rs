//! Identifier case rules: snake_case keys from the database, camelCase keys for the API.
//!
//! Only ASCII letters take part in a rewrite. Anything else is copied through as-is.

use std::fmt;

/// Direction of a key rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCase {
    /// `total_seats` -> `totalSeats`
    Camel,
    /// `totalSeats` -> `total_seats`
    Snake,
}

impl KeyCase {
    /// Rename one identifier in this direction.
    pub fn apply(self, key: &str) -> String {
        match self {
            KeyCase::Camel => to_camel_case(key),
            KeyCase::Snake => to_snake_case(key),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCase::Camel => f.write_str("camelCase"),
            KeyCase::Snake => f.write_str("snake_case"),
        }
    }
}

/// Convert a single identifier from snake_case to camelCase.
/// e.g. "user_id" -> "userId", "created_at" -> "createdAt"
///
/// Each `_` directly followed by `a`..=`z` collapses into the uppercase letter.
/// Any other underscore is kept: "a_1" and "trailing_" are unchanged, "a__b" -> "a_B".
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "userId" -> "user_id", "createdAt" -> "created_at"
///
/// Every `A`..=`Z` becomes `_` plus the lowercase letter, including a leading one ("Id" -> "_id").
pub fn to_snake_case(s: &str) -> String {
    let uppers = s.bytes().filter(u8::is_ascii_uppercase).count();
    let mut out = String::with_capacity(s.len() + uppers);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
