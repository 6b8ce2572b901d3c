//! Query normalisation and PII masking.
//!
//! [`QueryParser::parse`] produces two strings: `normalized`, the form
//! predicates are built from, and `masked`, the only form that may reach
//! logs. Masking must never feed back into predicate construction — that
//! would silently break legitimate searches for an email or phone number.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

const EMAIL_PLACEHOLDER: &str = "[email]";
const PHONE_PLACEHOLDER: &str = "[phone]";

/// A validated query in both of its forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Trimmed, whitespace-collapsed query used for matching. Never empty.
    pub normalized: String,
    /// PII-masked rendition, for audit logging only.
    pub masked: String,
}

pub struct QueryParser;

impl QueryParser {
    /// Normalise and validate a raw query.
    ///
    /// Returns `Ok(None)` for `None` input or input that collapses to
    /// nothing — the deliberate "apply no search filter" signal, not an
    /// error. Fails with [`Error::QueryTooLong`] past `max_length`
    /// characters (`0` disables the check).
    pub fn parse(raw: Option<&str>, max_length: usize) -> Result<Option<ParsedQuery>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            return Ok(None);
        }
        if max_length > 0 && normalized.chars().count() > max_length {
            return Err(Error::QueryTooLong { max_length });
        }
        let masked = Self::mask_pii(&normalized);
        Ok(Some(ParsedQuery { normalized, masked }))
    }

    /// Replace email-shaped then phone-shaped substrings with fixed
    /// placeholders. Emails go first so digits inside a domain are not
    /// mistaken for a phone number. Idempotent on already-masked text.
    pub fn mask_pii(query: &str) -> String {
        let masked = email_regex().replace_all(query, EMAIL_PLACEHOLDER);
        phone_regex()
            .replace_all(&masked, PHONE_PLACEHOLDER)
            .into_owned()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("email regex must compile")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    // Optional leading +, then 8+ digits with spaces/dashes/parens in between.
    PHONE_RE.get_or_init(|| {
        Regex::new(r"\b\+?\d[\d\s\-()]{6,}\d\b").expect("phone regex must compile")
    })
}
