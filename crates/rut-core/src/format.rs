//! # Formatter
//!
//! Inserts thousands separators (`.`) and the check separator (`-`) into a
//! cleaned token, according to one of three placement policies.
//!
//! ## Policies
//! ```text
//!   typed so far   DatabaseMatchLeft   UserEntryVariable   SimpleFixedWidth
//!   ────────────   ─────────────────   ─────────────────   ────────────────
//!   "1"            1                   1                   1
//!   "1456"         14.56               145-6               1.456
//!   "1594350"      15.943.50           159.435-0           1.594.350
//!   "159435032"    15.943.503-2        15.943.503-2        15.943.503-2
//! ```
//!
//! - **DatabaseMatchLeft** anchors groups on the left (2-3-3-1) so a partial
//!   entry is already a prefix of the stored `DD.DDD.DDD-D` column value.
//! - **UserEntryVariable** treats the last character as the check digit and
//!   groups the body from the right.
//! - **SimpleFixedWidth** fills an 8-digit body first and only adds the check
//!   separator once a 9th character exists.
//!
//! Every policy cleans first and drops anything past the 9th character.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::checksum::MAX_BODY_LEN;
use crate::clean::{clean, truncate_raw};

// =============================================================================
// Format Policy
// =============================================================================

/// Where separators go while the identifier is being typed.
///
/// Serialized with the same names [`FormatPolicy::name`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FormatPolicy {
    /// Fixed 2-3-3-1 grouping from the left, for prefix search on a stored column.
    #[serde(rename = "database-match")]
    #[serde(alias = "database-match-left")]
    DatabaseMatchLeft,

    /// Last character is the check digit; body grouped from the right.
    #[default]
    #[serde(rename = "user-entry")]
    #[serde(alias = "user-entry-variable")]
    UserEntryVariable,

    /// 8-digit body grouped from the right; `-` only once the 9th char exists.
    #[serde(rename = "simple")]
    #[serde(alias = "simple-fixed-width")]
    SimpleFixedWidth,
}

impl FormatPolicy {
    /// All policies, in declaration order.
    pub const ALL: [FormatPolicy; 3] = [
        FormatPolicy::DatabaseMatchLeft,
        FormatPolicy::UserEntryVariable,
        FormatPolicy::SimpleFixedWidth,
    ];

    /// Config / CLI name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            FormatPolicy::DatabaseMatchLeft => "database-match",
            FormatPolicy::UserEntryVariable => "user-entry",
            FormatPolicy::SimpleFixedWidth => "simple",
        }
    }
}

impl fmt::Display for FormatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown format policy: '{0}'. Valid options: database-match, user-entry, simple")]
pub struct UnknownPolicy(pub String);

impl FromStr for FormatPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "database-match" | "database-match-left" | "database" | "filter" => {
                Ok(FormatPolicy::DatabaseMatchLeft)
            }
            "user-entry" | "user-entry-variable" | "user" => Ok(FormatPolicy::UserEntryVariable),
            "simple" | "simple-fixed-width" | "fixed" => Ok(FormatPolicy::SimpleFixedWidth),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Cleans `input` and punctuates it according to `policy`.
///
/// ## Example
/// ```rust
/// use rut_core::format::{format, FormatPolicy};
///
/// assert_eq!(format("145678901", FormatPolicy::DatabaseMatchLeft), "14.567.890-1");
/// assert_eq!(format("159435032", FormatPolicy::UserEntryVariable), "15.943.503-2");
/// assert_eq!(format("1594350", FormatPolicy::SimpleFixedWidth), "1.594.350");
/// ```
pub fn format(input: &str, policy: FormatPolicy) -> String {
    let cleaned = clean(input);
    let raw = truncate_raw(&cleaned);

    match policy {
        FormatPolicy::DatabaseMatchLeft => format_left_anchored(raw),
        FormatPolicy::UserEntryVariable => format_check_last(raw),
        FormatPolicy::SimpleFixedWidth => format_fixed_width(raw),
    }
}

/// Groups a body of up to 8 characters in thousands, from the right.
///
/// Non-ASCII input is returned untouched; cleaned tokens are always ASCII.
///
/// ```rust
/// use rut_core::format::group_body;
///
/// assert_eq!(group_body("123"), "123");
/// assert_eq!(group_body("12345"), "12.345");
/// assert_eq!(group_body("123456"), "123.456");
/// assert_eq!(group_body("12345678"), "12.345.678");
/// ```
pub fn group_body(body: &str) -> String {
    if !body.is_ascii() {
        return body.to_string();
    }

    let len = body.len();

    match len {
        0..=3 => body.to_string(),
        4..=6 => format!("{}.{}", &body[..len - 3], &body[len - 3..]),
        _ => format!(
            "{}.{}.{}",
            &body[..len - 6],
            &body[len - 6..len - 3],
            &body[len - 3..]
        ),
    }
}

/// Policy A: `DD.DDD.DDD-D` cut at the current length.
fn format_left_anchored(raw: &str) -> String {
    let len = raw.len();
    if len <= 1 {
        return raw.to_string();
    }

    let mut out = String::with_capacity(len + 3);
    out.push_str(&raw[..2]);

    if len > 2 {
        out.push('.');
        out.push_str(&raw[2..len.min(5)]);
    }
    if len > 5 {
        out.push('.');
        out.push_str(&raw[5..len.min(8)]);
    }
    if len > 8 {
        out.push('-');
        out.push_str(&raw[8..9]);
    }

    out
}

/// Policy B: last character is always the check digit once there are two.
fn format_check_last(raw: &str) -> String {
    if raw.len() <= 1 {
        return raw.to_string();
    }

    let (body, check) = raw.split_at(raw.len() - 1);
    format!("{}-{}", group_body(body), check)
}

/// Policy C: the first 8 characters are the body.
fn format_fixed_width(raw: &str) -> String {
    if raw.len() <= MAX_BODY_LEN {
        return group_body(raw);
    }

    let (body, check) = raw.split_at(MAX_BODY_LEN);
    format!("{}-{}", group_body(body), check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_match_left() {
        let p = FormatPolicy::DatabaseMatchLeft;
        assert_eq!(format("", p), "");
        assert_eq!(format("1", p), "1");
        assert_eq!(format("14", p), "14");
        assert_eq!(format("145", p), "14.5");
        assert_eq!(format("14567", p), "14.567");
        assert_eq!(format("145678", p), "14.567.8");
        assert_eq!(format("14567890", p), "14.567.890");
        assert_eq!(format("145678901", p), "14.567.890-1");
    }

    #[test]
    fn test_database_match_left_is_prefix_of_stored_value() {
        let stored = "14.567.890-1";
        for n in 1..=9 {
            let typed = &"145678901"[..n];
            let shown = format(typed, FormatPolicy::DatabaseMatchLeft);
            assert!(stored.starts_with(&shown), "{} is not a prefix", shown);
        }
    }

    #[test]
    fn test_user_entry_variable() {
        let p = FormatPolicy::UserEntryVariable;
        assert_eq!(format("1", p), "1");
        assert_eq!(format("19", p), "1-9");
        assert_eq!(format("1234", p), "123-4");
        assert_eq!(format("12345", p), "1.234-5");
        assert_eq!(format("123456", p), "12.345-6");
        assert_eq!(format("1234567", p), "123.456-7");
        assert_eq!(format("12345678", p), "1.234.567-8");
        assert_eq!(format("159435032", p), "15.943.503-2");
    }

    #[test]
    fn test_group_body_never_leads_with_separator() {
        assert_eq!(group_body(""), "");
        assert_eq!(group_body("123456"), "123.456");
        assert_eq!(group_body("1234567"), "1.234.567");
        for len in 0..=8 {
            let body = &"12345678"[..len];
            assert!(!group_body(body).starts_with('.'));
        }
    }

    #[test]
    fn test_simple_fixed_width() {
        let p = FormatPolicy::SimpleFixedWidth;
        assert_eq!(format("1", p), "1");
        assert_eq!(format("1234", p), "1.234");
        assert_eq!(format("1594350", p), "1.594.350");
        assert_eq!(format("15943503", p), "15.943.503");
        assert_eq!(format("159435032", p), "15.943.503-2");
    }

    #[test]
    fn test_all_policies_truncate_to_nine() {
        for policy in FormatPolicy::ALL {
            assert_eq!(
                format("15943503299999", policy),
                format("159435032", policy),
                "policy {}",
                policy
            );
        }
    }

    #[test]
    fn test_formatting_cleans_input_first() {
        assert_eq!(
            format("15.943.503-2", FormatPolicy::UserEntryVariable),
            "15.943.503-2"
        );
        assert_eq!(
            format("10 000 013 k", FormatPolicy::SimpleFixedWidth),
            "10.000.013-K"
        );
        assert_eq!(format("--..", FormatPolicy::DatabaseMatchLeft), "");
    }

    #[test]
    fn test_policy_names_round_trip() {
        for policy in FormatPolicy::ALL {
            assert_eq!(policy.name().parse::<FormatPolicy>().unwrap(), policy);
        }
        assert_eq!(
            "filter".parse::<FormatPolicy>().unwrap(),
            FormatPolicy::DatabaseMatchLeft
        );
        assert!("bogus".parse::<FormatPolicy>().is_err());
    }

    #[test]
    fn test_policy_serde_uses_config_names() {
        let json = serde_json::to_string(&FormatPolicy::SimpleFixedWidth).unwrap();
        assert_eq!(json, "\"simple\"");

        let parsed: FormatPolicy = serde_json::from_str("\"database-match-left\"").unwrap();
        assert_eq!(parsed, FormatPolicy::DatabaseMatchLeft);
    }

    #[test]
    fn test_policy_typescript_matches_serde_names() {
        let decl = FormatPolicy::inline();
        for policy in FormatPolicy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert!(decl.contains(&json), "{} missing from {}", json, decl);
        }
        assert!(!decl.contains("DatabaseMatchLeft"));
    }
}
