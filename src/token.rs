//! Time-bound SSO token generation.
//!
//! The LMS recomputes the token on its side from the same inputs, so the
//! digest input layout is fixed: `username,timestamp,sso_secret`.

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// `strftime` layout of a [`TimestampToken`].
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A 14-digit `YYYYMMDDHHMMSS` local time marking when an SSO link was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimestampToken(String);

impl TimestampToken {
    /// Formats the given local date-time.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Self(datetime.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Accepts an externally produced timestamp if it is exactly 14 ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        (s.len() == 14 && s.bytes().all(|b| b.is_ascii_digit())).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimestampToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 32-character lowercase hex MD5 digest binding a username to a timestamp.
#[derive(Clone, PartialEq, Eq)]
pub struct SsoToken(String);

impl SsoToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SsoToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SsoToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SsoToken(****)")
    }
}

/// Returns the current local wall-clock time as a [`TimestampToken`].
pub fn make_timestamp_token() -> TimestampToken {
    TimestampToken::from_datetime(&Local::now().naive_local())
}

/// Computes the SSO token for `username` at `timestamp`.
///
/// The username is hashed as given; lowercasing happens only in the
/// redirect URL. Empty usernames still yield a valid digest.
pub fn make_sso_token(username: &str, timestamp: &TimestampToken, sso_secret: &str) -> SsoToken {
    let mut context = md5::Context::new();
    context.consume(username.as_bytes());
    context.consume(b",");
    context.consume(timestamp.as_str().as_bytes());
    context.consume(b",");
    context.consume(sso_secret.as_bytes());
    SsoToken(format!("{:x}", context.compute()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn fixed_timestamp() -> TimestampToken {
        TimestampToken::parse("20240102030405").unwrap()
    }

    #[test]
    fn timestamp_has_fourteen_digits() {
        let ts = make_timestamp_token();
        assert_eq!(ts.as_str().len(), 14);
        assert!(ts.as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn timestamp_tracks_local_clock() {
        let before: u64 = Local::now()
            .naive_local()
            .format(TIMESTAMP_FORMAT)
            .to_string()
            .parse()
            .unwrap();
        let ts: u64 = make_timestamp_token().as_str().parse().unwrap();
        assert!(ts >= before, "{before} vs {ts}");
    }

    #[test]
    fn timestamp_from_datetime_layout() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(TimestampToken::from_datetime(&dt), fixed_timestamp());
    }

    #[test]
    fn timestamp_parse_rejects_malformed() {
        assert!(TimestampToken::parse("2024010203040").is_none());
        assert!(TimestampToken::parse("202401020304056").is_none());
        assert!(TimestampToken::parse("2024-01-02T0304").is_none());
        assert!(TimestampToken::parse("").is_none());
    }

    #[test]
    fn sso_token_known_vector() {
        let token = make_sso_token("batman", &fixed_timestamp(), "myssosecret");
        assert_eq!(token.as_str(), "fedcd4d32886d453ad89cfafd533beac");
    }

    #[test]
    fn sso_token_is_deterministic() {
        let ts = make_timestamp_token();
        let a = make_sso_token("batman", &ts, "myssosecret");
        let b = make_sso_token("batman", &ts, "myssosecret");
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 32);
        assert!(
            a.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn sso_token_changes_with_each_input() {
        let ts = fixed_timestamp();
        let other_ts = TimestampToken::parse("20240102030406").unwrap();
        let base = make_sso_token("batman", &ts, "myssosecret");
        assert_ne!(base, make_sso_token("robin", &ts, "myssosecret"));
        assert_ne!(base, make_sso_token("batman", &other_ts, "myssosecret"));
        assert_ne!(base, make_sso_token("batman", &ts, "otherssosecret"));
    }

    #[test]
    fn sso_token_keeps_username_case() {
        let ts = fixed_timestamp();
        assert_ne!(
            make_sso_token("Batman", &ts, "myssosecret"),
            make_sso_token("batman", &ts, "myssosecret")
        );
    }

    #[test]
    fn sso_token_empty_username() {
        let token = make_sso_token("", &fixed_timestamp(), "myssosecret");
        assert_eq!(token.as_str(), "c56c4968bacd67e76ab3a3af42aa3172");
    }

    #[test]
    fn sso_token_debug_redacts() {
        let token = make_sso_token("batman", &fixed_timestamp(), "myssosecret");
        assert!(!format!("{token:?}").contains(token.as_str()));
    }
}
