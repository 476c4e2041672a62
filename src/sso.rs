//! Browser-facing SSO redirect URLs.

use url::Url;

use crate::error::Result;
use crate::token::{SsoToken, TimestampToken};

/// Path of the LMS login confirmation page, relative to the domain.
pub const SSO_CONFIRM_PATH: &str = "/doceboLms/index.php";

/// Builds the SSO confirmation URL the user's browser is redirected to.
///
/// `login_user` is always lowercased. Query parameters are form-encoded;
/// their order is not part of the contract.
///
/// # Errors
///
/// Returns [`crate::SsoError::InvalidUrl`] if `domain` is not an absolute URL.
pub fn build_authentication_url(
    domain: &str,
    username: &str,
    timestamp: &TimestampToken,
    token: &SsoToken,
) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}{}",
        domain.trim_end_matches('/'),
        SSO_CONFIRM_PATH
    ))?;
    url.query_pairs_mut()
        .append_pair("modname", "login")
        .append_pair("login_user", &username.to_lowercase())
        .append_pair("time", timestamp.as_str())
        .append_pair("token", token.as_str())
        .append_pair("op", "confirm");
    Ok(url)
}

/// Returns the local part of an email address, the conventional LMS username.
pub fn username_from_email(email: &str) -> Option<&str> {
    let local = email.split('@').next()?;
    (!local.is_empty()).then_some(local)
}
