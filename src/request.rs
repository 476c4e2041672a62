//! Endpoint resolution and signed request assembly for the Docebo user API.

use url::Url;
use url::form_urlencoded;

use crate::credential::Credential;
use crate::error::{Result, SsoError};
use crate::sign::sign_parameters;

/// Header carrying the authorization value.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Creates a user.
pub const CREATE_USER_PATH: &str = "/api/user/create";
/// Checks whether a username exists.
pub const VERIFY_USER_PATH: &str = "/api/user/checkUsername";
/// Updates a user.
pub const EDIT_USER_PATH: &str = "/api/user/edit";
/// Deletes a user.
pub const DELETE_USER_PATH: &str = "/api/user/delete";

/// Parses and validates the configured LMS domain.
pub(crate) fn parse_domain(domain: &str) -> Result<Url> {
    let url = Url::parse(domain)?;
    if url.cannot_be_a_base() {
        return Err(SsoError::Config(format!(
            "domain '{}' cannot be used as a base URL",
            domain
        )));
    }
    Ok(url)
}

/// Joins an absolute API path onto the domain, replacing any path the domain carries.
pub(crate) fn build_endpoint(domain: &Url, path: &str) -> Result<Url> {
    Ok(domain.join(path)?)
}

/// A fully prepared API call: where to send it, how it is authorized, and its body.
#[derive(Debug, Clone)]
pub(crate) struct SignedRequest {
    pub url: Url,
    pub authorization: String,
    pub body: String,
}

/// Signs `params` and form-encodes them in the same order.
pub(crate) fn build_signed_request(
    url: Url,
    params: &[(&str, &str)],
    credential: &Credential,
) -> SignedRequest {
    let authorization = sign_parameters(params, &credential.api_key, &credential.api_secret);
    let body = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    SignedRequest {
        url,
        authorization,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential::new("myapikey", "myapisecret", "myssosecret")
    }

    #[test]
    fn endpoint_joins_domain() {
        let domain = parse_domain("http://test.docebosaas.com").unwrap();
        let url = build_endpoint(&domain, CREATE_USER_PATH).unwrap();
        assert_eq!(url.as_str(), "http://test.docebosaas.com/api/user/create");
    }

    #[test]
    fn endpoint_replaces_domain_path() {
        let domain = parse_domain("https://acme.docebosaas.com/lms/").unwrap();
        let url = build_endpoint(&domain, VERIFY_USER_PATH).unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.docebosaas.com/api/user/checkUsername"
        );
    }

    #[test]
    fn parse_domain_rejects_relative() {
        assert!(matches!(
            parse_domain("acme.docebosaas.com"),
            Err(SsoError::InvalidUrl(_))
        ));
    }

    #[test]
    fn parse_domain_rejects_non_base() {
        assert!(matches!(
            parse_domain("mailto:admin@acme.com"),
            Err(SsoError::Config(_))
        ));
    }

    #[test]
    fn signed_request_body_keeps_order() {
        let url = Url::parse("http://test.docebosaas.com/api/user/edit").unwrap();
        let req = build_signed_request(
            url,
            &[("userid", "batman"), ("email", "bat@bat.bat"), ("idst", "1234")],
            &credential(),
        );
        assert_eq!(req.body, "userid=batman&email=bat%40bat.bat&idst=1234");
        assert_eq!(
            req.authorization,
            sign_parameters(
                &[("userid", "batman"), ("email", "bat@bat.bat"), ("idst", "1234")],
                "myapikey",
                "myapisecret"
            )
        );
    }

    #[test]
    fn signed_request_never_carries_secrets() {
        let url = Url::parse("http://test.docebosaas.com/api/user/create").unwrap();
        let req = build_signed_request(url, &[("userid", "bats")], &credential());
        assert!(!req.body.contains("myapisecret"));
        assert!(!req.authorization.contains("myapisecret"));
        assert!(!req.url.as_str().contains("myapisecret"));
    }
}
