//! Synchronous (blocking) client for the Docebo LMS.
//!
//! This module is only available when the `blocking` feature is enabled.
//! It mirrors the async [`crate::client::Client`] API using `reqwest::blocking`.
//!
//! # Example
//!
//! ```no_run
//! use rs_docebo_sso::blocking::Client;
//! use rs_docebo_sso::{Credential, User};
//!
//! fn main() -> rs_docebo_sso::Result<()> {
//!     let client = Client::new(
//!         "https://acme.docebosaas.com",
//!         Credential::new("api-key", "api-secret", "sso-secret"),
//!     )?;
//!
//!     let mut user = User::new("batman", "Bruce", "Wayne", "bruce@wayne.com", "cave", "student");
//!     let resp = client.create_user(&user.params())?;
//!     if let Some(idst) = resp.idst() {
//!         user.set_remote_unique_id(idst);
//!     }
//!     println!("redirect to {}", client.sso_redirect_url(user.userid())?);
//!     Ok(())
//! }
//! ```

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::{Result, SsoError};
use crate::exec::{handle_response, next_retry_delay};
use crate::request::{
    AUTHORIZATION_HEADER, CREATE_USER_PATH, DELETE_USER_PATH, EDIT_USER_PATH, SignedRequest,
    VERIFY_USER_PATH, build_endpoint, build_signed_request, parse_domain,
};
use crate::response::ApiResponse;
use crate::sso::build_authentication_url;
use crate::token::{make_sso_token, make_timestamp_token};

/// Synchronous client for the Docebo LMS user API and SSO links.
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    domain: Url,
    credential: Credential,
}

impl Client {
    /// Creates a new blocking client for `domain` with default timeouts and no retries.
    ///
    /// A path on `domain` is kept by [`Self::sso_redirect_url`]
    /// (`https://acme.com/lms` gives `https://acme.com/lms/doceboLms/index.php`)
    /// but replaced by the API paths, which are absolute
    /// (`https://acme.com/api/user/create`).
    pub fn new(domain: impl Into<String>, credential: Credential) -> Result<Self> {
        Self::with_config(credential, ClientConfig::new(domain))
    }

    /// Creates a new blocking client with custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let domain = parse_domain(&config.domain)?;
        let http = reqwest::blocking::Client::builder()
            .redirect(Policy::none())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| SsoError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            config,
            domain,
            credential,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves an API path against the domain.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        build_endpoint(&self.domain, path)
    }

    /// Builds a fresh SSO redirect URL for `username`.
    pub fn sso_redirect_url(&self, username: &str) -> Result<Url> {
        let timestamp = make_timestamp_token();
        let token = make_sso_token(username, &timestamp, &self.credential.sso_secret);
        build_authentication_url(self.domain.as_str(), username, &timestamp, &token)
    }

    /// Creates a user.
    pub fn create_user(&self, params: &[(&str, &str)]) -> Result<ApiResponse> {
        self.dispatch(self.endpoint(CREATE_USER_PATH)?, params)
    }

    /// Updates a user.
    pub fn edit_user(&self, params: &[(&str, &str)]) -> Result<ApiResponse> {
        self.dispatch(self.endpoint(EDIT_USER_PATH)?, params)
    }

    /// Deletes a user.
    pub fn delete_user(&self, params: &[(&str, &str)]) -> Result<ApiResponse> {
        self.dispatch(self.endpoint(DELETE_USER_PATH)?, params)
    }

    /// Checks whether a username exists.
    pub fn verify_user(&self, params: &[(&str, &str)]) -> Result<ApiResponse> {
        self.dispatch(self.endpoint(VERIFY_USER_PATH)?, params)
    }

    /// Signs `params`, POSTs them to `url` and interprets the response.
    ///
    /// Redirects are not followed: a 3xx answer fails with [`SsoError::Http`].
    pub fn dispatch(&self, url: Url, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let request = build_signed_request(url, params, &self.credential);
        debug!(path = request.url.path(), params = params.len(), "dispatching API call");

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.send(&request) {
                Ok(response) => return Ok(response),
                Err(e) => match next_retry_delay(&self.config.retry, attempt, &e) {
                    Some(delay) => {
                        warn!(
                            path = request.url.path(),
                            attempt,
                            error = %e,
                            "API call failed, retrying in {:?}",
                            delay
                        );
                        std::thread::sleep(delay);
                    }
                    None => return Err(e),
                },
            }
        }
    }

    fn send(&self, request: &SignedRequest) -> Result<ApiResponse> {
        let response = self
            .http
            .post(request.url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(AUTHORIZATION_HEADER, &request.authorization)
            .body(request.body.clone())
            .send()?;

        let status = response.status();
        let text = response.text()?;
        debug!(path = request.url.path(), status = status.as_u16(), "API call completed");

        handle_response(status, text)
    }
}
