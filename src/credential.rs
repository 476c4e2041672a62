/// Secrets issued by the Docebo LMS for one integration.
///
/// `api_key`/`api_secret` sign REST calls, `sso_secret` derives SSO tokens.
/// Supplied once when the client is built and never changed afterwards.
/// The `Debug` implementation redacts both secrets to prevent accidental
/// leakage in logs.
#[derive(Clone)]
pub struct Credential {
    pub api_key: String,
    pub api_secret: String,
    pub sso_secret: String,
}

impl Credential {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        sso_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            sso_secret: sso_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &self.api_key)
            .field("api_secret", &"****")
            .field("sso_secret", &"****")
            .finish()
    }
}
