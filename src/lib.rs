//! Docebo LMS single sign-on and user API client for Rust.
//!
//! This crate provides:
//!
//! - SSO redirect links: [`make_timestamp_token`], [`make_sso_token`] and
//!   [`build_authentication_url`], or [`Client::sso_redirect_url`] in one call
//! - Signed calls against the user API: [`Client::create_user`],
//!   [`Client::edit_user`], [`Client::delete_user`], [`Client::verify_user`]
//! - [`User`], the ordered field set the user API expects
//!
//! An async client is always available; a blocking one lives behind the
//! `blocking` feature.
//!
//! # Quick Start (async)
//!
//! ```no_run
//! use rs_docebo_sso::{Client, Credential, User};
//!
//! # async fn example() -> rs_docebo_sso::Result<()> {
//! let client = Client::new(
//!     "https://acme.docebosaas.com",
//!     Credential::new("api-key", "api-secret", "sso-secret"),
//! )?;
//!
//! let mut user = User::new("batman", "Bruce", "Wayne", "bruce@wayne.com", "cave", "student");
//! let resp = client.create_user(&user.params()).await?;
//! if let Some(idst) = resp.idst() {
//!     user.set_remote_unique_id(idst);
//! }
//!
//! println!("redirect to {}", client.sso_redirect_url(user.userid())?);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod request;
pub mod response;
pub mod sign;
pub mod sso;
pub mod token;
pub mod user;

#[cfg(feature = "blocking")]
pub mod blocking;

mod exec;

pub use client::Client;
pub use config::{ClientConfig, RetryPolicy};
pub use credential::Credential;
pub use error::{Result, SsoError};
pub use response::ApiResponse;
pub use sign::sign_parameters;
pub use sso::{build_authentication_url, username_from_email};
pub use token::{SsoToken, TimestampToken, make_sso_token, make_timestamp_token};
pub use user::User;

// Compile-time assertions: key types must be Send + Sync for use across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Client>;
    let _ = assert_send_sync::<SsoError>;
    let _ = assert_send_sync::<Credential>;
    let _ = assert_send_sync::<ClientConfig>;
};
