use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha1::{Digest, Sha1};

/// Builds the string hashed by [`sign_parameters`].
///
/// Only the parameter values take part, joined with `,` in the order given,
/// followed by `,` and the API secret. Keys are not signed, so the signature
/// is only meaningful next to the exact payload it was computed for.
pub(crate) fn value_only_payload<K, V>(params: &[(K, V)], api_secret: &str) -> String
where
    V: AsRef<str>,
{
    let mut payload = params
        .iter()
        .map(|(_, v)| v.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    payload.push(',');
    payload.push_str(api_secret);
    payload
}

/// Computes the Docebo API authorization value for a request.
///
/// Steps:
/// 1. Join parameter values with `,` and append `,{api_secret}`.
/// 2. SHA-1 the result and hex-encode it (lowercase).
/// 3. Base64 encode `{api_key}:{hex_digest}`.
///
/// The remote verifier rebuilds the same value sequence from the request
/// body, so `params` must be sent in the same order it was signed in.
pub fn sign_parameters<K, V>(params: &[(K, V)], api_key: &str, api_secret: &str) -> String
where
    V: AsRef<str>,
{
    let digest = Sha1::digest(value_only_payload(params, api_secret).as_bytes());
    BASE64.encode(format!("{}:{}", api_key, hex::encode(digest)))
}
