use reqwest::{Client, header};
use serde_json::Value;

use crate::{
    config,
    error::{Error, Result},
    types::Token,
    utils,
};

/// Requests an access token using the OAuth 2.0 client-credentials grant.
///
/// Encodes `client_id:client_secret` as an HTTP Basic authorization header
/// and issues a form-encoded POST with `grant_type=client_credentials` to the
/// configured token endpoint. The returned token authorizes catalog requests
/// until it expires; this application never refreshes it and simply requests
/// a new one on the next invocation.
///
/// # Arguments
///
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Token with access token, token type and expiry
/// - `Err(Error)` - Validation, network, HTTP, or response-shape failure
///
/// # Errors
///
/// - [`Error::CredentialsMissing`] - either credential is empty; no request
///   is made
/// - [`Error::Network`] - transport failure reaching the token endpoint
/// - [`Error::Http`] - the endpoint answered with a non-2xx status
/// - [`Error::MalformedResponse`] - a 2xx response without an `access_token`
///
/// # Example
///
/// ```
/// let token = request_token(&config::spotify_client_id(), &config::spotify_client_secret()).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(client_id: &str, client_secret: &str) -> Result<Token> {
    if client_id.is_empty() || client_secret.is_empty() {
        return Err(Error::CredentialsMissing);
    }

    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(client_id, client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(status));
    }

    let json: Value = response.json().await?;
    parse_token_response(&json)
}

/// Extracts a [`Token`] from a token-endpoint response body.
///
/// The response must carry a non-empty `access_token`; `token_type` and
/// `expires_in` are optional and default to `"Bearer"` and 3600 seconds.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if `access_token` is absent or empty.
pub fn parse_token_response(json: &Value) -> Result<Token> {
    let access_token = json["access_token"].as_str().unwrap_or_default();
    if access_token.is_empty() {
        return Err(Error::MalformedResponse(
            "access token not found in response".to_string(),
        ));
    }

    Ok(Token {
        access_token: access_token.to_string(),
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
    })
}
