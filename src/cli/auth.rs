use crate::{config, error, spotify, success};

/// Verifies the configured Spotify credentials.
///
/// Requests an access token with the client-credentials grant using the
/// client ID and secret from the environment. Prints a success message with
/// the token lifetime, or terminates with an error message when the
/// credentials are missing or rejected.
///
/// The obtained token is discarded; commands request their own fresh token.
///
/// # Example Usage
///
/// ```bash
/// spafcli auth
/// ```
pub async fn auth() {
    match spotify::auth::request_token(
        &config::spotify_client_id(),
        &config::spotify_client_secret(),
    )
    .await
    {
        Ok(token) => {
            success!(
                "Credentials accepted. Token expires in {} seconds.",
                token.expires_in
            );
        }
        Err(e) => {
            error!("Failed to get token. Check credentials. Err: {}", e);
        }
    }
}
