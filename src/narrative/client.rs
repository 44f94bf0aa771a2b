use crate::narrative::NarrativeError;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use std::time::Duration;

pub fn new_client(api_key: &str, timeout: Duration) -> Result<Client, NarrativeError> {
    let mut headers = header::HeaderMap::new();
    let mut authorization_value = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    authorization_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization_value);

    let client = Client::builder().default_headers(headers).timeout(timeout).build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_client_sets_the_authorization_header() -> Result<(), NarrativeError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("authorization", "Bearer key")
            .create_async()
            .await;

        let client = new_client("key", Duration::from_secs(5))?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        mock.assert();

        Ok(())
    }

    #[test]
    fn new_client_rejects_an_invalid_api_key() {
        let result = new_client("key\nwith newline", Duration::from_secs(5));

        assert!(matches!(result, Err(NarrativeError::InvalidHeaderValue(_))));
    }
}
