//! HTTP country source backed by a REST countries provider.

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::domain::error::Result;
use crate::domain::CountrySummary;
use crate::loader::models::decode_countries;
use crate::loader::source::CountrySource;

/// Default provider endpoint.
///
/// The provider rejects `/all` without a field filter, so the three fields the
/// page narrows to are requested up front.
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca2,population";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the country list over HTTP on every call.
///
/// No caching is done here: every page render sees whatever the provider
/// returns at that moment.
#[derive(Debug, Clone)]
pub struct RestCountries {
    client: reqwest::Client,
    url: String,
}

impl RestCountries {
    /// Builds a source for `url` with a whole-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PoplookupError::Fetch`](crate::PoplookupError::Fetch) if the
    /// HTTP client cannot be constructed (e.g. no TLS backend).
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_countries(&self) -> Result<Vec<CountrySummary>> {
        let started = std::time::Instant::now();

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            url = %self.url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "countries provider responded"
        );

        decode_countries(&body)
    }
}

impl CountrySource for RestCountries {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<CountrySummary>>> {
        self.fetch_countries().boxed()
    }

    fn describe(&self) -> String {
        format!("rest({})", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PoplookupError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response on a random local port.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/v3.1/all")
    }

    #[tokio::test]
    async fn fetches_and_narrows() {
        let url = serve_once(
            "200 OK",
            r#"[{"name":{"common":"Fiji"},"cca2":"FJ","population":900000,"region":"Oceania"}]"#,
        )
        .await;
        let source = RestCountries::new(url, DEFAULT_TIMEOUT).unwrap();

        let countries = source.fetch().await.unwrap();
        assert_eq!(countries, vec![CountrySummary::new("Fiji", "FJ", 900_000)]);
    }

    #[tokio::test]
    async fn error_status_is_fetch_error() {
        let url = serve_once("503 Service Unavailable", r#"{"message":"down"}"#).await;
        let source = RestCountries::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, PoplookupError::Fetch(_)));
    }

    #[tokio::test]
    async fn object_body_is_decode_error() {
        let url = serve_once("200 OK", r#"{"status":400,"message":"bad"}"#).await;
        let source = RestCountries::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, PoplookupError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = RestCountries::new(format!("http://{addr}/"), Duration::from_secs(2)).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, PoplookupError::Fetch(_)));
    }
}
