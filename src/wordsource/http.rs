//! Remote dictionary
//!
//! Word list and meanings from the Turkish Language Association dictionary
//! (sozluk.gov.tr).

use super::WordSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::time::Duration;
use tracing::{debug, warn};

/// Production endpoint
pub const TDK_BASE_URL: &str = "https://sozluk.gov.tr";

#[derive(Debug, Deserialize)]
struct AutocompleteEntry {
    madde: String,
}

#[derive(Debug, Deserialize)]
struct GtsEntry {
    #[serde(rename = "anlamlarListe", default)]
    meanings: Vec<GtsMeaning>,
}

#[derive(Debug, Deserialize)]
struct GtsMeaning {
    #[serde(default)]
    anlam: String,
}

// A miss is reported as an object ({"error": "..."}) instead of an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GtsResponse {
    Entries(Vec<GtsEntry>),
    Miss(IgnoredAny),
}

/// [`WordSource`] backed by the sozluk.gov.tr JSON endpoints
#[derive(Debug, Clone)]
pub struct TdkWordSource {
    client: Client,
    base_url: String,
}

impl TdkWordSource {
    /// Create a source talking to the production service
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::from_client(client, TDK_BASE_URL))
    }

    /// Create a source from a prepared client and base URL
    #[must_use]
    pub fn from_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn autocomplete(&self) -> Result<Vec<AutocompleteEntry>, reqwest::Error> {
        self.client
            .get(format!("{}/autocomplete.json", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn gts(&self, word: &str) -> Result<GtsResponse, reqwest::Error> {
        self.client
            .get(format!("{}/gts", self.base_url))
            .query(&[("ara", word)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl WordSource for TdkWordSource {
    async fn fetch_words(&self, length: usize) -> Vec<String> {
        match self.autocomplete().await {
            Ok(entries) => {
                let words: Vec<String> = entries
                    .into_iter()
                    .map(|entry| entry.madde.trim().to_lowercase())
                    .filter(|word| word.chars().count() == length)
                    .collect();
                debug!(length, count = words.len(), "fetched word list");
                words
            }
            Err(e) => {
                warn!(error = %e, "word list fetch failed");
                Vec::new()
            }
        }
    }

    async fn fetch_meaning(&self, word: &str) -> Option<String> {
        match self.gts(word).await {
            Ok(GtsResponse::Entries(entries)) => {
                let meaning = entries
                    .into_iter()
                    .next()?
                    .meanings
                    .into_iter()
                    .next()?
                    .anlam;
                let meaning = meaning.trim();
                (!meaning.is_empty()).then(|| meaning.to_string())
            }
            Ok(GtsResponse::Miss(_)) => {
                debug!(word, "no dictionary entry");
                None
            }
            Err(e) => {
                warn!(word, error = %e, "meaning fetch failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn autocomplete() -> Json<Value> {
        Json(json!([
            {"madde": "kalem"},
            {"madde": "Limon"},
            {"madde": "kitapçı"},
            {"madde": "su"},
            {"madde": "şeker"}
        ]))
    }

    async fn gts(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        match params.get("ara").map(String::as_str) {
            Some("kalem") => Json(json!([{
                "madde": "kalem",
                "anlamlarListe": [
                    {"anlam": "Yazı yazmaya yarayan araç"},
                    {"anlam": "Resmi daire"}
                ]
            }])),
            Some("boş") => Json(json!([{"madde": "boş", "anlamlarListe": [{"anlam": ""}]}])),
            Some("liste") => Json(json!([{"madde": "liste"}])),
            _ => Json(json!({"error": "Sonuç bulunamadı"})),
        }
    }

    async fn slow() -> Json<Value> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Json(json!([{"madde": "kalem"}]))
    }

    async fn spawn_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}")
    }

    fn source(base_url: &str, timeout: Duration) -> TdkWordSource {
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .unwrap();
        TdkWordSource::from_client(client, base_url)
    }

    async fn dictionary_server() -> String {
        spawn_server(
            Router::new()
                .route("/autocomplete.json", get(autocomplete))
                .route("/gts", get(gts)),
        )
        .await
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let source = TdkWordSource::from_client(Client::new(), "http://localhost:1/");
        assert_eq!(source.base_url(), "http://localhost:1");
    }

    #[tokio::test]
    async fn fetch_words_filters_and_lowercases() {
        let url = dictionary_server().await;
        let source = source(&url, Duration::from_secs(5));
        assert_eq!(
            source.fetch_words(5).await,
            vec!["kalem", "limon", "şeker"]
        );
        assert_eq!(source.fetch_words(7).await, vec!["kitapçı"]);
    }

    #[tokio::test]
    async fn fetch_meaning_takes_first() {
        let url = dictionary_server().await;
        let source = source(&url, Duration::from_secs(5));
        assert_eq!(
            source.fetch_meaning("kalem").await.as_deref(),
            Some("Yazı yazmaya yarayan araç")
        );
    }

    #[tokio::test]
    async fn fetch_meaning_misses_are_none() {
        let url = dictionary_server().await;
        let source = source(&url, Duration::from_secs(5));
        assert_eq!(source.fetch_meaning("yokyok").await, None);
        assert_eq!(source.fetch_meaning("boş").await, None);
        assert_eq!(source.fetch_meaning("liste").await, None);
    }

    #[tokio::test]
    async fn server_errors_become_empty() {
        // no routes at all: every request is a 404
        let url = spawn_server(Router::new()).await;
        let source = source(&url, Duration::from_secs(5));
        assert!(source.fetch_words(5).await.is_empty());
        assert_eq!(source.fetch_meaning("kalem").await, None);
    }

    #[tokio::test]
    async fn malformed_payload_becomes_empty() {
        let url = spawn_server(Router::new().route(
            "/autocomplete.json",
            get(|| async { Json(json!({"madde": "kalem"})) }),
        ))
        .await;
        let source = source(&url, Duration::from_secs(5));
        assert!(source.fetch_words(5).await.is_empty());
    }

    #[tokio::test]
    async fn timeout_becomes_empty() {
        let url = spawn_server(Router::new().route("/autocomplete.json", get(slow))).await;
        let source = source(&url, Duration::from_millis(100));
        assert!(source.fetch_words(5).await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_becomes_empty() {
        // bind then drop, so nothing listens on the port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = source(&format!("http://{addr}"), Duration::from_secs(2));
        assert!(source.fetch_words(5).await.is_empty());
    }
}
