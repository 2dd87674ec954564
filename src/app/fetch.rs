//! Favorites fetch logic
//!
//! One GET against the collection endpoint per screen lifetime. The outcome
//! settles the shared `LoadState` exactly once; fetch errors are logged here
//! and swallowed into `LoadState::Failed` rather than surfaced to the user.

use super::App;
use crate::constants::{DOA_API_URL, FAVORITES_LIMIT};
use crate::types::{DoaRecord, FetchError, LoadState};
use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Fetch the doa collection and keep the first `FAVORITES_LIMIT` records in
/// response order. The body is validated as a JSON array of `DoaRecord`;
/// anything else is a `FetchError`.
pub(crate) async fn fetch_favorites(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<DoaRecord>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    let records: Vec<DoaRecord> = serde_json::from_str(&body)?;
    Ok(records.into_iter().take(FAVORITES_LIMIT).collect())
}

/// Race the fetch against the mount-scoped cancellation token. `None` means
/// the token fired first and the result must be discarded.
pub(crate) async fn load_favorites(
    client: &reqwest::Client,
    url: &str,
    token: &CancellationToken,
) -> Option<Result<Vec<DoaRecord>, FetchError>> {
    tokio::select! {
        _ = token.cancelled() => None,
        result = fetch_favorites(client, url) => Some(result),
    }
}

/// Apply a settled outcome to the shared state. Only a `Loading` state may
/// transition; returns whether the state changed.
pub(crate) fn settle(
    state: &Mutex<LoadState>,
    outcome: Result<Vec<DoaRecord>, FetchError>,
) -> bool {
    let mut state = state.lock().unwrap();
    if !state.is_loading() {
        return false;
    }
    *state = match outcome {
        Ok(records) => {
            info!(count = records.len(), "Favorites loaded");
            LoadState::Ready(records)
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch favorites");
            LoadState::Failed
        }
    };
    true
}

impl App {
    /// Kick off the favorites fetch. Idempotent: later frames are no-ops, so
    /// re-renders never spawn a second request.
    pub(crate) fn start_favorites_fetch(&mut self, ctx: &egui::Context) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;

        let state = Arc::clone(&self.load_state);
        let token = self.cancel_token.clone();
        let ctx = ctx.clone();

        debug!(url = DOA_API_URL, "Starting favorites fetch");
        self.runtime.spawn(async move {
            let client = reqwest::Client::new();
            match load_favorites(&client, DOA_API_URL, &token).await {
                Some(outcome) => {
                    if settle(&state, outcome) {
                        ctx.request_repaint();
                    }
                }
                None => debug!("Favorites fetch cancelled before settling"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serve exactly one canned HTTP response on an ephemeral local port.
    async fn serve_once(status_line: &str, body: String) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        format!("http://{addr}/api")
    }

    fn records_json(count: usize) -> String {
        let items: Vec<String> = (1..=count)
            .map(|i| format!(r#"{{"id":"{i}","doa":"Doa {i}","ayat":"Ayat {i}"}}"#))
            .collect();
        format!("[{}]", items.join(","))
    }

    #[tokio::test]
    async fn long_response_truncates_to_first_ten() {
        let url = serve_once("200 OK", records_json(15)).await;
        let client = reqwest::Client::new();

        let records = fetch_favorites(&client, &url).await.unwrap();
        assert_eq!(records.len(), FAVORITES_LIMIT);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[tokio::test]
    async fn short_response_is_kept_whole() {
        let url = serve_once("200 OK", records_json(3)).await;
        let client = reqwest::Client::new();

        let records = fetch_favorites(&client, &url).await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].doa, "Doa 1");
        assert_eq!(records[2].doa, "Doa 3");
    }

    #[tokio::test]
    async fn empty_response_settles_ready_with_zero_rows() {
        let url = serve_once("200 OK", "[]".to_string()).await;
        let client = reqwest::Client::new();

        let state = Mutex::new(LoadState::Loading);
        let outcome = fetch_favorites(&client, &url).await;
        assert!(settle(&state, outcome));

        let state = state.lock().unwrap();
        assert_eq!(*state, LoadState::Ready(Vec::new()));
        assert!(state.records().is_empty());
    }

    #[tokio::test]
    async fn non_2xx_status_is_an_error() {
        let url = serve_once("500 Internal Server Error", "oops".to_string()).await;
        let client = reqwest::Client::new();

        let err = fetch_favorites(&client, &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn non_array_payload_is_an_error() {
        let url = serve_once("200 OK", r#"{"message":"ok"}"#.to_string()).await;
        let client = reqwest::Client::new();

        let err = fetch_favorites(&client, &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Payload(_)));
    }

    #[tokio::test]
    async fn record_missing_required_field_is_an_error() {
        let url = serve_once("200 OK", r#"[{"id":"1","doa":"a"}]"#.to_string()).await;
        let client = reqwest::Client::new();

        let err = fetch_favorites(&client, &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Payload(_)));
    }

    #[tokio::test]
    async fn transport_error_settles_failed_with_zero_rows() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        let client = reqwest::Client::new();
        let outcome = fetch_favorites(&client, &url).await;
        assert!(outcome.is_err());

        let state = Mutex::new(LoadState::Loading);
        assert!(settle(&state, outcome));
        let state = state.lock().unwrap();
        assert_eq!(*state, LoadState::Failed);
        assert!(state.records().is_empty());
    }

    #[tokio::test]
    async fn state_settles_at_most_once() {
        let state = Mutex::new(LoadState::Loading);
        let first = vec![serde_json::from_str::<DoaRecord>(
            r#"{"id":"1","doa":"a","ayat":"b"}"#,
        )
        .unwrap()];

        assert!(settle(&state, Ok(first.clone())));
        // A second settlement must not overwrite the first.
        assert!(!settle(&state, Err(FetchError::Status(500))));
        assert_eq!(*state.lock().unwrap(), LoadState::Ready(first));
    }

    #[tokio::test]
    async fn cancelled_token_discards_the_result() {
        // A listener that never accepts keeps the request pending forever,
        // so the cancelled branch must win the race.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());

        let token = CancellationToken::new();
        token.cancel();

        let client = reqwest::Client::new();
        let result = load_favorites(&client, &url, &token).await;
        assert!(result.is_none());
    }
}
