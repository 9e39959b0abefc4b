use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Bytes served by `/binary/search`: not valid UTF-8.
pub const BINARY_PAYLOAD: &[u8] = &[0xde, 0xad, 0xbe, 0xef, 0xff, 0xfe];

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub media: Option<String>,
    pub term: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub kind: String,
    pub track_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_count: usize,
    pub results: Vec<SearchResult>,
}

/// Terms received so far, in arrival order.
pub type Searches = Arc<RwLock<Vec<String>>>;

pub fn app() -> Router {
    let searches: Searches = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/search", get(search))
        .route("/binary/search", get(binary_search))
        .route("/searches", get(list_searches))
        .with_state(searches)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn search(
    State(searches): State<Searches>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    searches.write().await.push(params.term.clone());
    let kind = params.media.unwrap_or_else(|| "ebook".to_string());
    Json(SearchResponse {
        result_count: 1,
        results: vec![SearchResult {
            kind,
            track_name: params.term,
        }],
    })
}

async fn binary_search(
    State(searches): State<Searches>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    searches.write().await.push(params.term);
    ([(header::CONTENT_TYPE, "application/octet-stream")], BINARY_PAYLOAD)
}

async fn list_searches(State(searches): State<Searches>) -> Json<Vec<String>> {
    Json(searches.read().await.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_uses_itunes_field_names() {
        let response = SearchResponse {
            result_count: 1,
            results: vec![SearchResult {
                kind: "ebook".to_string(),
                track_name: "Out from Boneville".to_string(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["resultCount"], 1);
        assert_eq!(json["results"][0]["kind"], "ebook");
        assert_eq!(json["results"][0]["trackName"], "Out from Boneville");
    }

    #[test]
    fn search_params_media_is_optional() {
        let params: SearchParams = serde_json::from_str(r#"{"term":"bone"}"#).unwrap();
        assert_eq!(params.term, "bone");
        assert!(params.media.is_none());
    }

    #[test]
    fn search_params_rejects_missing_term() {
        let result: Result<SearchParams, _> = serde_json::from_str(r#"{"media":"ebook"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn binary_payload_is_not_utf8() {
        assert!(std::str::from_utf8(BINARY_PAYLOAD).is_err());
    }
}
