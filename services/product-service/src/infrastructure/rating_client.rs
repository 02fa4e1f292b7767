//! 评分服务 HTTP 客户端

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use storefront_config::RatingClientConfig;
use storefront_errors::{AppError, AppResult};

use crate::domain::{RatingClient, RatingLookup, RatingSummary};

/// `GET {base_url}/{product_id}` 的响应体
#[derive(Debug, Deserialize)]
struct RatingResponse {
    avg_rating: Option<f64>,
    #[serde(default)]
    count: u64,
}

pub struct HttpRatingClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpRatingClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &RatingClientConfig) -> AppResult<Self> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RatingClient for HttpRatingClient {
    async fn lookup(&self, product_id: i64) -> RatingLookup {
        let url = format!("{}/{}", self.base_url, product_id);

        let response = match self.client.get(&url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return RatingLookup::TimedOut,
            Err(e) => return RatingLookup::Failed(e.to_string()),
        };

        if response.status() != StatusCode::OK {
            return RatingLookup::Unavailable(response.status().as_u16());
        }

        match response.json::<RatingResponse>().await {
            Ok(body) => RatingLookup::Found(RatingSummary {
                avg_rating: body.avg_rating,
                count: body.count,
            }),
            Err(e) if e.is_timeout() => RatingLookup::TimedOut,
            Err(e) => RatingLookup::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode as AxumStatus, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::net::SocketAddr;

    async fn fake_rating(Path(id): Path<i64>) -> Result<Json<Value>, AxumStatus> {
        match id {
            1 => Ok(Json(json!({ "product_id": 1, "avg_rating": 4.2, "count": 2 }))),
            2 => Err(AxumStatus::INTERNAL_SERVER_ERROR),
            3 => {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok(Json(json!({ "product_id": 3, "avg_rating": 1.0, "count": 1 })))
            }
            4 => Ok(Json(json!({ "unexpected": true, "avg_rating": "high" }))),
            _ => Ok(Json(json!({ "product_id": id, "avg_rating": null, "count": 0 }))),
        }
    }

    async fn spawn_fake_server() -> SocketAddr {
        let app = Router::new().route("/api/ratings/{id}", get(fake_rating));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn client() -> HttpRatingClient {
        let addr = spawn_fake_server().await;
        HttpRatingClient::new(
            format!("http://{}/api/ratings/", addr),
            Duration::from_millis(100),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_found() {
        let lookup = client().await.lookup(1).await;
        assert_eq!(
            lookup,
            RatingLookup::Found(RatingSummary {
                avg_rating: Some(4.2),
                count: 2
            })
        );
    }

    #[tokio::test]
    async fn test_found_without_ratings() {
        let lookup = client().await.lookup(5).await;
        assert_eq!(lookup, RatingLookup::Found(RatingSummary::default()));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        assert_eq!(client().await.lookup(2).await, RatingLookup::Unavailable(500));
    }

    #[tokio::test]
    async fn test_timeout() {
        assert_eq!(client().await.lookup(3).await, RatingLookup::TimedOut);
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        assert!(matches!(client().await.lookup(4).await, RatingLookup::Failed(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpRatingClient::new(
            format!("http://{}/api/ratings", addr),
            Duration::from_millis(500),
        )
        .unwrap();
        assert!(matches!(client.lookup(1).await, RatingLookup::Failed(_)));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let client =
            HttpRatingClient::new("http://localhost:4000/api/ratings/", Duration::from_secs(2))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000/api/ratings");
    }
}
