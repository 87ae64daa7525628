//! Wayback Machine two-stage lookup.
//!
//! The availability JSON endpoint is fast but serves a cached `closest`
//! capture; the CDX index is precise but can be empty or rate-limited.
//! The quick check consults only the former; the full lookup tries the
//! index first and falls back to availability, all under one hard
//! deadline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use sg_core::archive::ProbeError;
use sg_core::ports::WaybackProbePort;
use tracing::debug;

use super::transport_error;

/// Production endpoints.
pub const WAYBACK_AVAILABLE: &str = "https://archive.org/wayback/available";
pub const WAYBACK_CDX: &str = "https://web.archive.org/cdx/search/cdx";
pub const WAYBACK_WEB: &str = "https://web.archive.org/web/";

pub struct WaybackClient {
    http: Client,
    availability_url: String,
    cdx_url: String,
    web_base_url: String,
}

#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(default)]
    archived_snapshots: ArchivedSnapshots,
}

#[derive(Debug, Default, Deserialize)]
struct ArchivedSnapshots {
    closest: Option<ClosestSnapshot>,
}

#[derive(Debug, Deserialize)]
struct ClosestSnapshot {
    #[serde(default)]
    available: bool,
    #[serde(default)]
    url: String,
}

impl WaybackClient {
    pub fn new(
        availability_url: impl Into<String>,
        cdx_url: impl Into<String>,
        web_base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            http: Client::builder().build()?,
            availability_url: availability_url.into(),
            cdx_url: cdx_url.into(),
            web_base_url: web_base_url.into(),
        })
    }

    pub fn default_endpoints() -> anyhow::Result<Self> {
        Self::new(WAYBACK_AVAILABLE, WAYBACK_CDX, WAYBACK_WEB)
    }

    async fn fetch_availability(&self, target_url: &str) -> Result<reqwest::Response, ProbeError> {
        self.http
            .get(&self.availability_url)
            .query(&[("url", target_url)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(&e))
    }

    async fn parse_closest(
        response: reqwest::Response,
    ) -> Result<Option<ClosestSnapshot>, ProbeError> {
        let data: AvailabilityResponse =
            response.json().await.map_err(|e| transport_error(&e))?;
        Ok(data.archived_snapshots.closest)
    }

    /// Latest capture timestamp from the CDX index, or `None` when the
    /// index has nothing (including non-2xx answers, which the caller
    /// treats as "try the lenient endpoint instead").
    async fn latest_capture_timestamp(
        &self,
        target_url: &str,
    ) -> Result<Option<String>, ProbeError> {
        let response = self
            .http
            .get(&self.cdx_url)
            .query(&[("url", target_url), ("limit", "1"), ("sort", "reverse")])
            .header(header::ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "cdx index unavailable, will fall back");
            return Ok(None);
        }

        let text = response.text().await.map_err(|e| transport_error(&e))?;
        let line = text.trim().lines().next().unwrap_or("");
        let timestamp = line
            .split_whitespace()
            .nth(1)
            .filter(|ts| ts.len() == 14 && ts.bytes().all(|b| b.is_ascii_digit()))
            .map(str::to_string);
        Ok(timestamp)
    }

    async fn run_full_lookup(&self, target_url: &str) -> Result<Option<String>, ProbeError> {
        if let Some(timestamp) = self.latest_capture_timestamp(target_url).await? {
            return Ok(Some(format!(
                "{}{}/{}",
                self.web_base_url, timestamp, target_url
            )));
        }

        let response = self.fetch_availability(target_url).await?;
        if !response.status().is_success() {
            return Err(ProbeError::Network(format!(
                "availability endpoint answered {}",
                response.status()
            )));
        }
        let closest = Self::parse_closest(response).await?;
        Ok(closest.filter(|c| c.available).map(|c| c.url))
    }
}

#[async_trait]
impl WaybackProbePort for WaybackClient {
    async fn quick_check(
        &self,
        target_url: &str,
        timeout: Duration,
    ) -> Result<bool, ProbeError> {
        let check = async {
            let response = self.fetch_availability(target_url).await?;
            // A non-2xx answer is a conclusive "no" for the quick check.
            if !response.status().is_success() {
                return Ok(false);
            }
            let closest = Self::parse_closest(response).await?;
            Ok(closest
                .map(|c| c.available && !c.url.is_empty())
                .unwrap_or(false))
        };
        match tokio::time::timeout(timeout, check).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout),
        }
    }

    async fn full_lookup(
        &self,
        target_url: &str,
        deadline: Duration,
    ) -> Result<Option<String>, ProbeError> {
        match tokio::time::timeout(deadline, self.run_full_lookup(target_url)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const TARGET: &str = "https://news.example/story";

    fn client_for(server: &Server) -> WaybackClient {
        WaybackClient::new(
            format!("{}/available", server.url()),
            format!("{}/cdx", server.url()),
            format!("{}/web/", server.url()),
        )
        .unwrap()
    }

    fn url_param() -> Matcher {
        Matcher::UrlEncoded("url".into(), TARGET.into())
    }

    #[tokio::test]
    async fn quick_check_true_when_closest_is_available() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"archived_snapshots":{"closest":{"available":true,"url":"https://web.archive.org/web/2023/https://news.example/story"}}}"#,
            )
            .create_async()
            .await;

        let has = client_for(&server)
            .quick_check(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert!(has);
    }

    #[tokio::test]
    async fn quick_check_false_when_no_closest() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(200)
            .with_body(r#"{"archived_snapshots":{}}"#)
            .create_async()
            .await;

        let has = client_for(&server)
            .quick_check(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert!(!has);
    }

    #[tokio::test]
    async fn quick_check_treats_non_2xx_as_conclusive_false() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(503)
            .create_async()
            .await;

        let has = client_for(&server)
            .quick_check(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert!(!has);
    }

    #[tokio::test]
    async fn quick_check_propagates_transport_failure() {
        let addr = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let client = WaybackClient::new(
            format!("http://{addr}/available"),
            format!("http://{addr}/cdx"),
            format!("http://{addr}/web/"),
        )
        .unwrap();

        let err = client
            .quick_check(TARGET, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Network(_)));
    }

    #[tokio::test]
    async fn full_lookup_synthesizes_url_from_cdx_timestamp() {
        let mut server = Server::new_async().await;
        let _cdx = server
            .mock("GET", "/cdx")
            .match_query(Matcher::AllOf(vec![
                url_param(),
                Matcher::UrlEncoded("limit".into(), "1".into()),
                Matcher::UrlEncoded("sort".into(), "reverse".into()),
            ]))
            .with_status(200)
            .with_body(
                "com,example.news)/story 20230101000000 https://news.example/story text/html 200 AAAA 1234\n",
            )
            .create_async()
            .await;

        let found = client_for(&server)
            .full_lookup(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(
            found,
            Some(format!("{}/web/20230101000000/{TARGET}", server.url()))
        );
    }

    #[tokio::test]
    async fn full_lookup_falls_back_to_availability_when_index_is_empty() {
        let mut server = Server::new_async().await;
        let _cdx = server
            .mock("GET", "/cdx")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("")
            .create_async()
            .await;
        let snapshot_url = "https://web.archive.org/web/20220505000000/https://news.example/story";
        let _avail = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(200)
            .with_body(format!(
                r#"{{"archived_snapshots":{{"closest":{{"available":true,"url":"{snapshot_url}"}}}}}}"#
            ))
            .create_async()
            .await;

        let found = client_for(&server)
            .full_lookup(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(found, Some(snapshot_url.to_string()));
    }

    #[tokio::test]
    async fn full_lookup_reports_conclusive_absence() {
        let mut server = Server::new_async().await;
        let _cdx = server
            .mock("GET", "/cdx")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("")
            .create_async()
            .await;
        let _avail = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(200)
            .with_body(r#"{"archived_snapshots":{}}"#)
            .create_async()
            .await;

        let found = client_for(&server)
            .full_lookup(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn full_lookup_errors_on_non_2xx_availability() {
        let mut server = Server::new_async().await;
        let _cdx = server
            .mock("GET", "/cdx")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;
        let _avail = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server)
            .full_lookup(TARGET, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Network(_)));
    }

    #[tokio::test]
    async fn full_lookup_times_out_under_its_deadline() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                if let Ok((socket, _)) = listener.accept().await {
                    held.push(socket);
                }
            }
        });
        let client = WaybackClient::new(
            format!("http://{addr}/available"),
            format!("http://{addr}/cdx"),
            format!("http://{addr}/web/"),
        )
        .unwrap();

        let err = client
            .full_lookup(TARGET, Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Timeout));
    }

    #[tokio::test]
    async fn cdx_ignores_malformed_timestamp_fields() {
        let mut server = Server::new_async().await;
        let _cdx = server
            .mock("GET", "/cdx")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("com,example.news)/story not-a-timestamp https://news.example/story\n")
            .create_async()
            .await;
        let _avail = server
            .mock("GET", "/available")
            .match_query(url_param())
            .with_status(200)
            .with_body(r#"{"archived_snapshots":{}}"#)
            .create_async()
            .await;

        let found = client_for(&server)
            .full_lookup(TARGET, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(found, None);
    }
}
