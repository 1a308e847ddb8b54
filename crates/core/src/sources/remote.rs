use super::FacilitySource;
use crate::facility::Facility;
use crate::{TriageError, TriageResult};
use async_trait::async_trait;

/// Hosted facility table behind a PostgREST-compatible endpoint.
///
/// Issues `GET {base_url}/rest/v1/{table}?select=*&order=rating.desc` and lets the store do the
/// ordering. The key is sent both as `apikey` and as a bearer token.
pub struct RemoteFacilitySource {
    base_url: String,
    api_key: String,
    table: String,
    client: reqwest::Client,
}

impl RemoteFacilitySource {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> TriageResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(TriageError::FacilityRequest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            client,
        })
    }

    fn query_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl FacilitySource for RemoteFacilitySource {
    async fn fetch_facilities(&self) -> TriageResult<Vec<Facility>> {
        let response = self
            .client
            .get(self.query_url())
            .query(&[("select", "*"), ("order", "rating.desc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(TriageError::FacilityRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TriageError::FacilityStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(TriageError::FacilityRequest)?;
        let de = &mut serde_json::Deserializer::from_slice(&bytes);
        let facilities: Vec<Facility> = serde_path_to_error::deserialize(de)
            .map_err(|e| TriageError::FacilityDecode(e.to_string()))?;

        tracing::debug!(count = facilities.len(), table = %self.table, "fetched facilities");
        Ok(facilities)
    }

    fn describe(&self) -> String {
        format!("remote table {} at {}", self.table, self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::collections::HashMap;

    const ROWS: &str = r#"[
        {"id": "1", "name": "Top", "latitude": 1.0, "longitude": 1.0, "rating": 4.9,
         "specialty": ["Emergency"], "emergency_services": true},
        {"id": "2", "name": "Second", "latitude": "2.0", "longitude": "2.0", "rating": 4.1,
         "specialty": null, "emergency_services": false}
    ]"#;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test store");
        });
        format!("http://{addr}")
    }

    async fn hospitals(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, String) {
        let key_ok = headers.get("apikey").and_then(|v| v.to_str().ok()) == Some("anon")
            && headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer anon");
        if !key_ok {
            return (StatusCode::UNAUTHORIZED, "bad key".into());
        }
        if params.get("order").map(String::as_str) != Some("rating.desc")
            || params.get("select").map(String::as_str) != Some("*")
        {
            return (StatusCode::BAD_REQUEST, "bad query".into());
        }
        (StatusCode::OK, ROWS.into())
    }

    #[tokio::test]
    async fn fetches_rows_in_store_order() {
        let base = serve(Router::new().route("/rest/v1/hospitals", get(hospitals))).await;
        let source = RemoteFacilitySource::new(&format!("{base}/"), "anon", "hospitals")
            .expect("build source");

        let facilities = source.fetch_facilities().await.expect("fetch facilities");
        let names: Vec<_> = facilities.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "Second"]);
        assert_eq!(facilities[1].latitude, 2.0);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base = serve(Router::new().route("/rest/v1/hospitals", get(hospitals))).await;
        let source = RemoteFacilitySource::new(&base, "wrong", "hospitals").expect("build source");

        let err = source.fetch_facilities().await.expect_err("should fail");
        match err {
            TriageError::FacilityStatus { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("expected FacilityStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_rows_report_the_failing_path() {
        let app = Router::new().route(
            "/rest/v1/hospitals",
            get(|| async { r#"[{"id": "1", "name": "Bad", "latitude": "north", "longitude": 0}]"# }),
        );
        let base = serve(app).await;
        let source = RemoteFacilitySource::new(&base, "anon", "hospitals").expect("build source");

        let err = source.fetch_facilities().await.expect_err("should fail");
        match err {
            TriageError::FacilityDecode(msg) => assert!(msg.contains("latitude"), "{msg}"),
            other => panic!("expected FacilityDecode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_store_is_a_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let source = RemoteFacilitySource::new(&format!("http://{addr}"), "anon", "hospitals")
            .expect("build source");
        let err = source.fetch_facilities().await.expect_err("should fail");
        assert!(matches!(err, TriageError::FacilityRequest(_)));
    }
}
