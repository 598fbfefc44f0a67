use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use mr_core::ports::{LookupError, VehicleLookupPort};
use mr_core::{VehicleId, VehicleListing};

/// Response envelope of `GET /cars/{id}`.
#[derive(Debug, Deserialize)]
struct CarEnvelope {
    #[serde(default)]
    success: Option<bool>,

    #[serde(default, alias = "car")]
    data: Option<VehicleListing>,
}

/// Inventory API client for single-vehicle lookups.
pub struct HttpVehicleLookup {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpVehicleLookup {
    /// Build a client for `base_url` (e.g. `https://api.myride.example/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot carry a path,
    /// or if the HTTP client fails to build.
    pub fn new(base_url: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid inventory API base URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Inventory API base URL cannot carry a path: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build inventory HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn car_url(&self, id: &VehicleId) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport(format!("base URL {} has no path", self.base_url)))?
            .pop_if_empty()
            .push("cars")
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl VehicleLookupPort for HttpVehicleLookup {
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<VehicleListing>, LookupError> {
        let url = self.car_url(id)?;
        debug!(%url, "fetching vehicle");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let envelope: CarEnvelope =
            serde_json::from_slice(&body).map_err(|e| LookupError::Malformed(e.to_string()))?;

        if envelope.success == Some(false) {
            debug!(id = %id, "inventory API reported failure");
            return Ok(None);
        }

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn lookup_for(server: &Server) -> HttpVehicleLookup {
        HttpVehicleLookup::new(&format!("{}/api", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_found_vehicle_is_decoded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/cars/64b7f0c2a1d3e4f5a6b7c8d9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true, "data": {"_id": "64b7f0c2a1d3e4f5a6b7c8d9", "make": "Toyota", "model": "Corolla", "year": 2020, "price": 17990}}"#,
            )
            .create_async()
            .await;

        let listing = lookup_for(&server)
            .find_by_id(&VehicleId::from("64b7f0c2a1d3e4f5a6b7c8d9"))
            .await
            .unwrap()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(listing.details.make.as_deref(), Some("Toyota"));
        assert_eq!(listing.details.year, Some(2020));
        assert_eq!(listing.details.price, Some(17990.0));
    }

    #[tokio::test]
    async fn test_car_field_alias_is_accepted() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cars/abc")
            .with_status(200)
            .with_body(r#"{"success": true, "car": {"id": "abc", "title": "Test Car"}}"#)
            .create_async()
            .await;

        let listing = lookup_for(&server)
            .find_by_id(&VehicleId::from("abc"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(listing.details.title.as_deref(), Some("Test Car"));
    }

    #[tokio::test]
    async fn test_record_with_object_id_and_id_is_decoded() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cars/64b7f0c2a1d3e4f5a6b7c8d9")
            .with_status(200)
            .with_body(
                r#"{"success": true, "data": {"_id": "64b7f0c2a1d3e4f5a6b7c8d9", "id": 12, "make": "Mazda", "year": "2019", "mileage": 40100.7}}"#,
            )
            .create_async()
            .await;

        let listing = lookup_for(&server)
            .find_by_id(&VehicleId::from("64b7f0c2a1d3e4f5a6b7c8d9"))
            .await
            .unwrap()
            .unwrap();

        assert!(listing
            .record_id()
            .is_some_and(|id| id.matches(&VehicleId::from("64b7f0c2a1d3e4f5a6b7c8d9"))));
        assert_eq!(listing.details.make.as_deref(), Some("Mazda"));
        assert_eq!(listing.details.year, Some(2019));
        assert_eq!(listing.details.mileage, None);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a local port with nothing listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let lookup = HttpVehicleLookup::new(
            &format!("http://127.0.0.1:{}/api", port),
            Duration::from_secs(2),
        )
        .unwrap();

        let result = lookup.find_by_id(&VehicleId::from("abc")).await;

        assert!(matches!(result, Err(LookupError::Transport(_))));
    }

    #[tokio::test]
    async fn test_not_found_status_is_absence() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cars/missing")
            .with_status(404)
            .create_async()
            .await;

        let result = lookup_for(&server)
            .find_by_id(&VehicleId::from("missing"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_absence() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cars/abc")
            .with_status(200)
            .with_body(r#"{"success": false, "message": "Car not found"}"#)
            .create_async()
            .await;

        let result = lookup_for(&server)
            .find_by_id(&VehicleId::from("abc"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cars/abc")
            .with_status(503)
            .create_async()
            .await;

        let result = lookup_for(&server)
            .find_by_id(&VehicleId::from("abc"))
            .await;

        assert!(matches!(result, Err(LookupError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cars/abc")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let result = lookup_for(&server)
            .find_by_id(&VehicleId::from("abc"))
            .await;

        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(HttpVehicleLookup::new("not a url", Duration::from_secs(1)).is_err());
        assert!(
            HttpVehicleLookup::new("mailto:sales@myride.example", Duration::from_secs(1)).is_err()
        );
    }
}
