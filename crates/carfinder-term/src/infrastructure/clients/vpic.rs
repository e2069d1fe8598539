#[cfg(test)]
#[path = "vpic_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use vpic_types::MakesResponse;
use vpic_types::ModelsResponse;

use crate::domain::models::Make;
use crate::domain::models::VehicleDataClient;
use crate::domain::models::VehicleModel;
use crate::domain::models::VpicError;

pub struct VpicClient {
    url: String,
    client: reqwest::Client,
}

impl Default for VpicClient {
    fn default() -> VpicClient {
        return VpicClient::new(vpic_types::DEFAULT_BASE_URL);
    }
}

impl VpicClient {
    pub fn new(url: &str) -> VpicClient {
        return VpicClient {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    pub fn url(&self) -> &str {
        return &self.url;
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{}{}?{}", self.url, path, vpic_types::FORMAT_QUERY);
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, VpicError> {
        tracing::debug!(url, "vPIC request");

        let res = self.client.get(url).send().await.map_err(|err| {
            tracing::error!(error = ?err, url, "vPIC is not reachable");
            VpicError::Request {
                url: url.to_string(),
                message: err.to_string(),
            }
        })?;

        let status = res.status().as_u16();
        if !res.status().is_success() {
            tracing::error!(status, url, "vPIC request failed");
            return Err(VpicError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = res.text().await.map_err(|err| VpicError::Request {
            url: url.to_string(),
            message: err.to_string(),
        })?;

        return serde_json::from_str::<T>(&body).map_err(|err| {
            tracing::error!(error = %err, url, "vPIC returned an unexpected body");
            VpicError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        });
    }
}

#[async_trait]
impl VehicleDataClient for VpicClient {
    async fn get_makes(&self, vehicle_type: &str) -> Result<Vec<Make>, VpicError> {
        let url = self.endpoint(&vpic_types::makes_for_vehicle_type_path(vehicle_type));
        let response = self.get_json::<MakesResponse>(&url).await?;

        return Ok(response.into_results().into_iter().map(Make::from).collect());
    }

    async fn get_models(&self, make_id: &str, year: &str) -> Result<Vec<VehicleModel>, VpicError> {
        let url = self.endpoint(&vpic_types::models_for_make_id_year_path(make_id, year));
        let response = self.get_json::<ModelsResponse>(&url).await?;

        return Ok(response
            .into_results()
            .into_iter()
            .map(VehicleModel::from)
            .collect());
    }
}
