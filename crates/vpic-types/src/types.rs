//! Response envelope and record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The envelope wrapped around every vPIC answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    /// Number of records reported by the server.
    #[serde(default)]
    pub count: u64,
    /// Human readable status line.
    #[serde(default)]
    pub message: String,
    /// Echo of the query, absent on some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<String>,
    /// The records. vPIC omits the field or sends `null` when nothing matched.
    pub results: Option<Vec<T>>,
}

impl<T> ApiResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            message: "Response returned successfully".to_string(),
            search_criteria: None,
            results: Some(results),
        }
    }

    /// Records of the response; an absent `Results` reads as empty.
    pub fn results(&self) -> &[T] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

/// One row of `GetMakesForVehicleType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeRecord {
    #[serde(rename = "MakeId")]
    pub make_id: u64,
    #[serde(rename = "MakeName")]
    pub make_name: String,
    #[serde(
        rename = "VehicleTypeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_type_id: Option<u64>,
    #[serde(
        rename = "VehicleTypeName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_type_name: Option<String>,
}

impl MakeRecord {
    pub fn new(make_id: u64, make_name: impl Into<String>) -> Self {
        Self {
            make_id,
            make_name: make_name.into(),
            vehicle_type_id: None,
            vehicle_type_name: None,
        }
    }
}

/// One row of `GetModelsForMakeIdYear`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(rename = "Make_ID", default, skip_serializing_if = "Option::is_none")]
    pub make_id: Option<u64>,
    #[serde(rename = "Make_Name", default, skip_serializing_if = "Option::is_none")]
    pub make_name: Option<String>,
    #[serde(rename = "Model_ID")]
    pub model_id: RecordId,
    #[serde(rename = "Model_Name")]
    pub model_name: String,
}

impl ModelRecord {
    pub fn new(model_id: impl Into<RecordId>, model_name: impl Into<String>) -> Self {
        Self {
            make_id: None,
            make_name: None,
            model_id: model_id.into(),
            model_name: model_name.into(),
        }
    }
}

/// Identifier that vPIC sends either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

pub type MakesResponse = ApiResponse<MakeRecord>;
pub type ModelsResponse = ApiResponse<ModelRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_makes_response_from_vpic_body() {
        let body = r#"{
            "Count": 2,
            "Message": "Response returned successfully",
            "SearchCriteria": "Vehicle Type: car",
            "Results": [
                {"MakeId": 440, "MakeName": "ASTON MARTIN", "VehicleTypeId": 2, "VehicleTypeName": "Passenger Car"},
                {"MakeId": 441, "MakeName": "TESLA", "VehicleTypeId": 2, "VehicleTypeName": "Passenger Car"}
            ]
        }"#;

        let response: MakesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.results().len(), 2);
        assert_eq!(response.results()[0].make_id, 440);
        assert_eq!(response.results()[1].make_name, "TESLA");
        assert_eq!(
            response.search_criteria.as_deref(),
            Some("Vehicle Type: car")
        );
    }

    #[test]
    fn test_model_id_accepts_number_and_string() {
        let body = r#"{"Results": [
            {"Make_ID": 474, "Make_Name": "HONDA", "Model_ID": 1861, "Model_Name": "Accord"},
            {"Model_ID": "1863", "Model_Name": "Civic"}
        ]}"#;

        let response: ModelsResponse = serde_json::from_str(body).unwrap();
        let results = response.results();
        assert_eq!(results[0].model_id, RecordId::Number(1861));
        assert_eq!(results[1].model_id, RecordId::Text("1863".to_string()));
        assert_eq!(results[1].model_id.to_string(), "1863");
        assert_eq!(results[1].make_id, None);
    }

    #[test]
    fn test_absent_or_null_results_read_as_empty() {
        let absent: ModelsResponse =
            serde_json::from_str(r#"{"Count":0,"Message":"No data"}"#).unwrap();
        assert!(absent.results().is_empty());

        let null: ModelsResponse = serde_json::from_str(r#"{"Results":null}"#).unwrap();
        assert!(null.into_results().is_empty());
    }

    #[test]
    fn test_new_response_counts_results() {
        let response = ApiResponse::new(vec![ModelRecord::new(1_i64, "Civic")]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["Count"], 1);
        assert_eq!(json["Results"][0]["Model_ID"], 1);
        assert_eq!(json["Results"][0]["Model_Name"], "Civic");
        assert!(json.get("SearchCriteria").is_none());
    }
}
