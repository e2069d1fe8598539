use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vpic_types::{MakeRecord, ModelRecord};

/// Canned data keyed the way the vPIC endpoints are addressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VpicFixture {
    /// Makes per vehicle type, in the order the server returns them.
    #[serde(default)]
    pub makes: HashMap<String, Vec<MakeRecord>>,
    /// Models per `"{make_id}/{year}"`.
    #[serde(default)]
    pub models: HashMap<String, Vec<ModelRecord>>,
    /// Vehicle types answered with a 500.
    #[serde(default)]
    pub failing_vehicle_types: Vec<String>,
    /// `"{make_id}/{year}"` keys answered with a 500.
    #[serde(default)]
    pub failing_models: Vec<String>,
}

impl VpicFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn models_key(make_id: &str, year: &str) -> String {
        format!("{}/{}", make_id, year)
    }

    pub fn add_makes(&mut self, vehicle_type: &str, makes: Vec<MakeRecord>) {
        self.makes.insert(vehicle_type.to_string(), makes);
    }

    pub fn add_models(&mut self, make_id: &str, year: &str, models: Vec<ModelRecord>) {
        self.models.insert(Self::models_key(make_id, year), models);
    }

    pub fn fail_makes(&mut self, vehicle_type: &str) {
        self.failing_vehicle_types.push(vehicle_type.to_string());
    }

    pub fn fail_models(&mut self, make_id: &str, year: &str) {
        self.failing_models.push(Self::models_key(make_id, year));
    }

    /// `None` means the lookup is configured to fail.
    pub fn get_makes(&self, vehicle_type: &str) -> Option<Vec<MakeRecord>> {
        if self.failing_vehicle_types.iter().any(|t| t == vehicle_type) {
            return None;
        }
        Some(self.makes.get(vehicle_type).cloned().unwrap_or_default())
    }

    /// `None` means the lookup is configured to fail.
    pub fn get_models(&self, make_id: &str, year: &str) -> Option<Vec<ModelRecord>> {
        let key = Self::models_key(make_id, year);
        if self.failing_models.contains(&key) {
            return None;
        }
        Some(self.models.get(&key).cloned().unwrap_or_default())
    }

    pub fn from_yaml(yaml_content: &str) -> anyhow::Result<Self> {
        let fixture: VpicFixture = serde_yaml::from_str(yaml_content)?;
        Ok(fixture)
    }

    pub fn create_test_fixture() -> Self {
        let mut fixture = Self::new();

        fixture.add_makes(
            "car",
            vec![
                MakeRecord::new(474, "HONDA"),
                MakeRecord::new(441, "TESLA"),
                MakeRecord::new(448, "TOYOTA"),
            ],
        );

        fixture.add_models(
            "474",
            "2020",
            vec![
                ModelRecord::new(1861_i64, "Accord"),
                ModelRecord::new(1863_i64, "Civic"),
            ],
        );
        fixture.add_models(
            "474",
            "2021",
            vec![ModelRecord::new(1861_i64, "Accord")],
        );
        fixture.add_models(
            "441",
            "2020",
            vec![
                ModelRecord::new(1685_i64, "Model S"),
                ModelRecord::new(10199_i64, "Model 3"),
            ],
        );

        // Stand-in for vPIC make "100" used across the screen tests.
        fixture.add_models("100", "2020", vec![ModelRecord::new(1_i64, "Civic")]);
        fixture.add_models("100", "2021", vec![ModelRecord::new(2_i64, "Accord")]);

        fixture
    }
}
