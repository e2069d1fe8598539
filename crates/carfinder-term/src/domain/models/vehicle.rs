use serde::Deserialize;
use serde::Serialize;
use vpic_types::MakeRecord;
use vpic_types::ModelRecord;

/// A vehicle manufacturer. `id` is the vPIC numeric id kept as an opaque string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Make {
    pub id: String,
    pub name: String,
}

impl Make {
    pub fn new(id: &str, name: &str) -> Make {
        return Make {
            id: id.to_string(),
            name: name.to_string(),
        };
    }
}

impl From<MakeRecord> for Make {
    fn from(record: MakeRecord) -> Make {
        return Make {
            id: record.make_id.to_string(),
            name: record.make_name,
        };
    }
}

/// A model offered by one make in one model year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: String,
    pub name: String,
}

impl VehicleModel {
    pub fn new(id: &str, name: &str) -> VehicleModel {
        return VehicleModel {
            id: id.to_string(),
            name: name.to_string(),
        };
    }
}

impl From<ModelRecord> for VehicleModel {
    fn from(record: ModelRecord) -> VehicleModel {
        return VehicleModel {
            id: record.model_id.to_string(),
            name: record.model_name,
        };
    }
}
