//! Endpoint paths of the vPIC API, relative to the `/api/vehicles` base.

/// Production base URL of the vPIC vehicles API.
pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// Query string every request carries to select the JSON representation.
pub const FORMAT_QUERY: &str = "format=json";

/// Path listing every make registered for a vehicle type, e.g. `car`.
pub fn makes_for_vehicle_type_path(vehicle_type: &str) -> String {
    format!("/GetMakesForVehicleType/{vehicle_type}")
}

/// Path listing the models a make offers in one model year.
///
/// Segments are interpolated as-is; callers are expected to pass
/// transport-safe values.
pub fn models_for_make_id_year_path(make_id: &str, year: &str) -> String {
    format!("/GetModelsForMakeIdYear/makeId/{make_id}/modelyear/{year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makes_path() {
        assert_eq!(
            makes_for_vehicle_type_path("car"),
            "/GetMakesForVehicleType/car"
        );
    }

    #[test]
    fn test_models_path_keeps_raw_segments() {
        assert_eq!(
            models_for_make_id_year_path("474", "2020"),
            "/GetModelsForMakeIdYear/makeId/474/modelyear/2020"
        );
    }
}
