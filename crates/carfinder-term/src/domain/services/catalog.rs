//! Make and model-year catalog shared by the screens and the static path
//! enumeration.

use anyhow::Result;

use crate::domain::models::Make;
use crate::domain::models::PathParams;
use crate::domain::models::VehicleDataClient;
use crate::domain::models::VpicError;

/// Oldest model year offered for selection.
pub const FIRST_MODEL_YEAR: i32 = 2015;

/// Every selectable model year up to and including `current_year`, ascending.
pub fn model_years(current_year: i32) -> Vec<i32> {
    return (FIRST_MODEL_YEAR..=current_year).collect();
}

pub fn is_selectable_year(year: i32, current_year: i32) -> bool {
    return (FIRST_MODEL_YEAR..=current_year).contains(&year);
}

pub async fn fetch_makes(
    client: &dyn VehicleDataClient,
    vehicle_type: &str,
) -> Result<Vec<Make>, VpicError> {
    match client.get_makes(vehicle_type).await {
        Ok(makes) => {
            tracing::debug!(vehicle_type, count = makes.len(), "fetched makes");
            return Ok(makes);
        }
        Err(err) => {
            tracing::error!(vehicle_type, error = %err, "Error fetching vehicle makes");
            return Err(err);
        }
    }
}

/// Cross product of makes and years, make-major in server order.
pub fn static_paths(makes: &[Make], years: &[i32]) -> Vec<PathParams> {
    return makes
        .iter()
        .flat_map(|make| {
            years.iter().map(move |year| PathParams {
                make_id: make.id.to_string(),
                year: year.to_string(),
            })
        })
        .collect();
}

/// Every `/result/{makeId}/{year}` route that can be generated ahead of time.
/// A failed make fetch aborts the enumeration.
pub async fn enumerate_static_paths(
    client: &dyn VehicleDataClient,
    vehicle_type: &str,
    current_year: i32,
) -> Result<Vec<PathParams>> {
    let makes = fetch_makes(client, vehicle_type).await?;
    let years = model_years(current_year);
    let paths = static_paths(&makes, &years);

    tracing::info!(
        makes = makes.len(),
        years = years.len(),
        paths = paths.len(),
        "enumerated static result paths"
    );

    return Ok(paths);
}
