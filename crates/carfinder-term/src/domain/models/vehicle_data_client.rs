use async_trait::async_trait;

use super::Make;
use super::VehicleModel;
use super::VpicError;

#[async_trait]
pub trait VehicleDataClient: Send + Sync {
    /// Makes registered for a vehicle type, in server order.
    async fn get_makes(&self, vehicle_type: &str) -> Result<Vec<Make>, VpicError>;

    /// Models of `make_id` for `year`. An empty list means nothing matched.
    async fn get_models(&self, make_id: &str, year: &str) -> Result<Vec<VehicleModel>, VpicError>;
}

pub type VehicleDataClientBox = Box<dyn VehicleDataClient>;
