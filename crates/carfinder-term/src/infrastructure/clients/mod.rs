pub mod vpic;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::VehicleDataClientBox;

pub struct VehicleDataClientManager {}

impl VehicleDataClientManager {
    /// Client for the configured vPIC endpoint.
    pub fn get() -> VehicleDataClientBox {
        return Box::new(vpic::VpicClient::new(&Config::get(ConfigKey::ApiUrl)));
    }
}
