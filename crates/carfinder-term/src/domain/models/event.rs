use super::Make;
use super::VehicleModel;
use super::VpicError;

#[derive(Debug)]
pub enum Event {
    MakesLoaded(Result<Vec<Make>, VpicError>),
    ModelsLoaded {
        generation: u64,
        outcome: Result<Vec<VehicleModel>, VpicError>,
    },
    KeyboardBack,
    KeyboardBackTab,
    KeyboardCTRLC,
    KeyboardDown,
    KeyboardEnter,
    KeyboardLeft,
    KeyboardQuit,
    KeyboardRight,
    KeyboardTab,
    KeyboardUp,
    UITick,
}
