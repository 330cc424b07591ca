pub mod params;
pub mod runner;
pub mod event;

pub use params::{slider_defaults, LaunchParams, LaunchParamsBuilder, ParamRange, SLIDERS};
pub use runner::{run_ascent_simulation, simulate, Advisory, SeriesPoint, SimulationResult};
pub use event::{detect_events, EventKind, FlightEvent};
