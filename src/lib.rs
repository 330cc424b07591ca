pub mod error;
pub mod physics;
pub mod sim;
pub mod dataset;
pub mod analysis;
pub mod io;
pub mod shell;
mod numeric;

pub use error::{LaunchError, ParseError, Result};

// The two operations the presentation shell calls into.
pub use dataset::generate_missions;
pub use sim::run_ascent_simulation;

pub mod types {
    pub use crate::dataset::{MissionRecord, MissionType, Vehicle};
    pub use crate::sim::{LaunchParams, SeriesPoint, SimulationResult};
}
