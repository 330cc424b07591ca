pub mod filter;
pub mod stats;

pub use filter::{
    cost_by_outcome, crew_by_type_and_outcome, duration_vs_distance, yield_vs_cost, CrewByOutcome,
    FilterSummary, MissionFilter,
};
pub use stats::{averages_by_type, correlation_matrix, TypeAverages, CORRELATION_FIELDS};
