pub mod profile;
pub mod generator;

pub use profile::{MissionProfile, MissionType, Span, Vehicle, PROFILES};
pub use generator::{
    generate_missions, FieldDoc, MissionCatalog, MissionRecord, BASE_DATE, DEFAULT_SEED,
    MISSION_COUNT, SCHEMA,
};
