use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Mission types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MissionType {
    Orbital,
    Lunar,
    Mars,
    #[serde(rename = "Deep Space")]
    DeepSpace,
    #[serde(rename = "ISS Resupply")]
    IssResupply,
}

impl MissionType {
    /// Canonical order; records are assigned cyclically through it.
    pub const ALL: [MissionType; 5] = [
        MissionType::Orbital,
        MissionType::Lunar,
        MissionType::Mars,
        MissionType::DeepSpace,
        MissionType::IssResupply,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MissionType::Orbital => "Orbital",
            MissionType::Lunar => "Lunar",
            MissionType::Mars => "Mars",
            MissionType::DeepSpace => "Deep Space",
            MissionType::IssResupply => "ISS Resupply",
        }
    }

    pub fn profile(self) -> &'static MissionProfile {
        &PROFILES[self as usize]
    }
}

// ---------------------------------------------------------------------------
// Launch vehicles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vehicle {
    #[serde(rename = "Falcon 9")]
    Falcon9,
    #[serde(rename = "Atlas V")]
    AtlasV,
    #[serde(rename = "Delta IV")]
    DeltaIv,
    #[serde(rename = "Ariane 5")]
    Ariane5,
    Soyuz,
    #[serde(rename = "SLS")]
    Sls,
}

impl Vehicle {
    pub const ALL: [Vehicle; 6] = [
        Vehicle::Falcon9,
        Vehicle::AtlasV,
        Vehicle::DeltaIv,
        Vehicle::Ariane5,
        Vehicle::Soyuz,
        Vehicle::Sls,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Vehicle::Falcon9 => "Falcon 9",
            Vehicle::AtlasV => "Atlas V",
            Vehicle::DeltaIv => "Delta IV",
            Vehicle::Ariane5 => "Ariane 5",
            Vehicle::Soyuz => "Soyuz",
            Vehicle::Sls => "SLS",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        /// Accepts the display name or a dashed/underscored spelling,
        /// case-insensitively ("Deep Space", "deep-space", "DEEP_SPACE").
        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize(s);
                <$ty>::ALL
                    .into_iter()
                    .find(|v| normalize(v.name()) == key)
                    .ok_or_else(|| ParseError { kind: $what, input: s.to_string() })
            }
        }
    };
}

display_and_parse!(MissionType, "mission type");
display_and_parse!(Vehicle, "vehicle");

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ---------------------------------------------------------------------------
// Per-type sampling profile
// ---------------------------------------------------------------------------

/// Closed interval `[lo, hi]` used for uniform sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionProfile {
    pub mission_type: MissionType,
    pub payload_kg: Span,
    pub fuel_tons: Span, // base, before payload-proportional noise
    pub cost_million: Span,
    pub distance_km: Span,
    pub duration_days: Span,
    pub crew: Span,
    pub success_prob: f64,
}

/// Indexed by `MissionType as usize`.
pub const PROFILES: [MissionProfile; 5] = [
    MissionProfile {
        mission_type: MissionType::Orbital,
        payload_kg: Span::new(500.0, 8_000.0),
        fuel_tons: Span::new(20.0, 80.0),
        cost_million: Span::new(30.0, 120.0),
        distance_km: Span::new(200.0, 2_000.0),
        duration_days: Span::new(1.0, 14.0),
        crew: Span::new(0.0, 4.0),
        success_prob: 0.92,
    },
    MissionProfile {
        mission_type: MissionType::Lunar,
        payload_kg: Span::new(1_000.0, 12_000.0),
        fuel_tons: Span::new(50.0, 150.0),
        cost_million: Span::new(80.0, 250.0),
        distance_km: Span::new(350_000.0, 400_000.0),
        duration_days: Span::new(5.0, 20.0),
        crew: Span::new(0.0, 6.0),
        success_prob: 0.85,
    },
    MissionProfile {
        mission_type: MissionType::Mars,
        payload_kg: Span::new(2_000.0, 20_000.0),
        fuel_tons: Span::new(100.0, 300.0),
        cost_million: Span::new(150.0, 450.0),
        distance_km: Span::new(55_000.0, 400_000.0),
        duration_days: Span::new(180.0, 300.0),
        crew: Span::new(0.0, 6.0),
        success_prob: 0.78,
    },
    MissionProfile {
        mission_type: MissionType::DeepSpace,
        payload_kg: Span::new(500.0, 5_000.0),
        fuel_tons: Span::new(60.0, 200.0),
        cost_million: Span::new(100.0, 500.0),
        distance_km: Span::new(100_000.0, 500_000.0),
        duration_days: Span::new(365.0, 1_000.0),
        crew: Span::new(0.0, 0.0),
        success_prob: 0.82,
    },
    MissionProfile {
        mission_type: MissionType::IssResupply,
        payload_kg: Span::new(1_000.0, 6_000.0),
        fuel_tons: Span::new(15.0, 60.0),
        cost_million: Span::new(20.0, 80.0),
        distance_km: Span::new(400.0, 420.0),
        duration_days: Span::new(1.0, 3.0),
        crew: Span::new(0.0, 7.0),
        success_prob: 0.95,
    },
];

/// Fuel noise as a fraction of payload mass.
pub const FUEL_NOISE: Span = Span::new(0.005, 0.015);

impl MissionProfile {
    /// Widest possible `fuel_tons` once payload noise is added.
    pub fn fuel_envelope(&self) -> Span {
        Span::new(
            self.fuel_tons.lo + self.payload_kg.lo * FUEL_NOISE.lo,
            self.fuel_tons.hi + self.payload_kg.hi * FUEL_NOISE.hi,
        )
    }
}
