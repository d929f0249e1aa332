//! Serde model of the Skybrush show document, format version 1.
//!
//! Field order in these structs is the key order of the emitted JSON, which
//! keeps serialized output byte-stable for identical input.

/// The only document version this crate reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// Drone type emitted for every drone.
pub const GENERIC_DRONE: &str = "generic";

/// A complete show.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowDocument {
    pub version: u32,
    pub settings: ShowSettings,
    pub swarm: Swarm,
    pub meta: ShowMeta,
}

/// Show-level settings; always empty in version 1.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowSettings {}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Swarm {
    /// Drones in natural order of their names.
    pub drones: Vec<DroneDocument>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowMeta {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DroneDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub settings: DroneSettings,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DroneSettings {
    pub name: String,
    pub lights: LightDocument,
    pub trajectory: TrajectoryDocument,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrajectoryDocument {
    pub points: Vec<TrajectoryPoint>,
    pub version: u32,
}

/// `[t, [x, y, z], []]`.
///
/// The third slot is reserved for per-point curve control. It is always
/// written empty, and whatever a reader finds there is carried along as raw
/// JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrajectoryPoint(pub f64, pub [f64; 3], pub Vec<serde_json::Value>);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightDocument {
    pub data: Vec<LightKeyframe>,
    pub version: u32,
}

/// `[t, [r, g, b], is_fade]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightKeyframe(pub f64, pub [u8; 3], pub bool);
