//! skyshow converts drone show data into the Skybrush show format.
//!
//! An exporter samples its scene into per-drone [`Trajectory`] and
//! [`LightCode`] values, groups them by drone name in a [`ShowConverter`],
//! and gets back:
//!
//! - a typed [`ShowDocument`] (format version 1),
//! - its deterministic JSON text, optionally written atomically to disk,
//! - a compiled artifact produced by an external [`ArtifactCompiler`].
//!
//! Trajectories keep strictly increasing times; light codes keep
//! non-decreasing times, so equal timestamps model instantaneous cuts.
//! Drones are always emitted in natural name order (`drone2` before
//! `drone10`).
#![forbid(unsafe_code)]

mod compile;
mod foundation;
mod model;
mod show;

pub use compile::compiler::{ArtifactCompiler, COMPILER_ENV, CommandCompiler};
pub use foundation::error::{ShowError, ShowResult};
pub use foundation::natsort::{natural_cmp, natural_sort};
pub use foundation::round::{MAX_PRECISION, round_to};
pub use model::light_code::LightCode;
pub use model::sample::{Color4D, Point4D};
pub use model::trajectory::Trajectory;
pub use show::config::{DEFAULT_INDENT, DEFAULT_PRECISION, ExportConfig};
pub use show::converter::{DroneShowData, ShowConverter, ShowStats};
pub use show::document::{
    DroneDocument, DroneSettings, FORMAT_VERSION, GENERIC_DRONE, LightDocument, LightKeyframe,
    ShowDocument, ShowMeta, ShowSettings, Swarm, TrajectoryDocument, TrajectoryPoint,
};
pub use show::export::{ensure_parent_dir, write_atomic};
pub use show::samples::{DroneSamples, ShowSamples};
