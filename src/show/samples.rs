use std::{collections::BTreeMap, path::Path};

use crate::{
    foundation::error::{ShowError, ShowResult},
    model::{
        light_code::LightCode,
        sample::{Color4D, Point4D},
        trajectory::Trajectory,
    },
    show::converter::{DroneShowData, ShowConverter, for_drone},
};

/// Already-sampled show data as handed over by an exporter.
///
/// ```json
/// {
///   "title": "Demo",
///   "drones": {
///     "d1": {
///       "trajectory": [{"t": 0, "x": 0, "y": 0, "z": 0}],
///       "lights": [{"t": 0, "r": 255, "g": 0, "b": 0, "is_fade": true}]
///     }
///   }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowSamples {
    pub title: String,
    pub drones: BTreeMap<String, DroneSamples>,
}

/// Samples of one drone, in any time order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DroneSamples {
    #[serde(default)]
    pub trajectory: Vec<Point4D>,
    #[serde(default)]
    pub lights: Vec<Color4D>,
}

impl ShowSamples {
    pub fn from_json_str(text: &str) -> ShowResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn read(path: &Path) -> ShowResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Sort every drone's samples once and build the converter.
    pub fn into_converter(self) -> ShowResult<ShowConverter> {
        let mut drones = BTreeMap::new();
        for (name, samples) in self.drones {
            let data = DroneShowData::new(
                Trajectory::new(samples.trajectory).map_err(|e| for_drone(&name, e))?,
                LightCode::new(samples.lights).map_err(|e| for_drone(&name, e))?,
            );
            drones.insert(name, data);
        }
        if drones.is_empty() {
            tracing::warn!(title = %self.title, "show has no drones");
        }
        Ok(ShowConverter::new(self.title, drones))
    }
}

impl TryFrom<ShowSamples> for ShowConverter {
    type Error = ShowError;

    fn try_from(samples: ShowSamples) -> ShowResult<Self> {
        samples.into_converter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/show/samples.rs"]
mod tests;
