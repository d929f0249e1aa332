use std::{collections::BTreeMap, path::Path};

use crate::{
    compile::compiler::{ArtifactCompiler, COMPILER_ENV},
    foundation::{
        error::{ShowError, ShowResult},
        natsort::natural_cmp,
    },
    model::{
        light_code::LightCode,
        sample::{Color4D, Point4D},
        trajectory::Trajectory,
    },
    show::{
        config::ExportConfig,
        document::{
            DroneDocument, DroneSettings, FORMAT_VERSION, GENERIC_DRONE, LightKeyframe,
            ShowDocument, ShowMeta, ShowSettings, Swarm, TrajectoryPoint,
        },
        export::{to_json_text, write_atomic},
    },
};

/// Everything a single drone does during the show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DroneShowData {
    pub trajectory: Trajectory,
    pub lights: LightCode,
}

impl DroneShowData {
    pub fn new(trajectory: Trajectory, lights: LightCode) -> Self {
        Self { trajectory, lights }
    }
}

/// Summary numbers of a show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowStats {
    pub drone_count: usize,
    /// Latest time found in any trajectory or light code, in seconds.
    pub duration: f64,
    pub trajectory_points: usize,
    pub light_keyframes: usize,
}

/// Converts per-drone trajectories and light codes into Skybrush formats.
///
/// Drones are stored by name. Whenever an ordered drone list is produced the
/// names are sorted naturally, so `drone2` comes before `drone10`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowConverter {
    title: String,
    drones: BTreeMap<String, DroneShowData>,
}

impl ShowConverter {
    pub fn new(title: impl Into<String>, drones: BTreeMap<String, DroneShowData>) -> Self {
        Self {
            title: title.into(),
            drones,
        }
    }

    /// Build a converter from parallel trajectory and light-code maps.
    ///
    /// Both maps must name exactly the same drones; otherwise nothing is
    /// built and [`ShowError::MismatchedDrones`] names a drone found on one
    /// side only.
    pub fn from_parts(
        title: impl Into<String>,
        trajectories: BTreeMap<String, Trajectory>,
        mut lights: BTreeMap<String, LightCode>,
    ) -> ShowResult<Self> {
        if let Some(name) = trajectories.keys().find(|k| !lights.contains_key(*k)) {
            return Err(ShowError::mismatched_drones(format!(
                "drone '{name}' has a trajectory but no light code"
            )));
        }
        if let Some(name) = lights.keys().find(|k| !trajectories.contains_key(*k)) {
            return Err(ShowError::mismatched_drones(format!(
                "drone '{name}' has a light code but no trajectory"
            )));
        }

        let drones = trajectories
            .into_iter()
            .map(|(name, trajectory)| {
                let lights = lights.remove(&name).unwrap_or_default();
                (name, DroneShowData::new(trajectory, lights))
            })
            .collect();
        Ok(Self::new(title, drones))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn drones(&self) -> &BTreeMap<String, DroneShowData> {
        &self.drones
    }

    pub fn drone(&self, name: &str) -> Option<&DroneShowData> {
        self.drones.get(name)
    }

    /// Mutable access for appending further samples to one drone.
    pub fn drone_mut(&mut self, name: &str) -> Option<&mut DroneShowData> {
        self.drones.get_mut(name)
    }

    /// Add a drone; fails if the name is already taken.
    pub fn insert_drone(&mut self, name: impl Into<String>, data: DroneShowData) -> ShowResult<()> {
        let name = name.into();
        if self.drones.contains_key(&name) {
            return Err(ShowError::validation(format!("duplicate drone name '{name}'")));
        }
        self.drones.insert(name, data);
        Ok(())
    }

    /// Drone names in natural order.
    pub fn drone_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.drones.keys().map(String::as_str).collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    pub fn stats(&self) -> ShowStats {
        let duration = self
            .drones
            .values()
            .flat_map(|d| [d.trajectory.end_time(), d.lights.end_time()])
            .flatten()
            .fold(0.0, f64::max);
        ShowStats {
            drone_count: self.drones.len(),
            duration,
            trajectory_points: self.drones.values().map(|d| d.trajectory.len()).sum(),
            light_keyframes: self.drones.values().map(|d| d.lights.len()).sum(),
        }
    }

    /// The full show document with floats rounded to `precision` digits.
    pub fn to_document(&self, precision: u32) -> ShowDocument {
        let drones: Vec<DroneDocument> = self
            .drone_names()
            .into_iter()
            .filter_map(|name| self.drones.get(name).map(|data| (name, data)))
            .map(|(name, data)| DroneDocument {
                kind: GENERIC_DRONE.to_string(),
                settings: DroneSettings {
                    name: name.to_string(),
                    lights: data.lights.to_document(precision),
                    trajectory: data.trajectory.to_document(precision),
                },
            })
            .collect();

        tracing::debug!(drones = drones.len(), precision, "assembled show document");

        ShowDocument {
            version: FORMAT_VERSION,
            settings: ShowSettings::default(),
            swarm: Swarm { drones },
            meta: ShowMeta {
                title: self.title.clone(),
            },
        }
    }

    /// Deterministic JSON text of the show.
    ///
    /// `indent` is the pretty-printing width; `None` gives compact output.
    pub fn to_text(&self, indent: Option<usize>, precision: u32) -> ShowResult<String> {
        self.to_text_with(&ExportConfig { indent, precision })
    }

    pub fn to_text_with(&self, cfg: &ExportConfig) -> ShowResult<String> {
        cfg.validate()?;
        to_json_text(&self.to_document(cfg.precision), cfg.indent)
    }

    /// Write the JSON text to `path`, creating parent directories first.
    ///
    /// The file is published atomically: on failure `path` is left as it was.
    #[tracing::instrument(skip(self), fields(title = %self.title))]
    pub fn write_to_file(
        &self,
        path: &Path,
        indent: Option<usize>,
        precision: u32,
    ) -> ShowResult<()> {
        let text = self.to_text(indent, precision)?;
        write_atomic(path, text.as_bytes())?;
        tracing::info!(path = %path.display(), bytes = text.len(), "wrote show json");
        Ok(())
    }

    /// Produce a compiled artifact at `output` using `compiler`.
    ///
    /// The show is first written as JSON into a scratch directory under the
    /// system temp dir, which is removed again whatever the outcome. Without a
    /// compiler this fails with [`ShowError::ExternalToolMissing`].
    pub fn compile_to_artifact(
        &self,
        output: &Path,
        compiler: Option<&dyn ArtifactCompiler>,
    ) -> ShowResult<()> {
        self.compile_to_artifact_with(&ExportConfig::default(), output, compiler)
    }

    /// Like [`Self::compile_to_artifact`] with the intermediate JSON rendered
    /// using `cfg`.
    pub fn compile_to_artifact_with(
        &self,
        cfg: &ExportConfig,
        output: &Path,
        compiler: Option<&dyn ArtifactCompiler>,
    ) -> ShowResult<()> {
        self.compile_in(cfg, output, compiler, &std::env::temp_dir())
    }

    /// Like [`Self::compile_to_artifact`] with the scratch directory created
    /// under `work_root`.
    pub fn compile_to_artifact_in(
        &self,
        output: &Path,
        compiler: Option<&dyn ArtifactCompiler>,
        work_root: &Path,
    ) -> ShowResult<()> {
        self.compile_in(&ExportConfig::default(), output, compiler, work_root)
    }

    #[tracing::instrument(skip(self, compiler), fields(title = %self.title))]
    fn compile_in(
        &self,
        cfg: &ExportConfig,
        output: &Path,
        compiler: Option<&dyn ArtifactCompiler>,
        work_root: &Path,
    ) -> ShowResult<()> {
        let work_dir = tempfile::Builder::new()
            .prefix("skyshow-")
            .tempdir_in(work_root)?;
        let show_json = work_dir.path().join("show.json");

        let result = self
            .write_to_file(&show_json, cfg.indent, cfg.precision)
            .and_then(|()| match compiler {
                Some(c) => c.compile(&show_json, output),
                None => Err(ShowError::tool_missing(format!(
                    "no show compiler configured (set {COMPILER_ENV} or pass one explicitly)"
                ))),
            });

        let cleanup = work_dir.close();
        result?;
        cleanup?;
        tracing::info!(output = %output.display(), "compiled show artifact");
        Ok(())
    }

    /// Rebuild a converter from a parsed show document.
    ///
    /// Samples are appended one by one, so every ordering rule is checked
    /// again and nothing is re-sorted.
    pub fn from_document(doc: &ShowDocument) -> ShowResult<Self> {
        if doc.version != FORMAT_VERSION {
            return Err(ShowError::validation(format!(
                "unsupported show document version {}",
                doc.version
            )));
        }

        let mut converter = Self::new(doc.meta.title.clone(), BTreeMap::new());
        for drone in &doc.swarm.drones {
            let name = &drone.settings.name;
            let data = drone_from_document(drone).map_err(|e| for_drone(name, e))?;
            converter.insert_drone(name.clone(), data)?;
        }
        Ok(converter)
    }

    /// Parse JSON show text and rebuild it with [`Self::from_document`].
    pub fn from_text(text: &str) -> ShowResult<Self> {
        let doc: ShowDocument = serde_json::from_str(text)?;
        Self::from_document(&doc)
    }
}

fn drone_from_document(drone: &DroneDocument) -> ShowResult<DroneShowData> {
    if drone.kind != GENERIC_DRONE {
        return Err(ShowError::validation(format!(
            "unsupported drone type '{}'",
            drone.kind
        )));
    }
    let s = &drone.settings;
    if s.trajectory.version != FORMAT_VERSION || s.lights.version != FORMAT_VERSION {
        return Err(ShowError::validation(format!(
            "unsupported trajectory/lights version {}/{}",
            s.trajectory.version, s.lights.version
        )));
    }

    let mut data = DroneShowData::default();
    for TrajectoryPoint(t, [x, y, z], _) in &s.trajectory.points {
        data.trajectory.append(Point4D::new(*t, *x, *y, *z))?;
    }
    for LightKeyframe(t, [r, g, b], is_fade) in &s.lights.data {
        data.lights.append(Color4D {
            t: *t,
            r: *r,
            g: *g,
            b: *b,
            is_fade: *is_fade,
        })?;
    }
    Ok(data)
}

pub(crate) fn for_drone(name: &str, err: ShowError) -> ShowError {
    match err {
        ShowError::Validation(msg) => ShowError::Validation(format!("drone '{name}': {msg}")),
        ShowError::Ordering(msg) => ShowError::Ordering(format!("drone '{name}': {msg}")),
        ShowError::ValueRange(msg) => ShowError::ValueRange(format!("drone '{name}': {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/show/converter.rs"]
mod tests;
