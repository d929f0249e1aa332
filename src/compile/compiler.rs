use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    foundation::error::{ShowError, ShowResult},
    show::export::ensure_parent_dir,
};

/// Environment variable naming the external compiler program.
pub const COMPILER_ENV: &str = "SKYSHOW_COMPILER";

/// Something that turns a show document on disk into a compiled artifact.
///
/// [`crate::ShowConverter::compile_to_artifact`] writes the JSON document to a
/// scratch directory and hands its path to the compiler together with the
/// requested output path.
pub trait ArtifactCompiler {
    /// Compile the show JSON at `show_json` into `output`.
    fn compile(&self, show_json: &Path, output: &Path) -> ShowResult<()>;
}

/// Runs an external program as `<program> [args...] <show.json> <output>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandCompiler {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments passed before the input and output paths.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Pick the compiler program: `explicit` if given, otherwise the
    /// `SKYSHOW_COMPILER` environment variable. `None` when neither is set.
    pub fn resolve(explicit: Option<&Path>) -> Option<Self> {
        Self::resolve_with(explicit, std::env::var_os(COMPILER_ENV))
    }

    fn resolve_with(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<Self> {
        if let Some(p) = explicit {
            return Some(Self::new(p));
        }
        env_value
            .filter(|v| !v.is_empty())
            .map(|v| Self::new(PathBuf::from(v)))
    }
}

impl ArtifactCompiler for CommandCompiler {
    fn compile(&self, show_json: &Path, output: &Path) -> ShowResult<()> {
        ensure_parent_dir(output)?;

        tracing::info!(
            program = %self.program.display(),
            input = %show_json.display(),
            output = %output.display(),
            "running external show compiler"
        );

        let out = Command::new(&self.program)
            .args(&self.args)
            .arg(show_json)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ShowError::tool_missing(format!(
                        "show compiler '{}' was not found",
                        self.program.display()
                    ))
                } else {
                    ShowError::Io(e)
                }
            })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            tracing::warn!(status = %out.status, "show compiler failed");
            return Err(ShowError::compile(format!(
                "'{}' exited with status {}: {}",
                self.program.display(),
                out.status,
                stderr.trim()
            )));
        }

        if !output.exists() {
            return Err(ShowError::compile(format!(
                "'{}' succeeded but did not write '{}'",
                self.program.display(),
                output.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
