use crate::foundation::{
    error::{ShowError, ShowResult},
    round::MAX_PRECISION,
};

/// Default number of decimal digits kept for times and coordinates.
pub const DEFAULT_PRECISION: u32 = 3;

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 2;

/// How a show is rendered to JSON text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Indentation width; `None` writes compact single-line JSON.
    pub indent: Option<usize>,
    /// Decimal digits kept for every float.
    pub precision: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: Some(DEFAULT_INDENT),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> ShowResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ShowError::validation(format!(
                "precision must be at most {MAX_PRECISION} digits, got {}",
                self.precision
            )));
        }
        Ok(())
    }

    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/show/config.rs"]
mod tests;
