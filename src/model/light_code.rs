use crate::{
    foundation::error::{ShowError, ShowResult},
    foundation::round::round_to,
    model::sample::{Color4D, ensure_finite_time},
    show::document::{FORMAT_VERSION, LightDocument, LightKeyframe},
};

/// Causal light program of one drone.
///
/// Keyframes are kept in non-decreasing time order. Two keyframes may share a
/// timestamp, which models an instantaneous color cut.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightCode {
    colors: Vec<Color4D>,
}

impl LightCode {
    /// Build a light code from keyframes in any order.
    ///
    /// The sort is stable, so keyframes sharing a time keep their given order.
    pub fn new(colors: impl IntoIterator<Item = Color4D>) -> ShowResult<Self> {
        let mut colors: Vec<Color4D> = colors.into_iter().collect();
        for c in &colors {
            ensure_finite_time(c.t, "light keyframe")?;
        }
        colors.sort_by(|a, b| a.t.total_cmp(&b.t));
        Ok(Self { colors })
    }

    /// Add a keyframe to the end of the light code.
    pub fn append(&mut self, color: Color4D) -> ShowResult<()> {
        ensure_finite_time(color.t, "light keyframe")?;
        if let Some(last) = self.colors.last()
            && last.t > color.t
        {
            return Err(ShowError::ordering(format!(
                "new color at t={} must not come before the light code end at t={}",
                color.t, last.t
            )));
        }
        self.colors.push(color);
        Ok(())
    }

    pub fn colors(&self) -> &[Color4D] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn end_time(&self) -> Option<f64> {
        self.colors.last().map(|c| c.t)
    }

    /// Skybrush representation with times rounded to `precision` digits.
    ///
    /// Channels are already 8-bit integers, so they are emitted unchanged.
    pub fn to_document(&self, precision: u32) -> LightDocument {
        LightDocument {
            data: self
                .colors
                .iter()
                .map(|c| LightKeyframe(round_to(c.t, precision), c.rgb(), c.is_fade))
                .collect(),
            version: FORMAT_VERSION,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/light_code.rs"]
mod tests;
