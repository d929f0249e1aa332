use crate::foundation::error::{ShowError, ShowResult};

/// A position sample: time in seconds, coordinates in meters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point4D {
    /// Time in seconds.
    pub t: f64,
    /// X coordinate in meters.
    pub x: f64,
    /// Y coordinate in meters.
    pub y: f64,
    /// Z coordinate in meters.
    pub z: f64,
}

impl Point4D {
    /// Create a point from its time and coordinates.
    pub fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        Self { t, x, y, z }
    }
}

/// A color keyframe: time in seconds, 8-bit RGB.
///
/// With `is_fade` set the color fades linearly from the previous keyframe
/// over `[prev.t, t]`; otherwise the previous color is held until `t` and
/// the change happens abruptly.
///
/// Deserialization accepts any JSON number per channel but rejects values
/// that are fractional or outside `[0, 255]` (see [`Color4D::try_new`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawColor")]
pub struct Color4D {
    /// Time in seconds.
    pub t: f64,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Fade from the previous keyframe (`true`) or cut at `t` (`false`).
    pub is_fade: bool,
}

impl Color4D {
    /// Fading keyframe with the given channels.
    pub fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            r,
            g,
            b,
            is_fade: true,
        }
    }

    /// Keyframe that holds the previous color until `t` and then cuts.
    pub fn cut(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            is_fade: false,
            ..Self::new(t, r, g, b)
        }
    }

    /// Build a keyframe from wide channel values, rejecting anything that is
    /// not an integer in `[0, 255]`.
    pub fn try_new(t: f64, r: f64, g: f64, b: f64, is_fade: bool) -> ShowResult<Self> {
        Ok(Self {
            t,
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
            is_fade,
        })
    }

    /// The channels as an `[r, g, b]` array.
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn channel(name: &str, value: f64) -> ShowResult<u8> {
    if !value.is_finite() || value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
        return Err(ShowError::value_range(format!(
            "color channel {name}={value} must be an integer in [0, 255]"
        )));
    }
    Ok(value as u8)
}

fn default_fade() -> bool {
    true
}

#[derive(serde::Deserialize)]
struct RawColor {
    t: f64,
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "default_fade")]
    is_fade: bool,
}

impl TryFrom<RawColor> for Color4D {
    type Error = ShowError;

    fn try_from(raw: RawColor) -> ShowResult<Self> {
        Self::try_new(raw.t, raw.r, raw.g, raw.b, raw.is_fade)
    }
}

pub(crate) fn ensure_finite_time(t: f64, what: &str) -> ShowResult<()> {
    if !t.is_finite() {
        return Err(ShowError::validation(format!(
            "{what} time must be finite, got {t}"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_finite_coords(p: &Point4D) -> ShowResult<()> {
    if ![p.x, p.y, p.z].iter().all(|v| v.is_finite()) {
        return Err(ShowError::validation(format!(
            "trajectory point at t={} has non-finite coordinates ({}, {}, {})",
            p.t, p.x, p.y, p.z
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/sample.rs"]
mod tests;
