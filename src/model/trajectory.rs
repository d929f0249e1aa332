use crate::{
    foundation::error::{ShowError, ShowResult},
    foundation::round::round_to,
    model::sample::{Point4D, ensure_finite_coords, ensure_finite_time},
    show::document::{FORMAT_VERSION, TrajectoryDocument, TrajectoryPoint},
};

/// Causal flight path of one drone.
///
/// Points are kept in strictly increasing time order. Positions between two
/// points are assumed to be linearly interpolated in both space and time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Point4D>,
}

impl Trajectory {
    /// Build a trajectory from samples in any order.
    ///
    /// The samples are sorted by time once; two samples at the same time are
    /// rejected with [`ShowError::Ordering`].
    pub fn new(points: impl IntoIterator<Item = Point4D>) -> ShowResult<Self> {
        let mut points: Vec<Point4D> = points.into_iter().collect();
        for p in &points {
            ensure_finite_time(p.t, "trajectory point")?;
            ensure_finite_coords(p)?;
        }
        points.sort_by(|a, b| a.t.total_cmp(&b.t));
        if let Some(w) = points.windows(2).find(|w| w[0].t >= w[1].t) {
            return Err(ShowError::ordering(format!(
                "trajectory has more than one point at t={}",
                w[1].t
            )));
        }
        Ok(Self { points })
    }

    /// Add a point to the end of the trajectory.
    ///
    /// Fails without touching the trajectory if `point.t` is not strictly
    /// after the current last point, or if any coordinate is not finite.
    pub fn append(&mut self, point: Point4D) -> ShowResult<()> {
        ensure_finite_time(point.t, "trajectory point")?;
        ensure_finite_coords(&point)?;
        if let Some(last) = self.points.last()
            && last.t >= point.t
        {
            return Err(ShowError::ordering(format!(
                "new point at t={} must come after the trajectory end at t={}",
                point.t, last.t
            )));
        }
        self.points.push(point);
        Ok(())
    }

    pub fn points(&self) -> &[Point4D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time of the last point, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.points.last().map(|p| p.t)
    }

    /// Skybrush representation with every number rounded to `precision`
    /// decimal digits.
    pub fn to_document(&self, precision: u32) -> TrajectoryDocument {
        let r = |v: f64| round_to(v, precision);
        TrajectoryDocument {
            points: self
                .points
                .iter()
                .map(|p| TrajectoryPoint(r(p.t), [r(p.x), r(p.y), r(p.z)], Vec::new()))
                .collect(),
            version: FORMAT_VERSION,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/trajectory.rs"]
mod tests;
