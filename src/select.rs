use std::cmp::Ordering;

use crate::scene::model::Region;

/// Which axis decides frame order first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPriority {
    /// Top to bottom, then left to right.
    #[default]
    Y,
    /// Left to right, then top to bottom.
    X,
}

/// Signed Y-priority comparison: `a.y - b.y`, or `a.x - b.x` on equal `y`.
pub fn compare_priority_y(a: &Region, b: &Region) -> f64 {
    if a.y() == b.y() {
        a.x() - b.x()
    } else {
        a.y() - b.y()
    }
}

/// Signed X-priority comparison: `a.x - b.x`, or `a.y - b.y` on equal `x`.
pub fn compare_priority_x(a: &Region, b: &Region) -> f64 {
    if a.x() == b.x() {
        a.y() - b.y()
    } else {
        a.x() - b.x()
    }
}

impl SortPriority {
    /// Signed comparison for this priority.
    pub fn compare(self, a: &Region, b: &Region) -> f64 {
        match self {
            Self::Y => compare_priority_y(a, b),
            Self::X => compare_priority_x(a, b),
        }
    }

    /// [`Ordering`] view of [`Self::compare`]; NaN deltas compare equal.
    pub fn ordering(self, a: &Region, b: &Region) -> Ordering {
        self.compare(a, b)
            .partial_cmp(&0.0)
            .unwrap_or(Ordering::Equal)
    }
}

/// Keep frame regions only, in `priority` order. Equal keys keep their input order.
pub fn select_frames(regions: &[Region], priority: SortPriority) -> Vec<Region> {
    let mut frames: Vec<Region> = regions.iter().filter(|r| r.is_frame()).cloned().collect();
    frames.sort_by(|a, b| priority.ordering(a, b));
    frames
}

#[cfg(test)]
#[path = "../tests/unit/select.rs"]
mod tests;
