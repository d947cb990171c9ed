use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned box in image pixel coordinates, origin top-left.
///
/// Coordinates are signed so that gaps between neighbouring boxes (which may
/// be negative when boxes overlap) can be expressed without casts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `height / width`; a zero-width box reports 1.0.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 {
            1.0
        } else {
            f64::from(self.height) / f64::from(self.width)
        }
    }

    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        f64::from(self.y) + f64::from(self.height) / 2.0
    }

    #[inline]
    pub fn right_edge(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom_edge(&self) -> i32 {
        self.y + self.height
    }

    /// Shift the box by `(dx, dy)`, keeping its size.
    #[inline]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

impl From<(i32, i32, i32, i32)> for BoundingBox {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }
}

/// Outcome of a single plate detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlateStatus {
    /// A group with the given member count was selected.
    Detected(usize),
    NotDetected,
    /// The input could not be decoded.
    LoadFailed,
}

impl PlateStatus {
    /// Status for a selected group; an empty group means nothing was found.
    pub fn from_group(group: &[BoundingBox]) -> Self {
        if group.is_empty() {
            PlateStatus::NotDetected
        } else {
            PlateStatus::Detected(group.len())
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, PlateStatus::Detected(_))
    }
}

impl fmt::Display for PlateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateStatus::Detected(n) => write!(f, "Detected ({n})"),
            PlateStatus::NotDetected => f.write_str("Not Detected"),
            PlateStatus::LoadFailed => f.write_str("Error de carga"),
        }
    }
}
