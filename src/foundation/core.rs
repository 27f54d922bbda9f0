use std::fmt;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Stable identifier of a host node (page, frame, rectangle, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque white, the default canvas background.
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Straight-alpha source-over blend of `self` onto `dst` (also straight alpha).
    pub fn over(self, dst: [u8; 4]) -> [u8; 4] {
        let sa = u32::from(self.a);
        if sa == 255 {
            return [self.r, self.g, self.b, self.a];
        }
        if sa == 0 {
            return dst;
        }
        // Weights are scaled by 255 * 255.
        let src_w = sa * 255;
        let dst_w = u32::from(dst[3]) * (255 - sa);
        let out_w = src_w + dst_w;
        let blend = |s: u8, d: u8| {
            ((u32::from(s) * src_w + u32::from(d) * dst_w + out_w / 2) / out_w) as u8
        };
        [
            blend(self.r, dst[0]),
            blend(self.g, dst[1]),
            blend(self.b, dst[2]),
            ((out_w + 127) / 255).min(255) as u8,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
