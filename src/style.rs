//! Absolute-positioning output for a computed placement.

use core::fmt;

use crate::geometry::Pos;
use crate::placement::{PlacementError, PlacementRequest};

/// Absolute positioning for a placed element, in linear units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AbsoluteStyle {
    /// Offset from the container's left edge.
    pub left: f64,
    /// Offset from the container's top edge.
    pub top: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl From<Pos> for AbsoluteStyle {
    fn from(pos: Pos) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            width: pos.width,
            height: pos.height,
        }
    }
}

/// Renders CSS declarations:
/// `position: absolute; left: 10px; top: 0px; width: 80px; height: 40px;`
impl fmt::Display for AbsoluteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Something that can take absolute positioning, e.g. a rendered element.
pub trait StyleTarget {
    /// Write position and size into the target.
    fn apply_style(&mut self, style: &AbsoluteStyle);
}

impl StyleTarget for AbsoluteStyle {
    fn apply_style(&mut self, style: &AbsoluteStyle) {
        *self = *style;
    }
}

/// Compute `request` and write the result into `target`.
///
/// On error the target is left untouched.
pub fn apply_position<T: StyleTarget + ?Sized>(
    request: &PlacementRequest<'_>,
    target: &mut T,
) -> Result<Pos, PlacementError> {
    let pos = request.compute()?;
    target.apply_style(&AbsoluteStyle::from(pos));
    Ok(pos)
}
