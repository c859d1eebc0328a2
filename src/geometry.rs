//! Size and rectangle records in linear units.

use num_traits::Float;

/// Width × height in linear units (pixels in the common case).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in linear units.
    pub width: f64,
    /// Height in linear units.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both axes by the same factor.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Whether either axis is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Both axes finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
        }
    }
}

/// Top-left offset and rendered size of a placed source, in container space.
///
/// Offsets may be negative and the rectangle may extend past the container:
/// clipping is left to the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    /// Left edge relative to the container.
    pub x: f64,
    /// Top edge relative to the container.
    pub y: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl Coords {
    /// Create new coordinates.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rendered size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether every field is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Snap every field to the nearest whole unit (half away from zero).
    pub fn round(self) -> Self {
        Self {
            x: Float::round(self.x),
            y: Float::round(self.y),
            width: Float::round(self.width),
            height: Float::round(self.height),
        }
    }
}

/// Final placement: computed coordinates plus the source's intrinsic size.
///
/// `source_width`/`source_height` are the pre-scale dimensions, so
/// `width / source_width` is the effective scale applied.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    /// Left edge relative to the container.
    pub x: f64,
    /// Top edge relative to the container.
    pub y: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
    /// Intrinsic source width.
    pub source_width: f64,
    /// Intrinsic source height.
    pub source_height: f64,
}

impl Pos {
    /// Merge computed coordinates with the intrinsic source size.
    pub fn new(coords: Coords, source: Size) -> Self {
        Self {
            x: coords.x,
            y: coords.y,
            width: coords.width,
            height: coords.height,
            source_width: source.width,
            source_height: source.height,
        }
    }

    /// The computed render geometry.
    pub fn coords(&self) -> Coords {
        Coords::new(self.x, self.y, self.width, self.height)
    }

    /// The intrinsic source size.
    pub fn source(&self) -> Size {
        Size::new(self.source_width, self.source_height)
    }

    /// Horizontal and vertical scale relative to the intrinsic size.
    ///
    /// Returns `None` when the source has a zero dimension.
    pub fn effective_scale(&self) -> Option<(f64, f64)> {
        if self.source().is_empty() {
            return None;
        }
        Some((
            self.width / self.source_width,
            self.height / self.source_height,
        ))
    }

    /// Snap the render geometry to whole units. Source dimensions are kept.
    pub fn round(self) -> Self {
        Self::new(self.coords().round(), self.source())
    }
}
