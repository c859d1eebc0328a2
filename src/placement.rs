//! Placement computation: where and how large a source sits in its container.
//!
//! A [`PlacementRequest`] pairs a source (anything implementing
//! [`IntrinsicSize`]) with a container and a [`PlacementRule`]. Computing it
//! resolves both sizes and dispatches to one of seven pure strategies.
//! Pure geometry, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenplace::{PlacementRequest, PlacementRule, Source};
//!
//! let photo = Source::image(100.0, 50.0);
//! let pos = PlacementRequest::with_size(&photo, PlacementRule::Cover, 200.0, 100.0)
//!     .compute()
//!     .unwrap();
//!
//! assert_eq!((pos.width, pos.height), (200.0, 100.0));
//! assert_eq!((pos.x, pos.y), (0.0, 0.0));
//! assert_eq!((pos.source_width, pos.source_height), (100.0, 50.0));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::geometry::{Coords, Pos, Size};
use crate::source::{ClientSize, IntrinsicSize};

/// How to place a source inside its container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PlacementRule {
    /// Fill the container on both axes, preserving aspect ratio.
    /// Overflow on one axis is centered.
    Cover,
    /// Fit inside the container, preserving aspect ratio.
    /// Leftover space on one axis is split evenly (letterboxing).
    Contain,
    /// Scaled source anchored at the top-left corner.
    TopLeft,
    /// Scaled source anchored at the top-right corner.
    TopRight,
    /// Scaled source anchored at the bottom-left corner.
    BottomLeft,
    /// Scaled source anchored at the bottom-right corner.
    BottomRight,
    /// Scaled source centered on both axes.
    Center,
}

impl PlacementRule {
    /// Every rule, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Cover,
        Self::Contain,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Center,
    ];

    /// Canonical kebab-case name (`"top-left"`, `"cover"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Center => "center",
        }
    }

    /// Parse a rule name. Surrounding whitespace and ASCII case are ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether the rule derives its size from the container's aspect ratio.
    pub const fn is_aspect_fit(self) -> bool {
        matches!(self, Self::Cover | Self::Contain)
    }

    /// Run this rule's strategy without validating inputs.
    ///
    /// Zero source dimensions make `Cover` and `Contain` divide by zero and
    /// return non-finite values; [`PlacementRequest::compute`] rejects those
    /// inputs before getting here.
    pub fn place(self, container: Size, source: Size, scale: f64, compat: Compat) -> Coords {
        match self {
            Self::Cover => cover(container, source, scale),
            Self::Contain => contain(container, source, scale, compat.contain_axis),
            Self::TopLeft => top_left(source, scale),
            Self::TopRight => top_right(container, source, scale, compat.offsets),
            Self::BottomLeft => bottom_left(container, source, scale, compat.offsets),
            Self::BottomRight => bottom_right(container, source, scale, compat.offsets),
            Self::Center => center(container, source, scale, compat.offsets),
        }
    }
}

impl fmt::Display for PlacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementRule {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(PlacementError::UnsupportedRule)
    }
}

/// Which size the anchored and centered rules subtract when computing offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetBasis {
    /// Offsets use the rendered (scaled) size, so a `BottomRight` source
    /// touches the bottom-right corner at any scale.
    #[default]
    Rendered,
    /// Offsets use the intrinsic (unscaled) size while the rendered size is
    /// scaled. Matches the legacy placement behavior; identical to
    /// [`Rendered`](Self::Rendered) at scale 1.
    Intrinsic,
}

/// How `Contain` picks the axis that drives the scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainAxis {
    /// Compare source and container aspect ratios, so the result always fits
    /// on both axes.
    #[default]
    AspectRatio,
    /// Width-driven for landscape sources, height-driven for portrait and
    /// square ones, whatever the container shape. Legacy behavior; a wide
    /// source in a wider container can overflow vertically.
    Orientation,
}

/// Compatibility switches for legacy placement behavior.
///
/// [`Compat::STANDARD`] is the default. [`Compat::LEGACY`] reproduces the
/// legacy arithmetic exactly, including its quirks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compat {
    /// For [`Container::Explicit`], use the given width as the height too.
    pub explicit_height_from_width: bool,
    /// Offset arithmetic for anchored and centered rules.
    pub offsets: OffsetBasis,
    /// Driving axis selection for `Contain`.
    pub contain_axis: ContainAxis,
}

impl Compat {
    /// Corrected behavior.
    pub const STANDARD: Self = Self {
        explicit_height_from_width: false,
        offsets: OffsetBasis::Rendered,
        contain_axis: ContainAxis::AspectRatio,
    };

    /// Legacy behavior, quirks included.
    pub const LEGACY: Self = Self {
        explicit_height_from_width: true,
        offsets: OffsetBasis::Intrinsic,
        contain_axis: ContainAxis::Orientation,
    };
}

impl Default for Compat {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Where the container size comes from.
#[derive(Copy, Clone)]
pub enum Container<'a> {
    /// Caller-supplied dimensions.
    Explicit(Size),
    /// A live container, read when the placement is computed.
    Element(&'a dyn ClientSize),
}

impl Container<'_> {
    /// Resolve the container size now.
    pub fn resolve(&self, compat: Compat) -> Size {
        match *self {
            Self::Explicit(size) if compat.explicit_height_from_width => {
                Size::new(size.width, size.width)
            }
            Self::Explicit(size) => size,
            Self::Element(element) => element.client_size(),
        }
    }
}

impl fmt::Debug for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(size) => f.debug_tuple("Explicit").field(size).finish(),
            Self::Element(_) => f.write_str("Element(<dyn ClientSize>)"),
        }
    }
}

/// A single placement computation's input.
///
/// # Example
///
/// ```
/// use zenplace::{PlacementRequest, PlacementRule, Size, Source};
///
/// // Any `ClientSize` works as a container; `Size` is the simplest.
/// let frame = Size::new(200.0, 100.0);
/// let clip = Source::video(40.0, 20.0);
///
/// let pos = PlacementRequest::with_container(&clip, PlacementRule::TopLeft, &frame)
///     .scale(2.0)
///     .compute()
///     .unwrap();
///
/// assert_eq!((pos.width, pos.height), (80.0, 40.0));
/// ```
#[derive(Copy, Clone)]
pub struct PlacementRequest<'a> {
    /// Intrinsic size provider, read once per computation.
    pub source: &'a dyn IntrinsicSize,
    /// Container size, explicit or live.
    pub container: Container<'a>,
    /// Placement rule to apply.
    pub rule: PlacementRule,
    /// Uniform scale factor (default 1.0).
    pub scale: f64,
    /// Compatibility switches (default [`Compat::STANDARD`]).
    pub compat: Compat,
}

impl fmt::Debug for PlacementRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementRequest")
            .field("source", &format_args!("<dyn IntrinsicSize>"))
            .field("container", &self.container)
            .field("rule", &self.rule)
            .field("scale", &self.scale)
            .field("compat", &self.compat)
            .finish()
    }
}

impl<'a> PlacementRequest<'a> {
    /// Place `source` in a container of explicit dimensions.
    pub fn with_size(
        source: &'a dyn IntrinsicSize,
        rule: PlacementRule,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            source,
            container: Container::Explicit(Size::new(width, height)),
            rule,
            scale: 1.0,
            compat: Compat::STANDARD,
        }
    }

    /// Place `source` in a live container, read at computation time.
    pub fn with_container(
        source: &'a dyn IntrinsicSize,
        rule: PlacementRule,
        container: &'a dyn ClientSize,
    ) -> Self {
        Self {
            source,
            container: Container::Element(container),
            rule,
            scale: 1.0,
            compat: Compat::STANDARD,
        }
    }

    /// Set the uniform scale factor (default 1.0).
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set compatibility switches.
    pub fn compat(mut self, compat: Compat) -> Self {
        self.compat = compat;
        self
    }

    /// Compute the placement.
    pub fn compute(&self) -> Result<Pos, PlacementError> {
        self.compute_in().map(|(pos, _)| pos)
    }

    /// Compute the placement and also return the container size it was
    /// computed against.
    ///
    /// Live containers are read exactly once, so the returned size is the one
    /// the placement used.
    pub fn compute_in(&self) -> Result<(Pos, Size), PlacementError> {
        // Step 1: Resolve sizes. Both are read once, here.
        let container = self.container.resolve(self.compat);
        let source = self.source.intrinsic_size();

        // Step 2: Reject inputs the strategies can't handle.
        if let Err(e) = validate(self.rule, container, source, self.scale) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                rule = self.rule.as_str(),
                scale = self.scale,
                container_width = container.width,
                container_height = container.height,
                source_width = source.width,
                source_height = source.height,
                error = %e,
                "placement rejected"
            );
            return Err(e);
        }

        // Step 3: Dispatch.
        let coords = self.rule.place(container, source, self.scale, self.compat);

        // Step 4: Finite inputs can still overflow once scaled.
        if !coords.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                rule = self.rule.as_str(),
                scale = self.scale,
                container_width = container.width,
                container_height = container.height,
                "placement overflowed"
            );
            return Err(PlacementError::Overflow);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rule = self.rule.as_str(),
            scale = self.scale,
            container_width = container.width,
            container_height = container.height,
            source_width = source.width,
            source_height = source.height,
            x = coords.x,
            y = coords.y,
            width = coords.width,
            height = coords.height,
            "placement computed"
        );

        Ok((Pos::new(coords, source), container))
    }
}

/// Compute the placement for `request`.
pub fn compute_position(request: &PlacementRequest<'_>) -> Result<Pos, PlacementError> {
    request.compute()
}

/// Placement computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlacementError {
    /// Rule name is not one of the seven placement rules.
    UnsupportedRule,
    /// Scale is not a finite positive number.
    InvalidScale,
    /// A container or source dimension is negative or not finite.
    InvalidDimensions,
    /// `Cover` or `Contain` with a zero source width or height.
    ZeroSourceDimension,
    /// The placed rectangle is too large to represent as finite numbers.
    Overflow,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnsupportedRule => "unsupported placement rule",
            Self::InvalidScale => "scale must be finite and positive",
            Self::InvalidDimensions => "dimensions must be finite and non-negative",
            Self::ZeroSourceDimension => "source has a zero dimension; aspect ratio is undefined",
            Self::Overflow => "placement overflows the representable range",
        })
    }
}

impl core::error::Error for PlacementError {}

fn validate(
    rule: PlacementRule,
    container: Size,
    source: Size,
    scale: f64,
) -> Result<(), PlacementError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PlacementError::InvalidScale);
    }
    if !container.is_valid() || !source.is_valid() {
        return Err(PlacementError::InvalidDimensions);
    }
    if rule.is_aspect_fit() && source.is_empty() {
        return Err(PlacementError::ZeroSourceDimension);
    }
    Ok(())
}

// ============================================================================
// Strategies
// ============================================================================

/// Width-driven first; if that leaves the container's height uncovered,
/// drive by height instead. The comparison uses the unscaled container height.
fn cover(container: Size, source: Size, scale: f64) -> Coords {
    let mut width = container.width * scale;
    let mut height = width * (source.height / source.width);

    if height < container.height {
        height = container.height * scale;
        width = height * (source.width / source.height);
    }

    centered(container, width, height)
}

fn contain(container: Size, source: Size, scale: f64, axis: ContainAxis) -> Coords {
    // Ratios, not cross products, so large finite sizes don't overflow.
    // A zero container axis gives a zero-sized result on either branch.
    let width_driven = match axis {
        ContainAxis::AspectRatio => {
            source.width / source.height > container.width / container.height
        }
        ContainAxis::Orientation => source.width > source.height,
    };

    let (width, height) = if width_driven {
        let width = container.width * scale;
        (width, width * (source.height / source.width))
    } else {
        let height = container.height * scale;
        (height * (source.width / source.height), height)
    };

    centered(container, width, height)
}

fn top_left(source: Size, scale: f64) -> Coords {
    let rendered = source.scaled(scale);
    Coords::new(0.0, 0.0, rendered.width, rendered.height)
}

fn top_right(container: Size, source: Size, scale: f64, basis: OffsetBasis) -> Coords {
    let rendered = source.scaled(scale);
    let b = offset_basis(source, rendered, basis);
    Coords::new(container.width - b.width, 0.0, rendered.width, rendered.height)
}

fn bottom_left(container: Size, source: Size, scale: f64, basis: OffsetBasis) -> Coords {
    let rendered = source.scaled(scale);
    let b = offset_basis(source, rendered, basis);
    Coords::new(0.0, container.height - b.height, rendered.width, rendered.height)
}

fn bottom_right(container: Size, source: Size, scale: f64, basis: OffsetBasis) -> Coords {
    let rendered = source.scaled(scale);
    let b = offset_basis(source, rendered, basis);
    Coords::new(
        container.width - b.width,
        container.height - b.height,
        rendered.width,
        rendered.height,
    )
}

fn center(container: Size, source: Size, scale: f64, basis: OffsetBasis) -> Coords {
    let rendered = source.scaled(scale);
    let b = offset_basis(source, rendered, basis);
    Coords::new(
        (container.width - b.width) / 2.0,
        (container.height - b.height) / 2.0,
        rendered.width,
        rendered.height,
    )
}

/// Center a `width`×`height` rectangle in the container. Overflow goes negative.
fn centered(container: Size, width: f64, height: f64) -> Coords {
    Coords::new(
        (container.width - width) / 2.0,
        (container.height - height) / 2.0,
        width,
        height,
    )
}

fn offset_basis(source: Size, rendered: Size, basis: OffsetBasis) -> Size {
    match basis {
        OffsetBasis::Rendered => rendered,
        OffsetBasis::Intrinsic => source,
    }
}
