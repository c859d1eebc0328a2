//! Parsed attribute settings and request construction.

use alloc::string::String;

use crate::placement::{Container, PlacementRequest, PlacementRule};
use crate::source::{ClientSize, IntrinsicSize};
use crate::Size;

/// Placement settings read from `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Attributes {
    /// Placement rule (`data-rule`).
    pub rule: Option<PlacementRule>,
    /// Uniform scale (`data-scale`).
    pub scale: Option<f64>,
    /// Explicit container width (`data-width`).
    pub width: Option<f64>,
    /// Explicit container height (`data-height`).
    pub height: Option<f64>,
    /// Media location (`data-src`), for the caller's loader.
    pub src: Option<String>,
}

impl Attributes {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit container size, when both `data-width` and `data-height` are set.
    pub fn explicit_size(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(Size::new(w, h)),
            _ => None,
        }
    }

    /// Build a request for a loaded `source`.
    ///
    /// Uses the explicit size when both dimensions were given, otherwise
    /// reads `container` at computation time. Returns `None` without a
    /// valid `data-rule`.
    pub fn to_request<'a>(
        &self,
        source: &'a dyn IntrinsicSize,
        container: &'a dyn ClientSize,
    ) -> Option<PlacementRequest<'a>> {
        let rule = self.rule?;
        let mut request = PlacementRequest::with_container(source, rule, container);
        if let Some(size) = self.explicit_size() {
            request.container = Container::Explicit(size);
        }
        if let Some(scale) = self.scale {
            request = request.scale(scale);
        }
        Some(request)
    }
}
