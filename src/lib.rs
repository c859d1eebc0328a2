//! Placement of images, video frames and canvases inside a container.
//!
//! Seven rules (cover, contain, four anchored corners, center) with an
//! optional uniform scale. Pure geometry, no allocations in the core,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`placement`] — Placement rules, requests and the seven strategies
//! - [`geometry`] — `Size`, `Coords` and the `Pos` result
//! - [`source`] — Source kinds and the size provider traits
//! - [`style`] — Absolute-positioning output for computed placements
//! - `attrs` — Settings from `data-*` attributes (feature `attrs`)
//! - `svg` — SVG visualization (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod geometry;
pub mod placement;
pub mod source;
pub mod style;

#[cfg(feature = "attrs")]
pub mod attrs;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use geometry::{Coords, Pos, Size};
pub use placement::{
    Compat, ContainAxis, Container, OffsetBasis, PlacementError, PlacementRequest, PlacementRule,
    compute_position,
};
pub use source::{ClientSize, IntrinsicSize, Source};
pub use style::{AbsoluteStyle, StyleTarget, apply_position};
