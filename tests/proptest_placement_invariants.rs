//! Property-based invariant tests for placement rules.
//!
//! 1. Sizes are non-negative for positive inputs, for every rule.
//! 2. Cover covers the container on both axes and preserves aspect ratio.
//! 3. Contain fits inside the container, preserves aspect ratio, and matches
//!    the container exactly on one axis.
//! 4. Center is symmetric (rendered basis at any scale, intrinsic at scale 1).
//! 5. Anchored rules put the source flush against their corner.
//! 6. Computation is deterministic.
//! 7. Intrinsic source size is echoed unchanged.

use proptest::prelude::*;
use zenplace::{Compat, PlacementRequest, PlacementRule, Pos, Size};

const EPS: f64 = 1e-9;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dim() -> impl Strategy<Value = f64> {
    1.0f64..5000.0
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (dim(), dim()).prop_map(|(w, h)| Size::new(w, h))
}

fn scale_strategy() -> impl Strategy<Value = f64> {
    0.05f64..8.0
}

fn rule_strategy() -> impl Strategy<Value = PlacementRule> {
    proptest::sample::select(PlacementRule::ALL.to_vec())
}

fn compute(container: Size, source: Size, rule: PlacementRule, scale: f64, compat: Compat) -> Pos {
    PlacementRequest::with_container(&source, rule, &container)
        .scale(scale)
        .compat(compat)
        .compute()
        .expect("valid inputs must place")
}

/// Relative comparison, scaled to the magnitude of the operands.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

fn same_aspect(pos: &Pos) -> bool {
    close(pos.width * pos.source_height, pos.height * pos.source_width)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Non-negative sizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sizes_non_negative(
        container in size_strategy(),
        source in size_strategy(),
        rule in rule_strategy(),
        scale in scale_strategy(),
    ) {
        for compat in [Compat::STANDARD, Compat::LEGACY] {
            let pos = compute(container, source, rule, scale, compat);
            prop_assert!(pos.width >= 0.0 && pos.height >= 0.0);
            prop_assert!(pos.coords().is_finite());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Cover
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cover_covers_both_axes(
        container in size_strategy(),
        source in size_strategy(),
        scale in 1.0f64..8.0,
    ) {
        let pos = compute(container, source, PlacementRule::Cover, scale, Compat::STANDARD);
        prop_assert!(pos.width >= container.width * (1.0 - EPS));
        prop_assert!(pos.height >= container.height * (1.0 - EPS));
        prop_assert!(same_aspect(&pos));
        prop_assert!(pos.x <= EPS * container.width && pos.y <= EPS * container.height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Contain
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contain_fits_inside(container in size_strategy(), source in size_strategy()) {
        let pos = compute(container, source, PlacementRule::Contain, 1.0, Compat::STANDARD);
        prop_assert!(pos.width <= container.width * (1.0 + EPS));
        prop_assert!(pos.height <= container.height * (1.0 + EPS));
        prop_assert!(same_aspect(&pos));
        prop_assert!(pos.width == container.width || pos.height == container.height);
        prop_assert!(pos.x >= -EPS * container.width && pos.y >= -EPS * container.height);
    }

    #[test]
    fn contain_driving_axis_matches_scaled_container(
        container in size_strategy(),
        source in size_strategy(),
        scale in scale_strategy(),
    ) {
        for compat in [Compat::STANDARD, Compat::LEGACY] {
            let c = Size::new(container.width, container.height);
            let pos = compute(c, source, PlacementRule::Contain, scale, compat);
            prop_assert!(
                pos.width == c.width * scale || pos.height == c.height * scale
            );
            prop_assert!(same_aspect(&pos));
        }
    }

    #[test]
    fn contain_square_container_presets_agree(side in dim(), source in size_strategy()) {
        let c = Size::new(side, side);
        let a = compute(c, source, PlacementRule::Contain, 1.0, Compat::STANDARD);
        let b = compute(c, source, PlacementRule::Contain, 1.0, Compat {
            explicit_height_from_width: false,
            ..Compat::LEGACY
        });
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Center symmetry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn center_symmetric_rendered(
        container in size_strategy(),
        source in size_strategy(),
        scale in scale_strategy(),
    ) {
        let pos = compute(container, source, PlacementRule::Center, scale, Compat::STANDARD);
        prop_assert!(close(pos.x + pos.width / 2.0, container.width / 2.0));
        prop_assert!(close(pos.y + pos.height / 2.0, container.height / 2.0));
    }

    #[test]
    fn center_symmetric_intrinsic_at_unit_scale(
        container in size_strategy(),
        source in size_strategy(),
    ) {
        let compat = Compat { explicit_height_from_width: false, ..Compat::LEGACY };
        let pos = compute(container, source, PlacementRule::Center, 1.0, compat);
        prop_assert!(close(pos.x + pos.width / 2.0, container.width / 2.0));
        prop_assert!(close(pos.y + pos.height / 2.0, container.height / 2.0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Anchored corners
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn anchored_flush_with_corner(
        container in size_strategy(),
        source in size_strategy(),
        scale in scale_strategy(),
    ) {
        let tl = compute(container, source, PlacementRule::TopLeft, scale, Compat::STANDARD);
        prop_assert_eq!((tl.x, tl.y), (0.0, 0.0));

        let tr = compute(container, source, PlacementRule::TopRight, scale, Compat::STANDARD);
        prop_assert!(close(tr.x + tr.width, container.width));
        prop_assert_eq!(tr.y, 0.0);

        let bl = compute(container, source, PlacementRule::BottomLeft, scale, Compat::STANDARD);
        prop_assert_eq!(bl.x, 0.0);
        prop_assert!(close(bl.y + bl.height, container.height));

        let br = compute(container, source, PlacementRule::BottomRight, scale, Compat::STANDARD);
        prop_assert!(close(br.x + br.width, container.width));
        prop_assert!(close(br.y + br.height, container.height));
    }

    #[test]
    fn anchored_size_is_scaled_source(
        container in size_strategy(),
        source in size_strategy(),
        scale in scale_strategy(),
    ) {
        for rule in [
            PlacementRule::TopLeft,
            PlacementRule::TopRight,
            PlacementRule::BottomLeft,
            PlacementRule::BottomRight,
            PlacementRule::Center,
        ] {
            for compat in [Compat::STANDARD, Compat::LEGACY] {
                let pos = compute(container, source, rule, scale, compat);
                prop_assert_eq!(pos.width, source.width * scale);
                prop_assert_eq!(pos.height, source.height * scale);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–7. Determinism and echoed source size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn deterministic_and_echoes_source(
        container in size_strategy(),
        source in size_strategy(),
        rule in rule_strategy(),
        scale in scale_strategy(),
    ) {
        let a = compute(container, source, rule, scale, Compat::STANDARD);
        let b = compute(container, source, rule, scale, Compat::STANDARD);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.source(), source);
    }
}
