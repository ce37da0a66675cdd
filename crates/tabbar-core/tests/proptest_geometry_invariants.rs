//! Property-based invariant tests for the cell geometry used by hit testing.
//!
//! 1. Intersection is commutative.
//! 2. Intersection result fits within both inputs.
//! 3. Contains agrees with intersection against a 1x1 rect.
//! 4. No panics on extreme u16 values.

use proptest::prelude::*;
use tabbar_core::geometry::Rect;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Intersection is commutative
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intersection_commutative(a in small_rect_strategy(), b in small_rect_strategy()) {
        prop_assert_eq!(
            a.intersection(&b),
            b.intersection(&a),
            "intersection is not commutative: a={:?}, b={:?}",
            a, b
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Intersection result fits within both inputs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intersection_fits_within_both(a in small_rect_strategy(), b in small_rect_strategy()) {
        let inter = a.intersection(&b);
        if !inter.is_empty() {
            prop_assert!(inter.x >= a.x && inter.x >= b.x);
            prop_assert!(inter.y >= a.y && inter.y >= b.y);
            prop_assert!(inter.right() <= a.right() && inter.right() <= b.right());
            prop_assert!(inter.bottom() <= a.bottom() && inter.bottom() <= b.bottom());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Contains agrees with intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_agrees_with_intersection(
        a in small_rect_strategy(),
        px in 0u16..=1100,
        py in 0u16..=1100,
    ) {
        let inter = a.intersection(&Rect::new(px, py, 1, 1));
        prop_assert_eq!(
            a.contains(px, py),
            !inter.is_empty(),
            "contains({},{}) disagrees with intersection for {:?}",
            px, py, a
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. No panics on extreme values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extreme_values_do_not_panic(a in rect_strategy(), b in rect_strategy(), px: u16, py: u16) {
        let _ = a.intersection(&b);
        let _ = a.contains(px, py);
        prop_assert!(a.right() >= a.x);
        prop_assert!(a.bottom() >= a.y);
    }
}
