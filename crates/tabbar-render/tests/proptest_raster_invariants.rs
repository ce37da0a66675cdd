//! Property-based invariant tests for scene rasterization and hit testing.
//!
//! 1. Rasterizing never panics, whatever the canvas size.
//! 2. Each segment covers one contiguous run of columns within a bar row.
//! 3. Segment hits only occur inside the bar area.
//! 4. Every segment target resolves to an identity from the scene, tagged
//!    with the scene's generation.
//! 5. Segment cells carry the color of the row they were drawn from.

use std::collections::HashMap;

use proptest::prelude::*;
use tabbar_core::{Color, Row, Size};
use tabbar_layout::layout;
use tabbar_render::{
    ClickTarget, HitRegion, Rasterizer, Scene, SceneConfig, Theme, build_scene,
};

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((0usize..5, -500i32..=500, 1u8..=255), 0..24).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (cat, v, shade))| {
                Row::new(
                    format!("c{cat}"),
                    f64::from(v),
                    Color::rgb(shade, 0, 0),
                    format!("r{i}"),
                )
            })
            .collect()
    })
}

fn scene_for(rows: &[Row], generation: u64) -> Scene {
    build_scene(&layout(rows), &Theme::default(), &SceneConfig::default(), generation)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. No panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rasterize_any_size(rows in rows_strategy(), w in 0u16..120, h in 0u16..40) {
        let scene = scene_for(&rows, 1);
        let canvas = Rasterizer::new().rasterize(&scene, Size::new(w, h));
        prop_assert_eq!(canvas.buffer().width(), w);
        prop_assert_eq!(canvas.buffer().height(), h);
        let _ = canvas.to_text();
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Contiguous segment runs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn segment_runs_are_contiguous(rows in rows_strategy(), w in 20u16..100, h in 1u16..30) {
        let scene = scene_for(&rows, 1);
        let canvas = Rasterizer::new().rasterize(&scene, Size::new(w, h));
        for y in 0..h {
            let mut last_col: HashMap<u32, u16> = HashMap::new();
            for x in 0..w {
                if let HitRegion::Segment(i) = canvas.region_at(x, y) {
                    if let Some(prev) = last_col.insert(i, x) {
                        prop_assert_eq!(prev + 1, x, "segment {} split on row {}", i, y);
                    }
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Segments stay in the bar area
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn segment_hits_inside_bar_area(rows in rows_strategy(), w in 0u16..100, h in 0u16..30) {
        let scene = scene_for(&rows, 1);
        let canvas = Rasterizer::new().rasterize(&scene, Size::new(w, h));
        let area = canvas.bar_area();
        for y in 0..h {
            for x in 0..w {
                if matches!(canvas.region_at(x, y), HitRegion::Segment(_)) {
                    prop_assert!(area.contains(x, y), "segment cell ({}, {}) outside {:?}", x, y, area);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Targets resolve to scene identities
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn targets_resolve_to_scene_identities(
        rows in rows_strategy(),
        generation in any::<u64>(),
        w in 10u16..80,
        h in 1u16..20,
    ) {
        let scene = scene_for(&rows, generation);
        let canvas = Rasterizer::new().rasterize(&scene, Size::new(w, h));
        for y in 0..h {
            for x in 0..w {
                match canvas.target_at(x, y) {
                    Some(ClickTarget::Segment { generation: g, identity }) => {
                        prop_assert_eq!(g, generation);
                        prop_assert!(scene.segments().any(|s| s.identity == identity));
                    }
                    Some(ClickTarget::Background { generation: g }) => {
                        prop_assert_eq!(g, generation);
                    }
                    None => {}
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Colors follow rows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn segment_cells_use_row_color(rows in rows_strategy(), w in 10u16..80, h in 1u16..20) {
        let config = SceneConfig { show_axis: false, ..SceneConfig::default() };
        let scene = build_scene(&layout(&rows), &Theme::default(), &config, 1);
        let colors: Vec<Color> = scene.segments().map(|s| s.color).collect();
        let canvas = Rasterizer::new().rasterize(&scene, Size::new(w, h));
        for y in 0..h {
            for x in 0..w {
                if let HitRegion::Segment(i) = canvas.region_at(x, y) {
                    let cell = canvas.buffer().get(x, y).copied();
                    prop_assert_eq!(cell.map(|c| c.fg), colors.get(i as usize).copied());
                }
            }
        }
    }
}
