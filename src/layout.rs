//! Cosmetic layout parameters: background shapes, scattered card slots,
//! animation stagger and the timeline drift.
//!
//! Randomness only comes from a seeded generator so the same seed always
//! yields the same decoration, on the server and after hydration.

use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const HERO_SEED: u64 = 0x5eed_cafe;
pub const HERO_SHAPES: usize = 8;
pub const TIMELINE_MAX_SHIFT: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorShape {
    pub size: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration: f64,
}

impl DecorShape {
    pub fn style(&self) -> String {
        format!(
            "width: {:.0}px; height: {:.0}px; left: {:.1}%; top: {:.1}%; --drift-x: {:.0}px; --drift-y: {:.0}px; animation-duration: {:.1}s;",
            self.size, self.size, self.left_pct, self.top_pct, self.drift_x, self.drift_y, self.duration
        )
    }
}

pub fn decor_shapes(seed: u64, count: usize) -> Vec<DecorShape> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| DecorShape {
            size: rng.random_range(100.0..300.0),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            drift_x: rng.random_range(-50.0..50.0),
            drift_y: rng.random_range(-50.0..50.0),
            duration: rng.random_range(10.0..20.0),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterSlot {
    pub top_pct: f64,
    pub side: Side,
    pub offset_pct: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl ScatterSlot {
    const fn new(top_pct: f64, side: Side, offset_pct: f64, rotation: f64, scale: f64) -> Self {
        Self {
            top_pct,
            side,
            offset_pct,
            rotation,
            scale,
        }
    }

    pub fn style(&self) -> String {
        let side = match self.side {
            Side::Left => "left",
            Side::Right => "right",
        };
        format!(
            "top: {}%; {side}: {}%; --rest-rotate: {}deg; --rest-scale: {};",
            self.top_pct, self.offset_pct, self.rotation, self.scale
        )
    }
}

const PROJECT_SLOTS: [ScatterSlot; 4] = [
    ScatterSlot::new(5.0, Side::Left, 8.0, -3.0, 1.1),
    ScatterSlot::new(15.0, Side::Right, 12.0, 5.0, 0.9),
    ScatterSlot::new(45.0, Side::Left, 5.0, -2.0, 1.0),
    ScatterSlot::new(60.0, Side::Right, 8.0, 4.0, 1.05),
];

const SKILL_SLOTS: [ScatterSlot; 5] = [
    ScatterSlot::new(10.0, Side::Left, 10.0, -5.0, 1.0),
    ScatterSlot::new(15.0, Side::Right, 15.0, 8.0, 1.0),
    ScatterSlot::new(45.0, Side::Left, 5.0, -3.0, 1.0),
    ScatterSlot::new(60.0, Side::Right, 10.0, 6.0, 1.0),
    ScatterSlot::new(25.0, Side::Left, 45.0, -2.0, 1.0),
];

pub fn project_slot(index: usize) -> ScatterSlot {
    PROJECT_SLOTS[index % PROJECT_SLOTS.len()]
}

pub fn skill_slot(index: usize) -> ScatterSlot {
    SKILL_SLOTS[index % SKILL_SLOTS.len()]
}

/// Animation delay in seconds for the `index`th item of a staggered list.
pub fn stagger(index: usize, step: f64, base: f64) -> f64 {
    base + index as f64 * step
}

pub fn delay_style(seconds: f64) -> String {
    format!("animation-delay: {seconds:.2}s;")
}

/// Horizontal shift of the timeline strip as its top edge scrolls through the
/// viewport.
pub fn timeline_shift(viewport_height: f64, top: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - top) / viewport_height).clamp(0.0, 1.0);
    -progress * TIMELINE_MAX_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decor_is_deterministic() {
        assert_eq!(decor_shapes(7, 8), decor_shapes(7, 8));
        assert_ne!(decor_shapes(7, 8), decor_shapes(8, 8));
        assert!(decor_shapes(7, 0).is_empty());
    }

    #[test]
    fn test_decor_ranges() {
        for shape in decor_shapes(HERO_SEED, 64) {
            assert!((100.0..300.0).contains(&shape.size));
            assert!((0.0..100.0).contains(&shape.left_pct));
            assert!((0.0..100.0).contains(&shape.top_pct));
            assert!((-50.0..50.0).contains(&shape.drift_x));
            assert!((-50.0..50.0).contains(&shape.drift_y));
            assert!((10.0..20.0).contains(&shape.duration));
        }
    }

    #[test]
    fn test_slots_cycle() {
        assert_eq!(project_slot(0), project_slot(4));
        assert_eq!(project_slot(1).side, Side::Right);
        assert_eq!(skill_slot(5), skill_slot(0));
        assert_eq!(skill_slot(4).offset_pct, 45.0);
        assert!(project_slot(0).style().starts_with("top: 5%; left: 8%;"));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 0.2, 0.3), 0.3);
        assert!((stagger(3, 0.1, 0.7) - 1.0).abs() < 1e-9);
        assert_eq!(delay_style(0.5), "animation-delay: 0.50s;");
    }

    #[test]
    fn test_timeline_shift_clamps() {
        // still below the fold
        assert_eq!(timeline_shift(800.0, 900.0), 0.0);
        assert_eq!(timeline_shift(800.0, 400.0), -100.0);
        assert_eq!(timeline_shift(800.0, -50.0), -TIMELINE_MAX_SHIFT);
        assert_eq!(timeline_shift(0.0, 10.0), 0.0);
    }
}
