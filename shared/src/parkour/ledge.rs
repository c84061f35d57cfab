//! Ledge detection: find a flat step-up surface in front of the player with room to
//! stand on it.
//!
//! Probe sequence
//! 1. Up from [`LEDGE_START_Z_OFFSET`] above the feet, to find the ceiling.
//! 2. Forward just under the ceiling, in growing steps of [`LEDGE_FORWARD_STEP`].
//! 3. Down from the end of each clear forward probe; the hit is the ledge candidate.
//! 4. Up from the first accepted candidate, to check standing headroom.

use crate::{
    constants::{
        LEDGE_CEILING_BUFFER, LEDGE_FORWARD_ITERATIONS, LEDGE_FORWARD_STEP, LEDGE_HEADROOM_BUFFER,
        LEDGE_MIN_DOWN_DISTANCE, LEDGE_MIN_FLATNESS, LEDGE_MIN_UP_CLEARANCE, LEDGE_START_Z_OFFSET,
    },
    math::{Direction3, Point3, down, up},
    parkour::{
        context::DetectionContext,
        interaction::{Interaction, InteractionType},
    },
    settings::Thresholds,
};

/// Search for a ledge along `check_dir` whose height above the feet lies in
/// `[min_height, max_height]`.
pub fn detect_ledge(
    ctx: &DetectionContext<'_>,
    check_dir: Direction3,
    min_height: f32,
    max_height: f32,
) -> Option<Interaction> {
    let player = ctx.player_position;
    let max_up_check = (max_height - LEDGE_START_Z_OFFSET) + ctx.thresholds.ceiling_allowance;

    // Make sure no roof is too low above us.
    let up_start = player + up() * LEDGE_START_Z_OFFSET;
    let up_dist = ctx.cast(up_start, up(), max_up_check).distance();
    if up_dist < LEDGE_MIN_UP_CLEARANCE {
        return None;
    }

    let fwd_start = up_start + up() * (up_dist - LEDGE_CEILING_BUFFER);
    let down_reach = LEDGE_START_Z_OFFSET + max_up_check;

    // First candidate wins, not the best one.
    let anchor = (0..LEDGE_FORWARD_ITERATIONS).find_map(|i| {
        let reach = LEDGE_FORWARD_STEP * i as f32;

        // Blocked before the full reach: a wall at this depth, try further out.
        let fwd = ctx.cast(fwd_start, check_dir, reach);
        if fwd.distance() < reach {
            return None;
        }

        let probe = ctx.cast(fwd.end_point(), down(), down_reach);
        let point = probe.end_point();

        if point.z < player.z + min_height
            || point.z > player.z + max_height
            || probe.distance() < LEDGE_MIN_DOWN_DISTANCE
            || probe.normal().z < LEDGE_MIN_FLATNESS
        {
            return None;
        }
        Some(point)
    })?;

    if !has_standing_room(ctx, &anchor) {
        return None;
    }

    Some(Interaction {
        kind: classify_ledge(ctx.height_above_player(&anchor), &ctx.thresholds),
        anchor,
    })
}

/// Whether the player fits upright on top of `anchor`.
fn has_standing_room(ctx: &DetectionContext<'_>, anchor: &Point3) -> bool {
    let needed = ctx.thresholds.player_height - LEDGE_HEADROOM_BUFFER;
    let start = *anchor + up() * LEDGE_HEADROOM_BUFFER;
    ctx.cast(start, up(), needed).distance() >= needed
}

/// Low or high climb, by height above the feet.
pub fn classify_ledge(height_above_player: f32, thresholds: &Thresholds) -> InteractionType {
    if height_above_player < thresholds.high_ledge_height {
        InteractionType::LedgeLow
    } else {
        InteractionType::LedgeHigh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collision::{CollisionLayer, RayCaster},
        math::SurfaceNormal,
        settings::ParkourSettings,
        testing::BoxWorld,
    };
    use approx::assert_relative_eq;

    fn detect(world: &BoxWorld, scale: f32) -> Option<Interaction> {
        let t = ParkourSettings::default().thresholds(scale);
        let ctx = DetectionContext::new(RayCaster::new(Some(world)), Point3::origin(), t);
        detect_ledge(&ctx, Direction3::y(), t.min_ledge_height, t.max_ledge_height)
    }

    /// Ground plus a platform of height `h` starting 45 units in front of the player.
    fn platform(h: f32) -> BoxWorld {
        BoxWorld::new().with_ground().with_box(
            Point3::new(-200.0, 45.0, 0.0),
            Point3::new(200.0, 300.0, h),
            CollisionLayer::Static,
        )
    }

    #[test]
    fn flat_platform_in_range_is_found() {
        let found = detect(&platform(150.0), 1.0).expect("ledge");
        assert_eq!(found.kind, InteractionType::LedgeLow);
        assert_relative_eq!(found.anchor.z, 150.0, epsilon = 1.0e-3);
        assert_relative_eq!(found.anchor.y, 50.0, epsilon = 1.0e-3);
        assert_relative_eq!(found.anchor.x, 0.0);
    }

    #[test]
    fn high_platform_is_ledge_high() {
        let found = detect(&platform(200.0), 1.0).expect("ledge");
        assert_eq!(found.kind, InteractionType::LedgeHigh);
        assert_relative_eq!(found.anchor.z, 200.0, epsilon = 1.0e-3);
    }

    #[test]
    fn steep_platform_is_rejected() {
        let world = BoxWorld::new().with_ground().with_sloped_box(
            Point3::new(-200.0, 45.0, 0.0),
            Point3::new(200.0, 300.0, 150.0),
            CollisionLayer::Static,
            SurfaceNormal::new(0.0, 0.0, 0.5),
        );
        assert_eq!(detect(&world, 1.0), None);
    }

    #[test]
    fn platform_outside_height_range_is_rejected() {
        assert_eq!(detect(&platform(60.0), 1.0), None);
        assert_eq!(detect(&platform(300.0), 1.0), None);
    }

    #[test]
    fn low_ceiling_fails_immediately() {
        let world = platform(150.0).with_box(
            Point3::new(-200.0, -200.0, 160.0),
            Point3::new(200.0, 300.0, 180.0),
            CollisionLayer::Static,
        );
        assert_eq!(detect(&world, 1.0), None);
    }

    #[test]
    fn ceiling_blocked_by_character_fails() {
        let world = platform(150.0).with_box(
            Point3::new(-20.0, -20.0, 150.0),
            Point3::new(20.0, 20.0, 400.0),
            CollisionLayer::CharController,
        );
        assert_eq!(detect(&world, 1.0), None);
    }

    #[test]
    fn insufficient_headroom_on_ledge_fails() {
        let world = platform(150.0).with_box(
            Point3::new(-200.0, 45.0, 265.0),
            Point3::new(200.0, 300.0, 300.0),
            CollisionLayer::Static,
        );
        assert_eq!(detect(&world, 1.0), None);
    }

    #[test]
    fn wall_above_scan_height_blocks_every_probe() {
        let world = platform(150.0).with_box(
            Point3::new(-200.0, 15.0, 0.0),
            Point3::new(200.0, 25.0, 400.0),
            CollisionLayer::Static,
        );
        // Probes reaching 20 or more stop on the wall face at 15; the shorter ones
        // only find the floor.
        assert_eq!(detect(&world, 1.0), None);
    }

    #[test]
    fn nearest_qualifying_step_wins_over_higher_one_behind_it() {
        let world = BoxWorld::new()
            .with_ground()
            .with_box(
                Point3::new(-200.0, 25.0, 0.0),
                Point3::new(200.0, 60.0, 120.0),
                CollisionLayer::Static,
            )
            .with_box(
                Point3::new(-200.0, 60.0, 0.0),
                Point3::new(200.0, 300.0, 200.0),
                CollisionLayer::Static,
            );
        let found = detect(&world, 1.0).expect("ledge");
        assert_eq!(found.kind, InteractionType::LedgeLow);
        assert_relative_eq!(found.anchor.y, 30.0, epsilon = 1.0e-3);
        assert_relative_eq!(found.anchor.z, 120.0, epsilon = 1.0e-3);
    }

    /// A short ceiling slab right above the player puts the forward scan at z = 235.
    fn under_low_slab(platform_height: f32) -> BoxWorld {
        platform(platform_height).with_box(
            Point3::new(-20.0, -20.0, 245.0),
            Point3::new(20.0, 20.0, 260.0),
            CollisionLayer::Static,
        )
    }

    #[test]
    fn surface_just_below_scan_height_is_ignored() {
        // Down rays from z = 235 stop after 5 units.
        assert_eq!(detect(&under_low_slab(230.0), 1.0), None);

        let found = detect(&under_low_slab(220.0), 1.0).expect("15 units down is enough");
        assert_eq!(found.kind, InteractionType::LedgeHigh);
        assert_relative_eq!(found.anchor.z, 220.0, epsilon = 1.0e-3);
    }

    #[test]
    fn larger_actor_reaches_higher_ledges() {
        assert_eq!(detect(&platform(300.0), 1.0), None);
        let found = detect(&platform(300.0), 2.0).expect("ledge at scale 2");
        assert_eq!(found.kind, InteractionType::LedgeLow);
        assert_relative_eq!(found.anchor.z, 300.0, epsilon = 1.0e-3);
    }

    #[test]
    fn detection_without_world_finds_nothing() {
        let t = ParkourSettings::default().thresholds(1.0);
        let ctx = DetectionContext::new(RayCaster::new(None), Point3::origin(), t);
        assert_eq!(
            detect_ledge(&ctx, Direction3::y(), t.min_ledge_height, t.max_ledge_height),
            None
        );
    }

    #[test]
    fn classification_boundary_is_inclusive_high() {
        let t = ParkourSettings::default().thresholds(1.0);
        assert_eq!(classify_ledge(175.0, &t), InteractionType::LedgeHigh);
        assert_eq!(classify_ledge(174.999, &t), InteractionType::LedgeLow);

        let t2 = ParkourSettings::default().thresholds(2.0);
        assert_eq!(classify_ledge(350.0, &t2), InteractionType::LedgeHigh);
        assert_eq!(classify_ledge(349.99, &t2), InteractionType::LedgeLow);
    }
}
