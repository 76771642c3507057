//! Parking Geometry Tests
//!
//! Verifies the slot-corner observation transform and the strict
//! rectangle-in-rectangle containment test against known-good vectors
//! for every combination of car/slot orientation.
//!
//! Geometry under test (default configuration):
//!
//! | Rectangle | Length | Width |
//! |-----------|--------|-------|
//! | Car       | 4.0 m  | 2.0 m |
//! | Slot      | 6.0 m  | 3.5 m |
//!
//! Run with: `cargo test --test parking_geometry`

use approx::assert_relative_eq;
use std::f32::consts::FRAC_PI_2;
use virama_sim::config::SimConfig;
use virama_sim::core::{Point2D, Pose2D};
use virama_sim::env::ParkingEnv;

fn default_env() -> ParkingEnv {
    SimConfig::default().to_env()
}

fn assert_corners(actual: [Point2D; 4], expected: [(f32, f32); 4]) {
    for (corner, &(ex, ey)) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(corner.x, ex, epsilon = 1e-4);
        assert_relative_eq!(corner.y, ey, epsilon = 1e-4);
    }
}

// ============================================================================
// Corner observation transform
// ============================================================================

#[test]
fn corners_car_and_slot_axis_aligned() {
    let env = default_env();
    let corners = env.relative_corners(
        Pose2D::new(10.0, 10.0, 0.0),
        Pose2D::new(5.0, 5.0, 0.0),
    );
    assert_corners(
        corners,
        [(-3.25, -2.0), (-3.25, -8.0), (-6.75, -8.0), (-6.75, -2.0)],
    );
}

#[test]
fn corners_car_rotated_slot_axis_aligned() {
    let env = default_env();
    let corners = env.relative_corners(
        Pose2D::new(10.0, 10.0, FRAC_PI_2),
        Pose2D::new(5.0, 5.0, 0.0),
    );
    assert_corners(
        corners,
        [(-2.0, 3.25), (-8.0, 3.25), (-8.0, 6.75), (-2.0, 6.75)],
    );
}

#[test]
fn corners_car_axis_aligned_slot_rotated() {
    let env = default_env();
    let corners = env.relative_corners(
        Pose2D::new(10.0, 10.0, 0.0),
        Pose2D::new(5.0, 5.0, FRAC_PI_2),
    );
    assert_corners(
        corners,
        [(-8.0, -3.25), (-2.0, -3.25), (-2.0, -6.75), (-8.0, -6.75)],
    );
}

#[test]
fn corners_car_and_slot_rotated() {
    let env = default_env();
    let corners = env.relative_corners(
        Pose2D::new(10.0, 10.0, FRAC_PI_2),
        Pose2D::new(5.0, 5.0, FRAC_PI_2),
    );
    assert_corners(
        corners,
        [(-3.25, 8.0), (-3.25, 2.0), (-6.75, 2.0), (-6.75, 8.0)],
    );
}

#[test]
fn corner_order_is_stable_across_frames() {
    // The same physical corner must keep its slot index regardless of
    // car heading: rotating the car permutes coordinates, not order.
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);

    let straight = env.relative_corners(Pose2D::new(10.0, 10.0, 0.0), slot);
    let rotated = env.relative_corners(Pose2D::new(10.0, 10.0, FRAC_PI_2), slot);

    for (a, b) in straight.iter().zip(rotated.iter()) {
        // Distances from the car center are invariant under car rotation
        assert_relative_eq!(a.length(), b.length(), epsilon = 1e-4);
    }
}

// ============================================================================
// Strict containment
// ============================================================================

#[test]
fn parked_when_centered_same_yaw() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    assert!(env.is_parked(Pose2D::new(5.0, 5.0, 0.0), slot));
}

#[test]
fn parked_when_centered_in_rotated_slot() {
    let env = default_env();
    let slot = Pose2D::new(-3.0, 7.0, FRAC_PI_2);
    assert!(env.is_parked(Pose2D::new(-3.0, 7.0, FRAC_PI_2), slot));
}

#[test]
fn not_parked_when_shifted_along_slot_axis() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    // +2 m along the slot's long axis pushes the nose corners past the
    // 3 m half-length bound (2 + 2 = 4 > 3)
    assert!(!env.is_parked(Pose2D::new(7.0, 5.0, 0.0), slot));
}

#[test]
fn not_parked_when_far_outside() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    assert!(!env.is_parked(Pose2D::new(50.0, -50.0, 1.0), slot));
}

#[test]
fn parked_when_rotated_but_still_contained() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    // 15° of relative yaw keeps the 4x2 car inside the 6x3.5 slot:
    // extent along x = 2cos15 + 1sin15 ≈ 2.19 < 3,
    // extent along y = 2sin15 + 1cos15 ≈ 1.48 < 1.75
    let car = Pose2D::new(5.0, 5.0, 15.0_f32.to_radians());
    assert!(env.is_parked(car, slot));
}

#[test]
fn not_parked_when_rotation_breaks_containment() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    // At 45° the car's diagonal reach exceeds the slot half-width
    let car = Pose2D::new(5.0, 5.0, 45.0_f32.to_radians());
    assert!(!env.is_parked(car, slot));
}

#[test]
fn not_parked_when_edge_flush_with_boundary() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    // Car offset by slot_width/2 + car_width/2 = 2.75 m along x: the
    // near corners sit at x' = 2.75 + 2 = 4.75, outside the half-length
    let car = Pose2D::new(5.0 + 3.5 / 2.0 + 2.0 / 2.0, 5.0, 0.0);
    assert!(!env.is_parked(car, slot));
}

#[test]
fn containment_symmetric_in_reverse() {
    // A car parked nose-in and the same car parked tail-in are both
    // contained: containment ignores travel direction
    let env = default_env();
    let slot = Pose2D::new(0.0, 0.0, 0.0);
    assert!(env.is_parked(Pose2D::new(0.0, 0.0, 0.0), slot));
    assert!(env.is_parked(Pose2D::new(0.0, 0.0, std::f32::consts::PI), slot));
}

#[test]
fn containment_works_for_all_cardinal_slot_yaws() {
    let env = default_env();
    for quarter in 0..4 {
        let yaw = quarter as f32 * FRAC_PI_2;
        let slot = Pose2D::new(2.0, -3.0, yaw);
        assert!(
            env.is_parked(Pose2D::new(2.0, -3.0, yaw), slot),
            "centered car must be parked at slot yaw {yaw}"
        );
        assert!(
            !env.is_parked(Pose2D::new(12.0, -3.0, yaw), slot),
            "distant car must not be parked at slot yaw {yaw}"
        );
    }
}

// ============================================================================
// Soft center check
// ============================================================================

#[test]
fn soft_center_accepts_within_tolerances() {
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    // 1.5 m longitudinal, 1.0 m lateral tolerances
    assert!(env.is_parked_at_center(Pose2D::new(6.4, 5.9, 0.0), slot));
    assert!(!env.is_parked_at_center(Pose2D::new(6.6, 5.0, 0.0), slot));
    assert!(!env.is_parked_at_center(Pose2D::new(5.0, 6.1, 0.0), slot));
}

#[test]
fn soft_center_ignores_yaw_error() {
    // The yaw tolerance is computed but not enforced; a badly rotated
    // car centered on the slot still passes the soft check
    let env = default_env();
    let slot = Pose2D::new(5.0, 5.0, 0.0);
    assert!(env.is_parked_at_center(Pose2D::new(5.0, 5.0, 1.2), slot));
}

#[test]
fn soft_center_respects_slot_rotation() {
    let env = default_env();
    let slot = Pose2D::new(0.0, 0.0, FRAC_PI_2);
    // In a 90° slot the longitudinal axis is world y: 1.4 m along y is
    // inside the 1.5 m longitudinal tolerance...
    assert!(env.is_parked_at_center(Pose2D::new(0.0, 1.4, 0.0), slot));
    // ...but 1.4 m along world x is lateral and exceeds 1.0 m
    assert!(!env.is_parked_at_center(Pose2D::new(1.4, 0.0, 0.0), slot));
}
