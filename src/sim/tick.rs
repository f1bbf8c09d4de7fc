//! Simulation tick
//!
//! One tick = integrate ball, rotate hexagon, resolve collisions. Rendering
//! happens afterwards, outside the simulation.

use super::collision::resolve_collisions;
use super::state::{SimEvent, SimState};

/// Advance the simulation by one step
///
/// The hexagon is rotated before collision resolution so the resolver always
/// sees this tick's geometry.
pub fn tick(state: &mut SimState, rotation_delta_degrees: f64) {
    state.events.clear();
    state.time_ticks += 1;

    state.ball.integrate();
    state.hexagon.rotate(rotation_delta_degrees);

    let bounces = resolve_collisions(&mut state.ball, &state.hexagon);
    state.bounce_count += bounces.len() as u64;
    state.events.extend(bounces.into_iter().map(SimEvent::Bounce));

    if !state.escaped && state.hexagon.circumradius() > 0.0 {
        let distance = (state.ball.pos - state.hexagon.center()).length();
        if distance > state.hexagon.circumradius() {
            log::warn!(
                "ball left the hexagon's circumcircle at tick {} (distance {:.1})",
                state.time_ticks,
                distance
            );
            state.escaped = true;
            state.events.push(SimEvent::Escaped { distance });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, RotatingPolygon, closest_point_on_segment};
    use glam::DVec2;
    use proptest::prelude::*;

    const CENTER: DVec2 = DVec2::new(400.0, 400.0);

    fn reference_state(gravity: f64, friction: f64, radius: f64) -> SimState {
        SimState::new(
            Ball::new(CENTER, radius, gravity, friction),
            RotatingPolygon::new(CENTER, 300.0),
        )
    }

    /// Signed distance from the ball center to each edge line (positive inside)
    fn min_edge_clearance(state: &SimState) -> f64 {
        state
            .hexagon
            .edges()
            .map(|edge| {
                let e = edge.vector();
                let inward = DVec2::new(-e.y, e.x).normalize();
                (state.ball.pos - edge.start).dot(inward)
            })
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn test_tick_counts_and_integrates() {
        let mut state = reference_state(0.5, 0.995, 15.0);
        tick(&mut state, 0.5);

        assert_eq!(state.time_ticks, 1);
        assert!((state.ball.vel.y - 0.4975).abs() < 1e-12);
        assert!((state.hexagon.angle_degrees() - 0.5).abs() < 1e-12);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_ball_stays_inside_and_bounces() {
        let mut state = reference_state(0.5, 0.995, 15.0);
        let mut heights = Vec::with_capacity(1000);

        for _ in 0..1000 {
            tick(&mut state, 0.0);
            let distance = (state.ball.pos - CENTER).length();
            assert!(distance <= 300.0 - 15.0, "distance {distance} at tick {}", state.time_ticks);
            heights.push(state.ball.pos.y);
        }

        // Vertical motion reverses direction repeatedly
        let reversals = heights
            .windows(3)
            .filter(|w| (w[1] - w[0]) * (w[2] - w[1]) < 0.0)
            .count();
        assert!(reversals >= 10, "only {reversals} reversals");
        assert!(state.bounce_count > 0);
        assert!(!state.escaped);
    }

    #[test]
    fn test_spinning_hexagon_keeps_ball() {
        let mut state = reference_state(0.5, 0.995, 15.0);
        for _ in 0..2000 {
            tick(&mut state, 0.5);
            assert!((state.ball.pos - CENTER).length() <= 300.0 - 15.0);
        }
        assert!(!state.escaped);
        assert!((state.hexagon.angle_degrees() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_first_bounce_reverses_fall() {
        let mut state = reference_state(0.5, 0.995, 15.0);
        let mut ticks = 0;
        while state.events.is_empty() {
            tick(&mut state, 0.0);
            ticks += 1;
            assert!(ticks < 100, "ball never reached the floor");
        }

        // Dropped straight down onto the flat bottom edge
        let bounce = state.bounces().next().unwrap();
        assert_eq!(bounce.contact.edge, 1);
        assert!(state.ball.vel.y < 0.0);
        assert!(bounce.speed_after < bounce.speed_before);
    }

    #[test]
    fn test_degenerate_hexagon_never_collides() {
        let mut state = SimState::new(
            Ball::new(CENTER, 15.0, 0.5, 0.995),
            RotatingPolygon::new(CENTER, 0.0),
        );
        for _ in 0..100 {
            tick(&mut state, 3.0);
        }

        assert_eq!(state.bounce_count, 0);
        assert!(!state.escaped);
        assert!(state.ball.pos.y > CENTER.y);
        assert!(state.hexagon_vertices().iter().all(|v| *v == CENTER));
    }

    #[test]
    fn test_escape_is_reported_once() {
        // Tunnels straight through the wall in a single tick
        let mut state = SimState::new(
            Ball::new(CENTER, 5.0, 0.0, 1.0).with_velocity(DVec2::new(0.0, 400.0)),
            RotatingPolygon::new(CENTER, 300.0),
        );
        tick(&mut state, 0.0);
        assert!(state.escaped);
        assert!(matches!(state.events.last(), Some(SimEvent::Escaped { .. })));

        tick(&mut state, 0.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_escape_is_measured_against_circumcircle() {
        // Outside the bottom edge line, out of contact range, inside the circumcircle
        let apothem = RotatingPolygon::new(CENTER, 300.0).apothem();
        let mut state = SimState::new(
            Ball::new(CENTER + DVec2::new(0.0, apothem + 30.0), 12.0, 0.0, 1.0),
            RotatingPolygon::new(CENTER, 300.0),
        );
        tick(&mut state, 0.0);

        assert!(min_edge_clearance(&state) < 0.0);
        assert_eq!(state.bounce_count, 0);
        assert!(!state.escaped);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_fast_fall_is_only_partly_pushed_out() {
        // Center crosses the floor line in one tick: push-out of radius - distance
        // leaves the ball inside but short of full clearance
        let floor = CENTER.y + RotatingPolygon::new(CENTER, 300.0).apothem();
        let mut state = SimState::new(
            Ball::new(DVec2::new(CENTER.x, floor - 16.0), 12.0, 0.0, 1.0)
                .with_velocity(DVec2::new(0.0, 20.0)),
            RotatingPolygon::new(CENTER, 300.0),
        );
        tick(&mut state, 0.0);

        let bounces: Vec<_> = state.bounces().collect();
        assert_eq!(bounces.len(), 1);
        assert_eq!(bounces[0].contact.edge, 1);
        assert!((bounces[0].contact.penetration - 8.0).abs() < 1e-9);
        assert!((state.ball.vel.y + 19.0).abs() < 1e-9);
        assert!((min_edge_clearance(&state) - 4.0).abs() < 1e-9);
        assert!((state.ball.pos - CENTER).length() < 300.0);
        assert!(!state.escaped);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = reference_state(0.5, 0.995, 15.0);
        let mut state2 = reference_state(0.5, 0.995, 15.0);

        for i in 0..500 {
            let delta = if i % 2 == 0 { 0.5 } else { -1.25 };
            tick(&mut state1, delta);
            tick(&mut state2, delta);
        }

        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.ball.vel, state2.ball.vel);
        assert_eq!(state1.bounce_count, state2.bounce_count);
        assert_eq!(state1.hexagon_vertices(), state2.hexagon_vertices());
    }

    #[test]
    fn test_bounce_contacts_lie_on_edges() {
        let mut state = reference_state(0.5, 0.995, 15.0);
        for _ in 0..600 {
            tick(&mut state, 0.5);
            for bounce in state.bounces() {
                let edge = state.hexagon.edges().nth(bounce.contact.edge).unwrap();
                let proj = closest_point_on_segment(bounce.contact.point, edge.start, edge.end)
                    .unwrap();
                assert!((proj.point - bounce.contact.point).length() < 1e-6);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Peak fall speed stays under the radius (about 12.1 px/tick at
        // gravity 0.3), so the center never crosses an edge line in one tick
        #[test]
        fn still_hexagon_is_never_penetrated(
            gravity in 0.1f64..0.3,
            friction in 0.99f64..0.999,
            radius in 15.0f64..30.0,
        ) {
            let mut state = reference_state(gravity, friction, radius);
            for _ in 0..1000 {
                tick(&mut state, 0.0);
                prop_assert!(min_edge_clearance(&state) >= radius - 1e-6);
            }
        }

        #[test]
        fn slow_spin_keeps_ball_contained(
            rotation in -1.0f64..1.0,
            gravity in 0.1f64..0.5,
            friction in 0.99f64..0.999,
            radius in 12.0f64..30.0,
        ) {
            let mut state = reference_state(gravity, friction, radius);
            for _ in 0..1000 {
                tick(&mut state, rotation);
                prop_assert!((state.ball.pos - CENTER).length() < 300.0);
            }
            prop_assert!(!state.escaped);
        }
    }
}
