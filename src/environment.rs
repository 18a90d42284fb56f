//! Static world model: obstacles, target, and movement geometry.

use crate::config::SimConfig;
use crate::types::{Action, Position};

/// A static obstacle with a circular collision zone.
///
/// Fixed at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Center of the obstacle.
    pub position: Position,
    /// An agent within this distance of the center has collided.
    pub radius: f64,
}

impl Obstacle {
    /// Creates an obstacle at `position` with the given collision radius.
    pub fn new(position: Position, radius: f64) -> Self {
        Self { position, radius }
    }
}

/// The world every agent navigates: a clamped square floor, a set of static
/// obstacles, and a single target shared by all agents.
///
/// All queries are pure; each runs in O(number of obstacles) or better.
#[derive(Debug, Clone)]
pub struct Environment {
    config: SimConfig,
    target: Position,
    obstacles: Vec<Obstacle>,
}

impl Environment {
    /// Creates an environment with an arbitrary target and obstacle layout.
    pub fn new(config: SimConfig, target: Position, obstacles: Vec<Obstacle>) -> Self {
        Self {
            config,
            target,
            obstacles,
        }
    }

    /// The standard scene layout: target in the far corner, five obstacles
    /// between it and the spawn corner.
    pub fn standard(config: SimConfig) -> Self {
        let radius = config.collision_radius;
        let obstacles = vec![
            Obstacle::new(Position::new(0.0, 1.0, 4.0), radius),
            Obstacle::new(Position::new(4.0, 1.0, 0.0), radius),
            Obstacle::new(Position::new(-4.0, 1.0, 4.0), radius),
            Obstacle::new(Position::new(4.0, 1.0, -4.0), radius),
            Obstacle::new(Position::new(-6.0, 1.0, -6.0), radius),
        ];
        let target = Position::new(8.0, 0.15, 8.0);
        Self::new(config, target, obstacles)
    }

    /// The static configuration this world was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The shared target position.
    pub fn target(&self) -> Position {
        self.target
    }

    /// The static obstacle layout.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// True if `position` lies inside any obstacle's collision zone.
    pub fn collides(&self, position: Position) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| position.distance_to(&obstacle.position) < obstacle.radius)
    }

    /// True if `position` is within capture range of the target.
    pub fn reached_target(&self, position: Position) -> bool {
        position.distance_to(&self.target) < self.config.capture_radius
    }

    /// Candidate position after applying `action` at the given speed.
    ///
    /// Displaces `from` by one tick of axis-aligned velocity and clamps the
    /// horizontal axes to the world bounds. Pure: committing the move is the
    /// caller's decision.
    pub fn step(&self, from: Position, action: Action, speed: f64) -> Position {
        from.offset(action.velocity(speed))
            .clamped(self.config.half_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Environment {
        Environment::standard(SimConfig::default())
    }

    #[test]
    fn standard_layout() {
        let env = standard();
        assert_eq!(env.obstacles().len(), 5);
        assert_eq!(env.target(), Position::new(8.0, 0.15, 8.0));
    }

    #[test]
    fn collides_at_obstacle_center() {
        let env = standard();
        assert!(env.collides(Position::new(0.0, 1.0, 4.0)));
        assert!(env.collides(Position::new(0.5, 0.5, 4.0)));
    }

    #[test]
    fn no_collision_far_from_obstacles() {
        let env = standard();
        assert!(!env.collides(Position::new(-8.0, 0.5, -8.0)));
        assert!(!env.collides(Position::new(8.0, 0.5, 8.0)));
    }

    #[test]
    fn collision_boundary_is_exclusive() {
        let config = SimConfig::default();
        let env = Environment::new(
            config,
            Position::new(8.0, 0.15, 8.0),
            vec![Obstacle::new(Position::new(0.0, 0.5, 0.0), 1.5)],
        );
        // exactly on the radius is outside the collision zone
        assert!(!env.collides(Position::new(1.5, 0.5, 0.0)));
        assert!(env.collides(Position::new(1.49, 0.5, 0.0)));
    }

    #[test]
    fn reached_target_within_capture_radius() {
        let env = standard();
        assert!(env.reached_target(Position::new(7.9, 0.5, 8.0)));
        assert!(!env.reached_target(Position::new(5.0, 0.5, 8.0)));
    }

    #[test]
    fn step_moves_along_action_axis() {
        let env = standard();
        let from = Position::new(0.0, 0.5, 0.0);
        let p = env.step(from, Action::Forward, 0.15);
        assert!((p.z - 0.15).abs() < 1e-10);
        assert_eq!(p.x, 0.0);
        let p = env.step(from, Action::Left, 0.15);
        assert!((p.x + 0.15).abs() < 1e-10);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn step_clamps_at_world_edge() {
        let env = standard();
        let edge = Position::new(14.0, 0.5, 14.0);
        let p = env.step(edge, Action::Forward, 0.15);
        assert_eq!(p.z, 14.0);
        let p = env.step(edge, Action::Right, 0.15);
        assert_eq!(p.x, 14.0);
    }
}
