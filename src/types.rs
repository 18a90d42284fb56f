//! Core types for the navigation engine.
//!
//! Defines scene positions, axis-aligned velocities, the discrete action set,
//! and the grid-cell state key used by the Q-learning core.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the 3D scene.
///
/// Movement happens in the x/z plane; `y` stays at a fixed height per entity
/// class (agents 0.5, obstacles 1.0, the target 0.15). Distances are full 3D
/// Euclidean distances, matching what the scene renders.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns this position displaced by one tick of `velocity`.
    pub fn offset(&self, velocity: Velocity) -> Position {
        Position::new(self.x + velocity.x, self.y, self.z + velocity.z)
    }

    /// Returns this position with the horizontal axes clamped to
    /// `[-half_extent, half_extent]`.
    ///
    /// `y` is left untouched. Idempotent.
    pub fn clamped(mut self, half_extent: f64) -> Position {
        self.x = self.x.clamp(-half_extent, half_extent);
        self.z = self.z.clamp(-half_extent, half_extent);
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Horizontal velocity applied to an agent each tick.
///
/// Movement is axis-aligned: applying an [`Action`] leaves exactly one
/// component nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Velocity {
    pub x: f64,
    pub z: f64,
}

impl Velocity {
    /// The zero velocity.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// One of the four discrete moves available to an agent.
///
/// Variant order is the action index order; [`QTable::best`] tie-breaks
/// toward the lowest index.
///
/// [`QTable::best`]: crate::qtable::QTable::best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Move in +z.
    Forward,
    /// Move in -z.
    Backward,
    /// Move in -x.
    Left,
    /// Move in +x.
    Right,
}

impl Action {
    /// Number of available actions.
    pub const COUNT: usize = 4;

    /// Returns all actions in index order.
    pub fn all() -> [Action; 4] {
        [Action::Forward, Action::Backward, Action::Left, Action::Right]
    }

    /// Returns the index of this action (0=Forward, 1=Backward, 2=Left, 3=Right).
    pub fn index(self) -> usize {
        match self {
            Action::Forward => 0,
            Action::Backward => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Velocity of magnitude `speed` along this action's axis.
    pub fn velocity(self, speed: f64) -> Velocity {
        match self {
            Action::Forward => Velocity { x: 0.0, z: speed },
            Action::Backward => Velocity { x: 0.0, z: -speed },
            Action::Left => Velocity { x: -speed, z: 0.0 },
            Action::Right => Velocity { x: speed, z: 0.0 },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Forward => write!(f, "forward"),
            Action::Backward => write!(f, "backward"),
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
        }
    }
}

/// Discrete state key for the Q-table.
///
/// Positions are discretized by floor-dividing x and z by the grid cell size.
/// Two positions share a state iff they fall in the same cell; distinct cell
/// coordinates never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCell {
    pub x: i32,
    pub z: i32,
}

impl GridCell {
    /// Encodes a position into its grid cell.
    pub fn encode(position: Position, grid_size: f64) -> GridCell {
        GridCell {
            x: (position.x / grid_size).floor() as i32,
            z: (position.z / grid_size).floor() as i32,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
