use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Source of the random choices made when serving.
///
/// Tests substitute scripted implementations to pin serve vectors.
pub trait ServeRng {
    /// Horizontal serve direction, -1.0 or 1.0
    fn serve_direction(&mut self) -> f32;

    /// Sign applied to the vertical serve component, -1.0 or 1.0
    fn vertical_sign(&mut self) -> f32;

    /// Serve angle in radians, uniform in [-max, max]
    fn serve_angle(&mut self, max: f32) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }

    fn sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl ServeRng for GameRng {
    fn serve_direction(&mut self) -> f32 {
        self.sign()
    }

    fn vertical_sign(&mut self) -> f32 {
        self.sign()
    }

    fn serve_angle(&mut self, max: f32) -> f32 {
        let max = max.abs();
        if max == 0.0 {
            return 0.0;
        }
        self.0.gen_range(-max..=max)
    }
}

/// Discrete notification produced by a simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    /// The ball was returned by this side's paddle
    PaddleHit(Side),
    /// This side scored
    Goal(Side),
    /// This side reached the win score
    Win(Side),
}

/// Events that occurred during this tick, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.list
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.list.contains(event)
    }

    pub fn count(&self, event: &GameEvent) -> usize {
        self.list.iter().filter(|e| *e == event).count()
    }
}
