use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Aabb, Config, ServeRng};

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing at this side's goal line
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // vertical center, clamped to arena
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn rect(&self, config: &Config) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn rect(&self, size: f32) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(size))
    }

    /// Put the ball back on the spawn point with a fresh serve velocity.
    ///
    /// `direction` is the horizontal sign of the serve; `None` picks one at random.
    pub fn serve(
        &mut self,
        spawn: Vec2,
        config: &Config,
        rng: &mut dyn ServeRng,
        direction: Option<f32>,
    ) {
        self.pos = spawn;
        self.vel = serve_velocity(config, rng, direction);
    }
}

/// Shallow-angle serve: |vx| is the base speed, |vy| never exceeds it
pub fn serve_velocity(config: &Config, rng: &mut dyn ServeRng, direction: Option<f32>) -> Vec2 {
    let angle = rng.serve_angle(config.serve_angle);
    let direction = match direction {
        Some(dir) => dir.signum(),
        None => rng.serve_direction(),
    };
    let vx = direction * config.ball_speed;
    let vy = config.ball_speed * rng.vertical_sign() * angle.sin().abs();
    Vec2::new(vx, vy)
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
