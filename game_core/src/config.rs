use crate::{Params, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`Config`] cannot drive a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("arena {width}x{height} is too small for its paddles and ball")]
    ArenaTooSmall { width: f32, height: f32 },

    #[error("paddles overlap: margin {margin} and width {paddle_width} do not fit in arena width {width}")]
    PaddlesOverlap {
        margin: f32,
        paddle_width: f32,
        width: f32,
    },

    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Game configuration
///
/// Bound into a [`crate::Game`] when it is created and never mutated by the
/// simulation. Fields missing from a serialized config take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub speed_gain: f32,
    pub angle_scale: f32,
    pub max_vy: f32,
    pub serve_angle: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            speed_gain: Params::BALL_SPEED_GAIN,
            angle_scale: Params::ANGLE_SCALE,
            max_vy: Params::MAX_VY,
            serve_angle: Params::SERVE_ANGLE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("speed_gain", self.speed_gain),
            ("max_vy", self.max_vy),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let finite = [
            ("paddle_margin", self.paddle_margin),
            ("angle_scale", self.angle_scale),
            ("serve_angle", self.serve_angle),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Magnitudes; the sign comes from the hit offset or the serve roll
        for (field, value) in [
            ("angle_scale", self.angle_scale),
            ("serve_angle", self.serve_angle),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.height <= self.paddle_height
            || self.height <= self.ball_size
            || self.width <= self.ball_size
        {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.paddle_margin < 0.0
            || 2.0 * (self.paddle_margin + self.paddle_width) >= self.width
        {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                paddle_width: self.paddle_width,
                width: self.width,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }

    /// Get X position of a paddle's center
    pub fn paddle_x(&self, side: Side) -> f32 {
        let half_width = self.paddle_width / 2.0;
        match side {
            Side::Left => self.paddle_margin + half_width,
            Side::Right => self.width - self.paddle_margin - half_width,
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.height - half_height)
    }
}
