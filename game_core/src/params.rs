/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 40.0; // gap between side wall and paddle
    pub const PADDLE_SPEED: f32 = 380.0; // pixels per second

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 320.0; // serve speed
    pub const BALL_SPEED_GAIN: f32 = 18.0; // added to |vx| on every paddle hit
    pub const ANGLE_SCALE: f32 = 260.0; // vertical push at the paddle edge
    pub const MAX_VY: f32 = 520.0;
    pub const SERVE_ANGLE: f32 = 0.8; // radians, shallow serves only

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Simulation
    pub const FIXED_DT: f32 = 1.0 / 240.0; // sub-step, well under the paddle overlap window

    // Driver
    pub const FRAME_CAP: u32 = 120;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
