use crate::{Arena, Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents.
///
/// The paddle always ends up fully inside the arena. A non-positive `dt`
/// moves nothing.
pub fn move_paddles(world: &mut World, dt: f32, arena: &Arena, config: &Config) {
    let dt = if dt > 0.0 { dt } else { 0.0 };
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.y += intent.dir as f32 * config.paddle_speed * dt;

        // Clamp to arena bounds
        paddle.y = arena.clamp_y(paddle.y, config.paddle_height / 2.0);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    if dt.is_nan() || dt <= 0.0 {
        return;
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}
