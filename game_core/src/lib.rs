pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod phase;
pub mod resources;
pub mod sink;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use phase::*;
pub use resources::*;
pub use sink::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// `dt` is split into `Params::FIXED_DT` sub-steps so a fast ball cannot skip
/// over a paddle. A zero `dt` still runs collisions and scoring once. Only
/// call this while the match is playing. Returns the winner if a goal this
/// tick decided the match; the rest of the tick is dropped.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    input: &InputState,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn ServeRng,
    dt: f32,
) -> Option<Side> {
    let mut remaining_dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    loop {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        // 1. Ingest inputs (apply to paddle intents)
        ingest_inputs(world, input);

        // 2. Move paddles based on intents
        move_paddles(world, step_dt, arena, config);

        // 3. Move ball
        move_ball(world, step_dt);

        // 4. Check collisions (ball vs walls, paddles)
        check_collisions(world, arena, config, events);

        // 5. Check scoring (ball exited arena), then the win threshold
        if check_scoring(world, arena, config, score, events, rng).is_some() {
            if let Some(winner) = check_winner(score, config, events) {
                return Some(winner);
            }
        }

        if remaining_dt <= 0.0 {
            return None;
        }
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
