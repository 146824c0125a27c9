use hecs::World;

use crate::{InputState, Paddle, PaddleIntent};

/// Copy the resolved key intent of each side onto its paddle
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.intent(paddle.side);
    }
}
