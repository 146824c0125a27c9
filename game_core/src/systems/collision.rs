use crate::{Arena, Ball, Config, Events, GameEvent, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows; left is tested first
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, arena, config, events);
        for paddle in &paddles {
            bounce_off_paddle(ball, paddle, config, events);
        }
    }
}

/// Top and bottom walls. Each edge is checked on its own, so a tick can
/// report two bounces.
pub fn bounce_off_walls(ball: &mut Ball, arena: &Arena, config: &Config, events: &mut Events) {
    let half = config.ball_size / 2.0;

    if ball.pos.y - half <= 0.0 {
        ball.pos.y = half;
        ball.vel.y = ball.vel.y.abs();
        events.push(GameEvent::WallBounce);
        log::trace!("wall bounce (top), vy={}", ball.vel.y);
    }

    if ball.pos.y + half >= arena.height {
        ball.pos.y = arena.height - half;
        ball.vel.y = -ball.vel.y.abs();
        events.push(GameEvent::WallBounce);
        log::trace!("wall bounce (bottom), vy={}", ball.vel.y);
    }
}

/// Return the ball off a paddle if it overlaps while moving toward it.
///
/// Returns true on a hit.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    events: &mut Events,
) -> bool {
    // A ball moving away has already been returned
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !approaching {
        return false;
    }

    let paddle_rect = paddle.rect(config);
    if !ball.rect(config.ball_size).overlaps(&paddle_rect) {
        return false;
    }

    // Sit flush against the paddle face and send the ball back faster
    let half = config.ball_size / 2.0;
    let speed = ball.vel.x.abs() + config.speed_gain;
    match paddle.side {
        Side::Left => {
            ball.pos.x = paddle_rect.max.x + half;
            ball.vel.x = speed;
        }
        Side::Right => {
            ball.pos.x = paddle_rect.min.x - half;
            ball.vel.x = -speed;
        }
    }

    // -1 at the top edge, 1 at the bottom edge; grazes can exceed that
    let offset = (ball.pos.y - paddle.y) / (config.paddle_height / 2.0);
    ball.vel.y = (ball.vel.y + offset * config.angle_scale).clamp(-config.max_vy, config.max_vy);

    events.push(GameEvent::PaddleHit(paddle.side));
    log::trace!(
        "paddle hit ({:?}), offset={:.2}, vel={:?}",
        paddle.side,
        offset,
        ball.vel
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Arena, Ball, Config, Events};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Arena, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let arena = Arena::new(&config);
        let events = Events::new();
        (world, config, arena, events)
    }

    fn only_ball(world: &hecs::World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, arena, mut events) = setup_world();
        let half = config.ball_size / 2.0;
        // Top edge exactly on y = 0
        create_ball(&mut world, Vec2::new(450.0, half), Vec2::new(320.0, -200.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.y, 200.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 320.0, "X velocity should be unchanged");
        assert_eq!(ball.pos.y - half, 0.0, "Top edge clamped to the wall");
        assert_eq!(events.count(&GameEvent::WallBounce), 1);
    }

    #[test]
    fn test_ball_past_top_wall_is_clamped() {
        let (mut world, config, arena, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(450.0, -3.0), Vec2::new(320.0, -150.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.pos.y, config.ball_size / 2.0);
        assert_eq!(ball.vel.y, 150.0);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, arena, mut events) = setup_world();
        let half = config.ball_size / 2.0;
        create_ball(
            &mut world,
            Vec2::new(450.0, arena.height - half + 1.0),
            Vec2::new(-320.0, 150.0),
        );

        check_collisions(&mut world, &arena, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.y, -150.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.pos.y + half, arena.height, "Bottom edge clamped to the wall");
        assert!(events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_no_wall_bounce_mid_arena() {
        let (mut world, config, arena, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(450.0, 300.0), Vec2::new(320.0, -150.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        assert!(events.is_empty());
        assert_eq!(only_ball(&world).vel, Vec2::new(320.0, -150.0));
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 300.0);
        // Paddle face is at x = 52; the ball's left edge is at 48
        create_ball(&mut world, Vec2::new(55.0, 300.0), Vec2::new(-320.0, 40.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, 320.0 + config.speed_gain);
        assert_eq!(ball.vel.y, 40.0, "Dead-center hit keeps vy");
        assert_eq!(ball.pos.x - config.ball_size / 2.0, 52.0, "Flush with the paddle face");
        assert_eq!(events.as_slice(), &[GameEvent::PaddleHit(Side::Left)]);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 300.0);
        // Paddle face is at x = 848
        create_ball(&mut world, Vec2::new(845.0, 300.0), Vec2::new(320.0, 0.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, -(320.0 + config.speed_gain));
        assert_eq!(ball.pos.x + config.ball_size / 2.0, 848.0);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Right)));
    }

    #[test]
    fn test_ball_trajectory_affected_by_hit_position() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 300.0);
        create_ball(&mut world, Vec2::new(55.0, 255.0), Vec2::new(-320.0, 0.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        let ball = only_ball(&world);
        let expected = -0.9 * config.angle_scale;
        assert!(
            (ball.vel.y - expected).abs() < 1e-3,
            "Top hit should deflect upward, got {}",
            ball.vel.y
        );

        world.clear();
        events.clear();
        create_paddle(&mut world, Side::Left, 300.0);
        create_ball(&mut world, Vec2::new(55.0, 345.0), Vec2::new(-320.0, 0.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        assert!(
            only_ball(&world).vel.y > 0.0,
            "Ball should deflect downward when hitting bottom of paddle"
        );
    }

    #[test]
    fn test_deflection_clamped_to_max_vy() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 300.0);
        create_ball(&mut world, Vec2::new(55.0, 253.0), Vec2::new(-320.0, -500.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        assert_eq!(only_ball(&world).vel.y, -config.max_vy);
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 300.0);
        create_ball(&mut world, Vec2::new(55.0, 300.0), Vec2::new(320.0, 0.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        assert_eq!(only_ball(&world).vel.x, 320.0, "Ball should not bounce when moving away");
        assert!(events.is_empty(), "Should not trigger collision when moving away");
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 300.0);
        // Left edge touches the paddle face without overlapping
        create_ball(&mut world, Vec2::new(59.0, 300.0), Vec2::new(-320.0, 0.0));

        check_collisions(&mut world, &arena, &config, &mut events);

        assert!(!events.contains(&GameEvent::PaddleHit(Side::Left)));
    }

    #[test]
    fn test_speed_grows_by_gain_each_hit() {
        let (_world, config, _arena, mut events) = setup_world();
        let left = Paddle::new(Side::Left, 300.0);
        let right = Paddle::new(Side::Right, 300.0);
        let mut ball = Ball::new(Vec2::new(55.0, 300.0), Vec2::new(-320.0, 0.0));

        assert!(bounce_off_paddle(&mut ball, &left, &config, &mut events));
        assert_eq!(ball.vel.x.abs(), 320.0 + config.speed_gain);

        ball.pos.x = 845.0;
        assert!(bounce_off_paddle(&mut ball, &right, &config, &mut events));
        assert_eq!(ball.vel.x.abs(), 320.0 + 2.0 * config.speed_gain);

        // Same tick, same paddle: already heading away
        assert!(!bounce_off_paddle(&mut ball, &right, &config, &mut events));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 300.0);

        // Should not panic or error
        check_collisions(&mut world, &arena, &config, &mut events);

        assert!(events.is_empty());
    }
}
