use crate::{Arena, Ball, Config, Events, GameEvent, Score, ServeRng, Side};
use hecs::World;

/// Check if ball left the arena (scoring).
///
/// The ball must be fully past a goal line. The scorer gets one point and the
/// ball is served again toward the scorer's side. Returns the scoring side.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn ServeRng,
) -> Option<Side> {
    let half = config.ball_size / 2.0;
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = if ball.pos.x + half < 0.0 {
            Side::Right
        } else if ball.pos.x - half > arena.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(side);
        events.push(GameEvent::Goal(side));
        ball.serve(arena.ball_spawn(), config, rng, Some(side.direction()));
        log::debug!(
            "{:?} scored ({}-{}), serving at {:?}",
            side,
            score.left,
            score.right,
            ball.vel
        );
        scorer = Some(side);
    }

    scorer
}

/// Emit a win once either side reaches the win score
pub fn check_winner(score: &Score, config: &Config, events: &mut Events) -> Option<Side> {
    let winner = score.has_winner(config.win_score)?;
    events.push(GameEvent::Win(winner));
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameRng, Score};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Arena, Score, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let arena = Arena::new(&config);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, arena, score, events, rng)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-8.0, 300.0), Vec2::new(-320.0, 0.0));

        let scorer = check_scoring(&mut world, &arena, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.as_slice(), &[GameEvent::Goal(Side::Right)]);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(arena.width + 8.0, 300.0),
            Vec2::new(320.0, 0.0),
        );

        check_scoring(&mut world, &arena, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.contains(&GameEvent::Goal(Side::Left)));
    }

    #[test]
    fn test_partially_out_is_not_a_goal() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        // Center past the line, right edge still inside
        create_ball(&mut world, Vec2::new(-6.0, 300.0), Vec2::new(-320.0, 0.0));

        let scorer = check_scoring(&mut world, &arena, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_ball_resets_toward_scorer() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-8.0, 300.0), Vec2::new(-320.0, 0.0));
        check_scoring(&mut world, &arena, &config, &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, arena.ball_spawn(), "Ball should reset to center");
            assert_eq!(ball.vel.x, config.ball_speed, "Serve heads to the right");
            assert!(ball.vel.y.abs() <= config.ball_speed * config.serve_angle.sin());
        }

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = arena.width + 8.0;
        }
        check_scoring(&mut world, &arena, &config, &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -config.ball_speed, "Serve heads to the left");
        }
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, arena.center(), Vec2::new(320.0, 40.0));

        check_scoring(&mut world, &arena, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(events.is_empty(), "No scoring events");
    }

    #[test]
    fn test_check_winner() {
        let config = Config::new();
        let mut events = Events::new();

        assert_eq!(check_winner(&Score { left: 9, right: 9 }, &config, &mut events), None);
        assert!(events.is_empty());

        let score = Score { left: 9, right: 10 };
        assert_eq!(check_winner(&score, &config, &mut events), Some(Side::Right));
        assert_eq!(events.as_slice(), &[GameEvent::Win(Side::Right)]);
    }
}
