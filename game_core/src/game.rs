//! Match driver
//!
//! [`Game`] owns everything a match needs: the ECS world with the paddles and
//! the ball, the score, the phase and the serve random source. The frame loop
//! calls [`Game::advance`] once per frame and forwards commands from
//! [`InputState`] to [`Game::handle_command`].

use hecs::World;
use serde::{Deserialize, Serialize};

use crate::{
    create_ball, create_paddle, serve_velocity, step, Aabb, Arena, Ball, Command, Config,
    ConfigError, EventSink, Events, GameEvent, GameRng, InputState, KeyEvent, Paddle, Phase, PhaseAction,
    Score, ServeRng, Side,
};

/// Read-only view of a match for renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball: Aabb,
    pub score: Score,
    pub phase: Phase,
    pub winner: Option<Side>,
}

pub struct Game {
    world: World,
    arena: Arena,
    config: Config,
    score: Score,
    phase: Phase,
    winner: Option<Side>,
    events: Events,
    rng: Box<dyn ServeRng>,
}

impl Game {
    /// Start a match: paddles centered, ball served in a random direction.
    ///
    /// Fails if `config` does not describe a playable arena.
    pub fn new(config: Config, rng: impl ServeRng + 'static) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng: Box<dyn ServeRng> = Box::new(rng);
        let arena = Arena::new(&config);
        let world = spawn_world(&arena, &config, rng.as_mut());
        log::info!(
            "match started: {}x{} arena, first to {}",
            arena.width,
            arena.height,
            config.win_score
        );

        Ok(Self {
            world,
            arena,
            config,
            score: Score::new(),
            phase: Phase::Playing,
            winner: None,
            events: Events::new(),
            rng,
        })
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::new(seed))
    }

    /// Advance the match by `dt` seconds and return this tick's events.
    ///
    /// Nothing moves unless the match is playing. Negative or non-finite `dt`
    /// counts as zero.
    pub fn advance(&mut self, input: &InputState, dt: f32) -> &[GameEvent] {
        self.events.clear();
        if !self.phase.is_running() {
            return self.events.as_slice();
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let winner = step(
            &mut self.world,
            input,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            self.rng.as_mut(),
            dt,
        );

        if let Some(side) = winner {
            self.finish(side);
        }
        self.events.as_slice()
    }

    /// Advance, then hand every event of the tick to `sink` in order
    pub fn advance_with_sink(&mut self, input: &InputState, dt: f32, sink: &mut dyn EventSink) {
        self.advance(input, dt);
        for event in self.events.as_slice() {
            sink.notify(event);
        }
    }

    /// Feed a key transition through `input` and act on any resulting command
    pub fn handle_key(&mut self, input: &mut InputState, event: KeyEvent) -> Option<Command> {
        let command = input.handle(event)?;
        self.handle_command(command);
        Some(command)
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Pause => {
                self.toggle_pause();
            }
            Command::Restart => self.restart(),
            // The driver owns the loop
            Command::Quit => {}
        }
    }

    /// Pause or resume. Returns false when the phase does not allow it.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase.next(PhaseAction::TogglePause) {
            Some(next) => {
                self.phase = next;
                log::info!("phase -> {:?}", next);
                true
            }
            None => false,
        }
    }

    /// Throw the old world away and start a new match
    pub fn restart(&mut self) {
        self.world = spawn_world(&self.arena, &self.config, self.rng.as_mut());
        self.score = Score::new();
        self.winner = None;
        self.events.clear();
        if let Some(next) = self.phase.next(PhaseAction::Restart) {
            self.phase = next;
        }
        log::info!("match restarted");
    }

    fn finish(&mut self, winner: Side) {
        if let Some(next) = self.phase.next(PhaseAction::Win) {
            self.phase = next;
            self.winner = Some(winner);
            log::info!(
                "{:?} wins {}-{}",
                winner,
                self.score.left,
                self.score.right
            );
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events of the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        self.events.as_slice()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_rect(&self, side: Side) -> Option<Aabb> {
        self.paddle(side).map(|paddle| paddle.rect(&self.config))
    }

    pub fn ball_rect(&self) -> Option<Aabb> {
        self.ball().map(|ball| ball.rect(self.config.ball_size))
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Some(Snapshot {
            arena: self.arena,
            left_paddle: self.paddle_rect(Side::Left)?,
            right_paddle: self.paddle_rect(Side::Right)?,
            ball: self.ball_rect()?,
            score: self.score,
            phase: self.phase,
            winner: self.winner,
        })
    }
}

/// Fresh world: both paddles centered, ball on the spawn point with a random serve
fn spawn_world(arena: &Arena, config: &Config, rng: &mut dyn ServeRng) -> World {
    let mut world = World::new();
    for side in [Side::Left, Side::Right] {
        create_paddle(&mut world, side, arena.paddle_spawn(side, config).y);
    }
    let vel = serve_velocity(config, rng, None);
    create_ball(&mut world, arena.ball_spawn(), vel);
    log::debug!("ball served at {:?}", vel);
    world
}
