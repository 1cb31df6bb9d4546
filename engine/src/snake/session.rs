use crate::high_score::ScoreRecorder;
use crate::session_rng::SessionRng;
use crate::{log, log_error};
use super::food::Food;
use super::input::InputAction;
use super::settings::SnakeSessionSettings;
use super::entity::Snake;
use super::types::{DeathReason, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// What the driver should do after a batch of actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moved,
    AteFood {
        score: u32,
    },
    GameOver {
        reason: DeathReason,
        score: u32,
        new_high_score: bool,
    },
}

pub struct SnakeSession<R: ScoreRecorder> {
    settings: SnakeSessionSettings,
    snake: Snake,
    food: Option<Food>,
    score: u32,
    state: SessionState,
    game_over_reason: Option<DeathReason>,
    new_high_score: bool,
    direction_changed_this_tick: bool,
    ticks: u64,
    rng: SessionRng,
    recorder: R,
}

impl<R: ScoreRecorder> SnakeSession<R> {
    pub fn new(settings: SnakeSessionSettings, rng: SessionRng, recorder: R) -> Self {
        let snake = Snake::new(
            settings.field_size,
            settings.initial_snake_length,
            settings.wall_collision_mode,
        );

        let mut session = Self {
            settings,
            snake,
            food: None,
            score: 0,
            state: SessionState::Playing,
            game_over_reason: None,
            new_high_score: false,
            direction_changed_this_tick: false,
            ticks: 0,
            rng,
            recorder,
        };
        session.reset();
        session
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(
            self.settings.field_size,
            self.settings.initial_snake_length,
            self.settings.wall_collision_mode,
        );
        self.score = 0;
        self.state = SessionState::Playing;
        self.game_over_reason = None;
        self.new_high_score = false;
        self.direction_changed_this_tick = false;
        self.ticks = 0;

        self.food = match Food::spawn(self.settings.field_size, &self.snake.occupied(), &mut self.rng) {
            Ok(food) => Some(food),
            Err(e) => {
                log_error!("Cannot start a game: {}", e);
                self.state = SessionState::GameOver;
                self.game_over_reason = Some(DeathReason::BoardFull);
                None
            }
        };

        log!("Game reset (seed {})", self.rng.seed());
    }

    /// Applies a batch of actions in arrival order. Only the first accepted
    /// direction change counts until the next tick.
    pub fn submit_action_batch<I>(&mut self, actions: I) -> SessionControl
    where
        I: IntoIterator<Item = InputAction>,
    {
        for action in actions {
            match self.state {
                SessionState::Playing => match action {
                    InputAction::Pause => {
                        self.state = SessionState::Paused;
                        log!("Game paused");
                    }
                    InputAction::Restart => self.reset(),
                    InputAction::Quit => {}
                    InputAction::MoveUp
                    | InputAction::MoveDown
                    | InputAction::MoveLeft
                    | InputAction::MoveRight => {
                        if self.direction_changed_this_tick {
                            continue;
                        }
                        if let Some(direction) = action.direction()
                            && self.snake.change_direction(direction)
                        {
                            self.direction_changed_this_tick = true;
                        }
                    }
                },
                SessionState::Paused => match action {
                    InputAction::Pause => {
                        self.state = SessionState::Playing;
                        self.snake.reset_buffered_direction();
                        self.direction_changed_this_tick = false;
                        log!("Game unpaused");
                    }
                    InputAction::Restart => self.reset(),
                    InputAction::Quit => return SessionControl::Quit,
                    _ => {}
                },
                SessionState::GameOver => match action {
                    InputAction::Restart => self.reset(),
                    InputAction::Quit => return SessionControl::Quit,
                    _ => {}
                },
            }
        }

        SessionControl::Continue
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state != SessionState::Playing {
            return TickOutcome::Idle;
        }

        self.ticks += 1;
        self.snake.move_forward();
        self.direction_changed_this_tick = false;

        if let Some(reason) = self.snake.collision() {
            return self.end_game(reason);
        }

        let Some(food) = self.food.as_mut() else {
            return TickOutcome::Moved;
        };

        if !self.snake.ate_food(food) {
            return TickOutcome::Moved;
        }

        self.snake.grow();
        self.score = self.score.saturating_add(self.settings.points_per_food);

        if let Err(e) = food.respawn(&self.snake.occupied(), &mut self.rng) {
            log!("{} at score {}", e, self.score);
            self.food = None;
            return self.end_game(DeathReason::BoardFull);
        }

        log!("Score: {}, Snake length: {}", self.score, self.snake.len());
        TickOutcome::AteFood { score: self.score }
    }

    fn end_game(&mut self, reason: DeathReason) -> TickOutcome {
        self.state = SessionState::GameOver;
        self.game_over_reason = Some(reason);
        self.new_high_score = self
            .recorder
            .record_score(self.score, &self.settings.player_name);

        if self.new_high_score {
            log!("Snake {} at {}. New high score: {}", reason, self.snake.head(), self.score);
        } else {
            log!("Snake {} at {}. Game over. Score: {}", reason, self.snake.head(), self.score);
        }

        TickOutcome::GameOver {
            reason,
            score: self.score,
            new_high_score: self.new_high_score,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food.as_ref().map(Food::position)
    }

    pub fn game_over_reason(&self) -> Option<DeathReason> {
        self.game_over_reason
    }

    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn high_score(&self) -> u32 {
        self.recorder.best_score()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    fn set_food(&mut self, position: Position) {
        self.food = Some(Food::at(position, self.settings.field_size));
    }
}
