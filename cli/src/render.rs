use std::fmt::Write;

use snake_engine::ScoreRecorder;
use snake_engine::snake::{Position, SessionState, SnakeSession};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn frame<R: ScoreRecorder>(session: &SnakeSession<R>) -> String {
    let field_size = session.settings().field_size;
    let snake = session.snake();
    let food = session.food();
    let mut out = String::from(CLEAR_SCREEN);

    let border = format!("+{}+\n", "-".repeat(field_size.width));
    out.push_str(&border);
    for y in 0..field_size.height as i32 {
        out.push('|');
        for x in 0..field_size.width as i32 {
            let cell = Position::new(x, y);
            let glyph = if snake.head() == cell {
                '@'
            } else if snake.body().contains(&cell) {
                'o'
            } else if food == Some(cell) {
                '*'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push_str("|\n");
    }
    out.push_str(&border);

    let _ = writeln!(
        out,
        "Score: {}  High Score: {}  Length: {}",
        session.score(),
        session.high_score(),
        snake.len()
    );

    match session.state() {
        SessionState::Playing => out.push_str("w/a/s/d + Enter to steer, p to pause\n"),
        SessionState::Paused => out.push_str("PAUSED - p to continue, r to restart, q to quit\n"),
        SessionState::GameOver => {
            let _ = writeln!(out, "GAME OVER - Final Score: {}", session.score());
            if session.is_new_high_score() {
                out.push_str("NEW HIGH SCORE!\n");
            }
            out.push_str("r to restart, q to quit\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::SessionRng;
    use snake_engine::snake::{FieldSize, SnakeSessionSettings};

    struct NoScores;

    impl ScoreRecorder for NoScores {
        fn record_score(&mut self, _score: u32, _player: &str) -> bool {
            false
        }

        fn best_score(&self) -> u32 {
            0
        }
    }

    #[test]
    fn test_frame_draws_snake_and_status() {
        let settings = SnakeSessionSettings {
            field_size: FieldSize::new(8, 4),
            ..SnakeSessionSettings::default()
        };
        let session = SnakeSession::new(settings, SessionRng::new(1), NoScores);
        let text = frame(&session);

        let rows: Vec<&str> = text.trim_start_matches(CLEAR_SCREEN).lines().collect();
        assert_eq!(rows[0], "+--------+");
        assert_eq!(&rows[3][3..6], "oo@");
        assert_eq!(text.matches('*').count(), 1);
        assert!(text.contains("Score: 0  High Score: 0  Length: 3"));
    }
}
