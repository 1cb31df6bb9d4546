use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tokio::time::interval;

use snake_engine::ScoreRecorder;
use snake_engine::log;
use snake_engine::snake::{InputAction, SessionControl, SnakeSession, TickOutcome};

use crate::input::decode_line;
use crate::render;

/// Drives one session until the player quits or stdin closes. Actions read
/// between two timer ticks are submitted together as that tick's batch.
pub async fn run_snake_game<R: ScoreRecorder>(mut session: SnakeSession<R>) {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let stdin = std::io::stdin();
    thread::spawn(move || read_actions(stdin.lock(), action_tx));

    let mut tick_timer = interval(session.settings().tick_interval);
    let mut pending: Vec<InputAction> = Vec::new();

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                let batch = std::mem::take(&mut pending);
                if session.submit_action_batch(batch) == SessionControl::Quit {
                    log!("Player quit with score {}", session.score());
                    break;
                }

                if let TickOutcome::GameOver { reason, score, new_high_score } = session.tick() {
                    log!("Game over: snake {}. Score {} (new high score: {})", reason, score, new_high_score);
                }

                print!("{}", render::frame(&session));
            }
            action = action_rx.recv() => {
                match action {
                    Some(action) => pending.push(action),
                    None => {
                        log!("Input closed, leaving the game");
                        break;
                    }
                }
            }
        }
    }
}

/// Runs on its own thread: a blocked stdin read must not hold up runtime shutdown.
fn read_actions<B: BufRead>(reader: B, action_tx: mpsc::UnboundedSender<InputAction>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                return;
            }
        };

        for action in decode_line(&line) {
            if action_tx.send(action).is_err() {
                return;
            }
        }
    }
}
