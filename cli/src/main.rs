mod input;
mod render;
mod runner;

use clap::Parser;
use snake_engine::game_config::{self, CONFIG_FILE_NAME};
use snake_engine::snake::{SnakeSession, SnakeSessionSettings};
use snake_engine::{log, logger, HighScoreLedger, SessionRng};

#[derive(Parser)]
#[command(name = "snake_cli")]
struct Args {
    /// YAML config file; created with defaults when missing.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: String,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Name stored with high scores, overriding the config.
    #[arg(long)]
    player: Option<String>,

    /// Leaving the field ends the game instead of wrapping around.
    #[arg(long)]
    wall_collision: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = game_config::get_config_manager(&args.config).load_or_init();
    if let Some(player) = args.player {
        config.player_name = player;
    }
    if args.wall_collision {
        config.wall_collision = true;
    }

    let ledger = HighScoreLedger::from_yaml_file(&config.high_score_file, config.max_high_scores);
    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let session = SnakeSession::new(SnakeSessionSettings::from(&config), rng, ledger);

    log!(
        "Starting {}x{} game at {} fps",
        config.grid_width(),
        config.grid_height(),
        config.fps
    );
    runner::run_snake_game(session).await;
    log!("Shutting down Snake");

    Ok(())
}
