mod input;
mod scheduler;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use snake_engine::config::ConfigManager;
use snake_engine::{
    EngineSettings, FileHighScoreStore, HighScoreStore, SessionRng, SnakeEngine,
    WallCollisionMode, log, logger,
};

#[derive(Parser)]
#[command(name = "snake_cli", about = "Headless snake runner driven by stdin commands")]
struct Args {
    /// YAML engine settings; defaults are used when omitted or missing.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "snake_high_score.yaml")]
    high_score_file: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
    /// Walls wrap around instead of ending the game.
    #[arg(long)]
    wrap: bool,
    /// Start playing immediately instead of waiting for `start`.
    #[arg(long)]
    autostart: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut settings = match &args.config {
        Some(path) => ConfigManager::<_, EngineSettings>::from_yaml_file(path).get_config()?,
        None => EngineSettings::default(),
    };
    if args.wrap {
        settings.wall_collision_mode = WallCollisionMode::WrapAround;
    }

    let store = Arc::new(FileHighScoreStore::new(&args.high_score_file));
    let initial_high_score = store.load().unwrap_or_else(|e| {
        log!("Failed to load high score, starting from 0: {}", e);
        0
    });

    let rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    let sink = store.clone();
    let engine = SnakeEngine::new(settings, rng, initial_high_score)?.on_high_score(move |score| {
        if let Err(e) = sink.save(score) {
            log!("Failed to save high score {}: {}", score, e);
        }
    });

    log!("Commands: w/a/s/d or up/down/left/right, start, p (pause), r (reset), q (quit)");
    session::run(engine, args.autostart).await?;

    Ok(())
}
