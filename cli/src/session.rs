use snake_engine::{GameState, SnakeEngine, TickOutcome, log};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::input::{InputCommand, apply_command, parse_command};
use crate::scheduler::TickScheduler;

pub async fn run(engine: SnakeEngine, autostart: bool) -> std::io::Result<()> {
    let engine = run_with_input(engine, BufReader::new(tokio::io::stdin()), autostart).await?;
    log!("Session finished. High score: {}", engine.state().high_score);
    Ok(())
}

/// Runs ticks and line commands on one task until `quit` or end of input,
/// then hands the engine back.
pub async fn run_with_input<R>(
    mut engine: SnakeEngine,
    input: R,
    autostart: bool,
) -> std::io::Result<SnakeEngine>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut scheduler = TickScheduler::new();

    if autostart {
        engine.start();
    }
    log!("{}", status_line(engine.state()));
    scheduler.sync(engine.status(), engine.state().speed_ms);

    loop {
        tokio::select! {
            _ = scheduler.tick() => {
                let outcome = engine.tick();
                report_outcome(engine.state(), outcome);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    log!("Input closed");
                    break;
                };
                match parse_command(&line) {
                    Ok(InputCommand::Quit) => break,
                    Ok(command) => {
                        apply_command(&mut engine, command);
                        log!("{}", status_line(engine.state()));
                    }
                    Err(e) => log!("{}", e),
                }
            }
        }

        scheduler.sync(engine.status(), engine.state().speed_ms);
    }

    Ok(engine)
}

fn report_outcome(state: &GameState, outcome: TickOutcome) {
    match outcome {
        TickOutcome::Idle | TickOutcome::Moved => {}
        TickOutcome::Ate { .. } => log!("{}", status_line(state)),
        TickOutcome::GameOver { final_score, reason, new_high_score } => {
            log!(
                "Game over: {:?}, final score {}{}",
                reason,
                final_score,
                if new_high_score { " (new high score!)" } else { "" }
            );
        }
    }
}

pub fn status_line(state: &GameState) -> String {
    let head = state.snake.head();
    format!(
        "{:?} | score {} | best {} | length {} | head ({}, {}) | {}ms",
        state.status,
        state.score,
        state.high_score,
        state.snake.len(),
        head.x,
        head.y,
        state.speed_ms
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use snake_engine::{EngineSettings, SessionRng, Status};
    use tokio::io::AsyncWriteExt;

    fn steady_engine() -> SnakeEngine {
        let settings = EngineSettings {
            speed_increment_ms: 0,
            ..EngineSettings::default()
        };
        SnakeEngine::new(settings, SessionRng::new(42), 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_tick_per_period() {
        let (mut client, server) = tokio::io::duplex(64);
        let session = tokio::spawn(run_with_input(steady_engine(), BufReader::new(server), true));

        tokio::time::sleep(Duration::from_millis(460)).await;
        client.write_all(b"q\n").await.unwrap();

        let engine = session.await.unwrap().unwrap();
        assert_eq!(engine.state().ticks, 3);
        assert_eq!(engine.status(), Status::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_command_stops_ticks() {
        let (mut client, server) = tokio::io::duplex(64);
        let session = tokio::spawn(run_with_input(steady_engine(), BufReader::new(server), true));

        tokio::time::sleep(Duration::from_millis(160)).await;
        client.write_all(b"p\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        client.write_all(b"quit\n").await.unwrap();

        let engine = session.await.unwrap().unwrap();
        assert_eq!(engine.state().ticks, 1);
        assert_eq!(engine.status(), Status::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_until_start_and_closed_input_ends_session() {
        let (mut client, server) = tokio::io::duplex(64);
        let session = tokio::spawn(run_with_input(steady_engine(), BufReader::new(server), false));

        tokio::time::sleep(Duration::from_millis(500)).await;
        client.write_all(b"jump\nstart\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(310)).await;
        drop(client);

        let engine = session.await.unwrap().unwrap();
        assert_eq!(engine.state().ticks, 2);
        assert_eq!(engine.status(), Status::Playing);
    }

    #[test]
    fn test_status_line_summarises_snapshot() {
        let engine = SnakeEngine::new(EngineSettings::default(), SessionRng::new(42), 30).unwrap();
        assert_eq!(
            status_line(engine.state()),
            "Idle | score 0 | best 30 | length 1 | head (10, 10) | 150ms"
        );
    }
}
