use snake_engine::{Direction, SnakeEngine, log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    Start,
    TogglePause,
    Reset,
    Quit,
}

pub fn parse_command(line: &str) -> Result<InputCommand, String> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => InputCommand::Turn(Direction::Up),
        "s" | "down" => InputCommand::Turn(Direction::Down),
        "a" | "left" => InputCommand::Turn(Direction::Left),
        "d" | "right" => InputCommand::Turn(Direction::Right),
        "start" | "go" => InputCommand::Start,
        "p" | "pause" | "space" => InputCommand::TogglePause,
        "r" | "reset" => InputCommand::Reset,
        "q" | "quit" | "exit" => InputCommand::Quit,
        other => return Err(format!("Unknown command: {:?}", other)),
    };
    Ok(command)
}

/// Applies everything except `Quit`, which belongs to the run loop.
pub fn apply_command(engine: &mut SnakeEngine, command: InputCommand) {
    match command {
        InputCommand::Turn(direction) => {
            if !engine.set_direction(direction) {
                log!("Ignored turn {:?} while {:?}", direction, engine.status());
            }
        }
        InputCommand::Start => engine.start(),
        InputCommand::TogglePause => engine.toggle_pause(),
        InputCommand::Reset => engine.reset(),
        InputCommand::Quit => {}
    }
}
