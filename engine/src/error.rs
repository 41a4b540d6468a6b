use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    GridTooSmall { grid_size: usize, min: usize },
    GridTooLarge { grid_size: usize, max: usize },
    ZeroMinSpeed,
    SpeedIncrementTooLarge { increment_ms: u32, initial_speed_ms: u32 },
    MinSpeedAboveInitial { min_speed_ms: u32, initial_speed_ms: u32 },
    ZeroScorePerFood,
    ScorePerFoodTooLarge { score_per_food: u32, max: u32 },
    InitialLengthOutOfRange { length: usize, max: usize },
    Read(String),
    Write(String),
    Serialize(String),
    Deserialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { grid_size, min } => {
                write!(f, "Grid size {} is too small, must be at least {}", grid_size, min)
            }
            ConfigError::GridTooLarge { grid_size, max } => {
                write!(f, "Grid size {} is too large, must be at most {}", grid_size, max)
            }
            ConfigError::ZeroMinSpeed => write!(f, "Minimum speed must be a positive interval"),
            ConfigError::SpeedIncrementTooLarge { increment_ms, initial_speed_ms } => write!(
                f,
                "Speed increment ({}ms) must be smaller than the initial speed ({}ms)",
                increment_ms, initial_speed_ms
            ),
            ConfigError::MinSpeedAboveInitial { min_speed_ms, initial_speed_ms } => write!(
                f,
                "Minimum speed ({}ms) cannot exceed the initial speed ({}ms)",
                min_speed_ms, initial_speed_ms
            ),
            ConfigError::ZeroScorePerFood => write!(f, "Score per food must be positive"),
            ConfigError::ScorePerFoodTooLarge { score_per_food, max } => {
                write!(f, "Score per food {} is too large, must be at most {}", score_per_food, max)
            }
            ConfigError::InitialLengthOutOfRange { length, max } => {
                write!(f, "Initial snake length {} must be between 1 and {}", length, max)
            }
            ConfigError::Read(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Write(e) => write!(f, "Failed to write config file: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Deserialize(e) => write!(f, "Failed to deserialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
