use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or writing a parameter file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("failed to access parameter file: {0}")]
    Io(#[from] std::io::Error),
    /// The file exists but does not parse as parameters.
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation and evaluation parameters.
///
/// Defaults reproduce the classic 600x600 tuning. The `render` and
/// `debug_overlay` flags are carried here so front-ends share one explicit
/// configuration object; the core itself never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Play area width in pixels.
    pub width: f32,
    /// Play area height in pixels.
    pub height: f32,
    /// Downward acceleration added to the bird's velocity each step.
    pub gravity: f32,
    /// Velocity assigned on a flap (negative = upward).
    pub flap_impulse: f32,
    /// Horizontal pipe velocity per step (negative = leftward scroll).
    pub pipe_speed: f32,
    /// Horizontal gap between consecutive pipe spawns.
    pub pipe_distance: f32,
    /// Vertical size of the gap the bird must fly through.
    pub pipe_gap: f32,
    /// Velocity magnitude cap.
    pub max_velocity: f32,
    /// Score at which an episode is stopped, as a safety valve against
    /// controllers that would otherwise never die.
    pub score_cap: u32,
    /// Fitness awarded per survived step.
    pub step_reward: f64,
    /// Generations an external optimizer is expected to run.
    pub generations: u32,
    /// Evaluate generations on a thread pool instead of serially.
    pub parallel: bool,
    /// Front-ends draw the world when set.
    pub render: bool,
    /// Front-ends draw the score/fitness overlay when set.
    pub debug_overlay: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            gravity: 0.45,
            flap_impulse: -7.0,
            pipe_speed: -3.0,
            pipe_distance: 200.0,
            pipe_gap: 150.0,
            max_velocity: 13.0,
            score_cap: 1000,
            step_reward: 0.01,
            generations: 150,
            parallel: true,
            render: false,
            debug_overlay: false,
        }
    }
}

impl Params {
    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
