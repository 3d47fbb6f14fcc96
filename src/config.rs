use std::path::PathBuf;

/// Input/output paths for a conversion run. Each binary ships with
/// hardcoded defaults and lets the environment override them.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_env(input_var: &str, output_var: &str) -> Self {
        let input = std::env::var(input_var).ok().map(PathBuf::from);
        let output = std::env::var(output_var).ok().map(PathBuf::from);

        Self { input, output }
    }

    pub fn input_or(&self, default: &str) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from(default))
    }

    pub fn output_or(&self, default: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(default))
    }
}
