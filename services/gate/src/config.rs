/// Gate service configuration loaded from environment variables.
#[derive(Debug)]
pub struct GateConfig {
    /// Path of the issued-code store document (JSON). Env var: `CODES_PATH`.
    pub codes_path: String,
    /// TCP port to listen on (default 3110). Env var: `GATE_PORT`.
    pub gate_port: u16,
}

impl GateConfig {
    pub fn from_env() -> Self {
        Self {
            codes_path: std::env::var("CODES_PATH").expect("CODES_PATH"),
            gate_port: std::env::var("GATE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
        }
    }
}
