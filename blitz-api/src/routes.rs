/// Current reading of every load with classifier labels and the running cost.
pub const STATUS_PATH: &str = "/api/status";

/// Synthetic hourly history for the dashboard chart.
pub const HISTORY_PATH: &str = "/api/history";

/// Liveness check with the number of loaded models.
pub const HEALTH_PATH: &str = "/api/health";
