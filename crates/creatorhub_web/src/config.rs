use tracing::level_filters::LevelFilter;

/// Settings fixed at build time. Nothing is read from the environment at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub max_log_level: LevelFilter,
    pub title: &'static str,
}

impl AppConfig {
    pub fn for_build() -> Self {
        let max_log_level = if cfg!(debug_assertions) {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };

        Self {
            max_log_level,
            title: "Creatorhub",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_build()
    }
}
