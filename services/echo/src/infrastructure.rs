// Infrastructure layer modules
pub mod event_logger;
pub mod logging;
pub mod logging_config;

// Re-exports
pub use event_logger::{MemoryEventLogger, TracingEventLogger};
pub use logging::init_logging;
pub use logging_config::{LOG_FORMAT_ENV, LogFormat, LoggingConfig, LoggingConfigError};
