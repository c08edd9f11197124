// Domain layer modules
pub mod echo_response;
pub mod event_logger;

// Re-exports
pub use echo_response::{
    APPLICATION_JSON, CONTENT_TYPE_HEADER, EchoBody, EchoResponse, GREETING_MESSAGE, STATUS_OK,
};
pub use event_logger::EventLogger;
