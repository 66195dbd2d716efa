//! Run observability.

mod logging;

pub use logging::setup_logging;
