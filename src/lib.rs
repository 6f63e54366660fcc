//! LogWindow: paged access to a static, per-user log dataset.
//!
//! The workspace is split in a few crates:
//!
//! * `logwindow-core`: errors, configuration and tracing setup
//! * `logwindow-protocol`: records and the show-logs wire types
//! * `logwindow-service`: dataset loading, anchor lookup, windowing and the HTTP API
//! * `logwindow-cli`: command line client

pub use logwindow_core::{ConfigError, CoreConfig, LogWindowError};
pub use logwindow_protocol::logs::{LogRecord, LogTimestamp, ShowLogsResponse, WindowRequest};
pub use logwindow_service::{get_window, Dataset, WindowError, WindowResult};
