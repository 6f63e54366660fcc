mod failure;
mod query;
mod record;
mod response;
mod timestamp;

pub use failure::{FailureBody, FailureKind};
pub use query::{ParameterError, ShowLogsQuery, WindowRequest};
pub use record::LogRecord;
pub use response::ShowLogsResponse;
pub use timestamp::{LogTimestamp, TimestampError, TIMESTAMP_FORMAT};
