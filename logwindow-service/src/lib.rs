//! LogWindow service - paged access to a static per-user log dataset.

pub mod anchor;
pub mod api;
pub mod api_docs;
pub mod dataset;
pub mod error;
pub mod paging;
pub mod window;

pub use api::{build_router, start_service, ServiceHandle};
pub use dataset::{Dataset, UserLogView};
pub use error::WindowError;
pub use paging::{get_window, WindowResult};
pub use window::{ScrollBudget, Window};
