pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod task;

pub use client::ApiClient;
pub use endpoint::{ApiRequest, Endpoint};
pub use error::ApiError;
pub use task::{ApiEvent, Dispatch, ThreadDispatcher};
