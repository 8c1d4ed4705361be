mod api_error;
mod client;
mod source;

pub use api_error::ApiError;
pub use client::BackendClient;
pub use source::PackageSource;
