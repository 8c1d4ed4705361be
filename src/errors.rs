// errors.rs
use crate::api::ApiError;
use crate::pricing::PricingError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (backend API, pricing).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Price unavailable: {0}")]
    PriceUnavailable(String),

    #[error("Upstream Error: {0}")]
    Upstream(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PriceUnavailable(_) => 409,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

impl From<PricingError> for ServerError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::InvalidSelection(_) => ServerError::BadRequest(e.to_string()),
            PricingError::PriceUnavailable { .. } => ServerError::PriceUnavailable(e.to_string()),
        }
    }
}

impl From<ApiError> for ServerError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status: 404, .. } => ServerError::NotFound,
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
