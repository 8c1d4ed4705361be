use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("invalid duration selection: {0:?}")]
    InvalidSelection(String),

    #[error("no price for {service_type} over {duration_days} day(s)")]
    PriceUnavailable {
        service_type: String,
        duration_days: u32,
    },
}
