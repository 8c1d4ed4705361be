pub mod error;
pub mod home;
pub mod pricing;

pub use error::error_page;
pub use home::home_page;
pub use pricing::{pricing_page, PricingVm};
