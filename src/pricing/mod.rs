mod format;
mod grid;
mod index;
mod models;
mod pricing_error;
mod resolver;

pub use format::NOT_AVAILABLE;
pub use grid::{duration_label, PriceGrid};
pub use index::PackagePriceIndex;
pub use models::{PriceEntry, ServicePackage};
pub use pricing_error::PricingError;
pub use resolver::{
    get_display_price, resolve_duration, select_for_purchase_str, DurationSelection,
};
