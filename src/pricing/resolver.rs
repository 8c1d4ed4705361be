// src/pricing/resolver.rs

use crate::pricing::format::{format_price, NOT_AVAILABLE};
use crate::pricing::index::PackagePriceIndex;
use crate::pricing::pricing_error::PricingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A user's choice of billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSelection {
    Day,
    Week,
    Month,
    /// Explicit day count; passed through untouched.
    Days(u32),
}

impl FromStr for DurationSelection {
    type Err = PricingError;

    /// Accepts `day`, `week`, `month` (any ASCII case) or a positive day count
    /// written as plain decimal digits; no sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();

        if raw.eq_ignore_ascii_case("day") {
            return Ok(Self::Day);
        }
        if raw.eq_ignore_ascii_case("week") {
            return Ok(Self::Week);
        }
        if raw.eq_ignore_ascii_case("month") {
            return Ok(Self::Month);
        }

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PricingError::InvalidSelection(s.to_string()));
        }

        match raw.parse::<u32>() {
            Ok(days) if days > 0 => Ok(Self::Days(days)),
            _ => Err(PricingError::InvalidSelection(s.to_string())),
        }
    }
}

impl fmt::Display for DurationSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Days(n) => write!(f, "{n}"),
        }
    }
}

/// Everything a payment flow needs to start a purchase. Never partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseIntent {
    pub package_id: String,
    pub service_detail_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
    #[serde(rename = "type")]
    pub service_type: String,
    pub duration_days: u32,
    pub price: u64,
}

/// Fixed billing periods the backend produces.
pub fn resolve_duration(selection: DurationSelection) -> u32 {
    match selection {
        DurationSelection::Day => 1,
        DurationSelection::Week => 7,
        DurationSelection::Month => 30,
        DurationSelection::Days(n) => n,
    }
}

/// Price cell text for `service_type` at `selection`, or `N/A` when nothing matches.
pub fn get_display_price(
    index: &PackagePriceIndex,
    service_type: &str,
    selection: DurationSelection,
) -> String {
    index
        .lookup(service_type, resolve_duration(selection))
        .map(|entry| format_price(entry.price))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Never falls back to another duration's price.
pub fn select_for_purchase(
    index: &PackagePriceIndex,
    service_type: &str,
    selection: DurationSelection,
) -> Result<PurchaseIntent, PricingError> {
    let duration_days = resolve_duration(selection);

    let unavailable = || PricingError::PriceUnavailable {
        service_type: service_type.to_string(),
        duration_days,
    };

    let entry = index.lookup(service_type, duration_days).ok_or_else(unavailable)?;
    let package_id = index
        .package_id_for(service_type, duration_days)
        .ok_or_else(unavailable)?;

    Ok(PurchaseIntent {
        package_id: package_id.to_string(),
        service_detail_id: entry.service_detail_id.clone(),
        price_id: entry.price_id.clone(),
        service_type: entry.service_type.clone(),
        duration_days,
        price: entry.price,
    })
}

/// `select_for_purchase` for raw selector text, e.g. a submitted form field.
pub fn select_for_purchase_str(
    index: &PackagePriceIndex,
    service_type: &str,
    selection: &str,
) -> Result<PurchaseIntent, PricingError> {
    select_for_purchase(index, service_type, selection.parse()?)
}
