// src/pricing/grid.rs

use crate::pricing::format::{format_limit_post, format_price, NOT_AVAILABLE};
use crate::pricing::index::PackagePriceIndex;

/// Pivot of an index: one row per type, one column per duration.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGrid {
    pub durations: Vec<u32>,
    pub rows: Vec<PriceRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub service_type: String,
    /// Aligned with `PriceGrid::durations`.
    pub cells: Vec<String>,
    /// Post cap from the shortest duration that prices this type.
    pub limit_post: String,
}

impl PriceGrid {
    pub fn from_index(index: &PackagePriceIndex) -> Self {
        let durations = index.all_durations().to_vec();

        let rows = index
            .all_types()
            .iter()
            .map(|service_type| {
                let cells = durations
                    .iter()
                    .map(|&days| {
                        index
                            .lookup(service_type, days)
                            .map(|e| format_price(e.price))
                            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                    })
                    .collect();

                let limit_post = durations
                    .iter()
                    .find_map(|&days| index.lookup(service_type, days))
                    .map(|e| format_limit_post(e.limit_post))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());

                PriceRow {
                    service_type: service_type.clone(),
                    cells,
                    limit_post,
                }
            })
            .collect();

        Self { durations, rows }
    }

    pub fn headers(&self) -> Vec<String> {
        self.durations.iter().map(|&d| duration_label(d)).collect()
    }
}

pub fn duration_label(days: u32) -> String {
    match days {
        1 => "Day".to_string(),
        7 => "Week".to_string(),
        30 => "Month".to_string(),
        n => format!("{n} days"),
    }
}
