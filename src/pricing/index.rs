// src/pricing/index.rs

use crate::pricing::models::{PriceEntry, ServicePackage};
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(Debug, Clone)]
struct IndexedPrice {
    package_id: String,
    entry: PriceEntry,
}

/// Read-only view over one fetched package list, keyed by `(type, duration_days)`.
///
/// Rebuilt from scratch on every fetch; never mutated after `build`.
#[derive(Debug, Clone, Default)]
pub struct PackagePriceIndex {
    prices: HashMap<String, HashMap<u32, IndexedPrice>>,
    durations: Vec<u32>,
    types: Vec<String>,
}

impl PackagePriceIndex {
    /// Later packages overwrite earlier ones on a duplicate `(type, duration)` pair.
    pub fn build(packages: &[ServicePackage]) -> Self {
        let mut prices: HashMap<String, HashMap<u32, IndexedPrice>> = HashMap::new();
        let mut durations = BTreeSet::new();
        let mut types = Vec::new();
        let mut seen_types = HashSet::new();

        for package in packages {
            durations.insert(package.duration_days);

            for entry in &package.prices {
                if seen_types.insert(entry.service_type.clone()) {
                    types.push(entry.service_type.clone());
                }

                let replaced = prices.entry(entry.service_type.clone()).or_default().insert(
                    package.duration_days,
                    IndexedPrice {
                        package_id: package.package_id.clone(),
                        entry: entry.clone(),
                    },
                );

                if replaced.is_some() {
                    log::debug!(
                        "duplicate price for {:?} over {} day(s); keeping package {}",
                        entry.service_type,
                        package.duration_days,
                        package.package_id
                    );
                }
            }
        }

        Self {
            prices,
            durations: durations.into_iter().collect(),
            types,
        }
    }

    pub fn lookup(&self, service_type: &str, duration_days: u32) -> Option<&PriceEntry> {
        self.get(service_type, duration_days).map(|p| &p.entry)
    }

    /// Id of the package the looked-up price came from.
    pub fn package_id_for(&self, service_type: &str, duration_days: u32) -> Option<&str> {
        self.get(service_type, duration_days)
            .map(|p| p.package_id.as_str())
    }

    /// Distinct durations, ascending.
    pub fn all_durations(&self) -> &[u32] {
        &self.durations
    }

    /// Distinct types, in the order they were first seen.
    pub fn all_types(&self) -> &[String] {
        &self.types
    }

    fn get(&self, service_type: &str, duration_days: u32) -> Option<&IndexedPrice> {
        self.prices
            .get(service_type)
            .and_then(|by_duration| by_duration.get(&duration_days))
    }
}
