// api/client.rs
use crate::api::{ApiError, PackageSource};
use crate::config::Config;
use crate::pricing::ServicePackage;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashSet;
use url::Url;

const USER_AGENT: &str = concat!("rental-pricing/", env!("CARGO_PKG_VERSION"));

/// Thin blocking client over the rental backend's REST API.
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(cfg: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.api_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.api_base_url.clone(),
        })
    }

    fn packages_url(&self, landlord_id: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["landlords", landlord_id, "packages"]);
        Ok(url)
    }
}

impl PackageSource for BackendClient {
    fn fetch_packages(&self, landlord_id: &str) -> Result<Vec<ServicePackage>, ApiError> {
        let url = self.packages_url(landlord_id)?;
        log::debug!("GET {url}");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            log::warn!("backend {status} for {url}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let packages = decode_packages(&text)?;
        log::info!(
            "fetched {} package(s) for landlord {landlord_id}",
            packages.len()
        );
        Ok(packages)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackagesPayload {
    Bare(Vec<ServicePackage>),
    Envelope { data: Vec<ServicePackage> },
}

/// Decodes and validates a package list. Accepts a bare array or `{ "data": [...] }`.
pub fn decode_packages(body: &str) -> Result<Vec<ServicePackage>, ApiError> {
    let payload: PackagesPayload =
        serde_json::from_str(body).map_err(|e| ApiError::JsonParse(e.to_string()))?;

    let packages = match payload {
        PackagesPayload::Bare(list) => list,
        PackagesPayload::Envelope { data } => data,
    };

    for package in &packages {
        if package.duration_days == 0 {
            return Err(ApiError::InvalidPayload(format!(
                "package {} has a zero duration",
                package.package_id
            )));
        }

        let mut types = HashSet::new();
        for entry in &package.prices {
            if !types.insert(entry.service_type.as_str()) {
                return Err(ApiError::InvalidPayload(format!(
                    "package {} lists type {:?} twice",
                    package.package_id, entry.service_type
                )));
            }
        }
    }

    Ok(packages)
}
