use crate::api::ApiError;
use crate::pricing::ServicePackage;

/// Anything that can hand back the decoded package list of one landlord.
pub trait PackageSource: Send + Sync {
    fn fetch_packages(&self, landlord_id: &str) -> Result<Vec<ServicePackage>, ApiError>;
}
