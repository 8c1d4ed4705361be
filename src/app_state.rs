use crate::api::PackageSource;

/// Shared by every astra worker; holds nothing mutable.
pub struct AppState {
    pub packages: Box<dyn PackageSource>,
}

impl AppState {
    pub fn new(packages: impl PackageSource + 'static) -> Self {
        Self {
            packages: Box::new(packages),
        }
    }
}
