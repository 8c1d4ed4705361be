use crate::api::{ApiError, PackageSource};
use crate::app_state::AppState;
use crate::pricing::{PriceEntry, ServicePackage};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Serves canned packages for landlord "l1"; every other id is a backend 404.
pub struct FixtureSource {
    pub packages: Vec<ServicePackage>,
}

impl PackageSource for FixtureSource {
    fn fetch_packages(&self, landlord_id: &str) -> Result<Vec<ServicePackage>, ApiError> {
        match landlord_id {
            "l1" => Ok(self.packages.clone()),
            "down" => Err(ApiError::Network("connection refused".into())),
            _ => Err(ApiError::Status {
                status: 404,
                body: "no such landlord".into(),
            }),
        }
    }
}

pub fn price(service_type: &str, price: u64, detail: &str) -> PriceEntry {
    PriceEntry {
        service_type: service_type.into(),
        price,
        limit_post: None,
        service_detail_id: detail.into(),
        price_id: None,
    }
}

/// Day and month packages for "Vip1", month only for "Tin Thường". No week package.
pub fn vip_state() -> AppState {
    AppState::new(FixtureSource {
        packages: vec![
            ServicePackage {
                package_id: "pkg-1".into(),
                duration_days: 1,
                prices: vec![price("Vip1", 100_000, "sd-vip-1")],
            },
            ServicePackage {
                package_id: "pkg-30".into(),
                duration_days: 30,
                prices: vec![
                    price("Vip1", 2_500_000, "sd-vip-30"),
                    PriceEntry {
                        limit_post: Some(10),
                        price_id: Some("pr-7".into()),
                        ..price("Tin Thường", 0, "sd-normal-30")
                    },
                ],
            },
        ],
    })
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = Request::new(Body::from(form.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "content-type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
