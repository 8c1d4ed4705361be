// src/tests/router_tests/pricing_page_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, serve_request};
use crate::tests::utils::{body_string, get, vip_state};

#[test]
fn home_page_renders() {
    let resp = handle(get("/"), &vip_state()).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Landlord ID"));
}

#[test]
fn lookup_redirects_to_landlord_packages() {
    let resp = handle(get("/lookup?landlord=l1"), &vip_state()).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/landlords/l1/packages");
}

#[test]
fn lookup_rejects_unsafe_ids() {
    let err = handle(get("/lookup?landlord=..%2Fadmin"), &vip_state()).err().unwrap();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn packages_page_defaults_to_month() {
    let resp = handle(get("/landlords/l1/packages"), &vip_state()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Vip1"));
    assert!(body.contains("Tin Thường"));
    assert!(body.contains("2,500,000 VNĐ"));
    assert!(body.contains("100,000 VNĐ"));
    assert!(body.contains("<td>0 VNĐ</td>"));
    // No day package for Tin Thường.
    assert!(body.contains("N/A"));
    assert!(body.contains(r#"<option value="month" selected>"#));
}

#[test]
fn packages_page_marks_missing_week_prices() {
    let resp = handle(get("/landlords/l1/packages?duration=week"), &vip_state()).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Vip1 is not offered for Week"));
    assert!(body.contains("Tin Thường is not offered for Week"));
    assert!(!body.contains("Buy Vip1"));
}

#[test]
fn packages_page_accepts_explicit_days() {
    let resp = handle(get("/landlords/l1/packages?duration=1"), &vip_state()).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Buy Vip1 (100,000 VNĐ)"));
}

#[test]
fn unknown_duration_is_a_bad_request() {
    let err = handle(get("/landlords/l1/packages?duration=quarter"), &vip_state()).err().unwrap();
    assert_eq!(err.status(), 400);
}

#[test]
fn unknown_landlord_is_not_found() {
    let err = handle(get("/landlords/nobody/packages"), &vip_state()).err().unwrap();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn backend_outage_is_bad_gateway() {
    let err = handle(get("/landlords/down/packages"), &vip_state()).err().unwrap();
    assert_eq!(err.status(), 502);
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(get("/rooms"), &vip_state()).err().unwrap();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn signed_day_count_is_a_bad_request() {
    let err = handle(get("/landlords/l1/packages?duration=%2B7"), &vip_state()).err().unwrap();
    assert_eq!(err.status(), 400);
}

#[test]
fn serve_request_renders_errors_as_html_pages() {
    let resp = serve_request(get("/landlords/nobody/packages"), &vip_state());
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = serve_request(get("/landlords/down/packages"), &vip_state());
    assert_eq!(resp.status(), 502);

    let resp = serve_request(get("/landlords/l1/packages"), &vip_state());
    assert_eq!(resp.status(), 200);
}
