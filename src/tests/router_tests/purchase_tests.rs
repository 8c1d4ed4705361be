// src/tests/router_tests/purchase_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, post_form, vip_state};
use serde_json::Value;

fn purchase(form: &str) -> (u16, Value) {
    let resp = handle(post_form("/landlords/l1/purchase", form), &vip_state()).unwrap();
    let status = resp.status().as_u16();
    let json = serde_json::from_str(&body_string(resp)).unwrap();
    (status, json)
}

#[test]
fn purchase_returns_intent_for_known_price() {
    let (status, json) = purchase("type=Vip1&duration=month");

    assert_eq!(status, 200);
    assert_eq!(json["packageId"], "pkg-30");
    assert_eq!(json["serviceDetailId"], "sd-vip-30");
    assert_eq!(json["type"], "Vip1");
    assert_eq!(json["durationDays"], 30);
    assert_eq!(json["price"], 2_500_000);
    assert!(json.get("priceId").is_none());
}

#[test]
fn purchase_carries_price_id_and_decodes_form_text() {
    let (status, json) = purchase("type=Tin+Th%C6%B0%E1%BB%9Dng&duration=30");

    assert_eq!(status, 200);
    assert_eq!(json["type"], "Tin Thường");
    assert_eq!(json["priceId"], "pr-7");
    assert_eq!(json["price"], 0);
}

#[test]
fn purchase_without_matching_price_is_conflict() {
    let (status, json) = purchase("type=Vip1&duration=week");

    assert_eq!(status, 409);
    assert_eq!(json["ok"], false);
    assert!(json.get("packageId").is_none());
}

#[test]
fn purchase_with_bad_duration_is_bad_request() {
    let (status, _) = purchase("type=Vip1&duration=quarter");
    assert_eq!(status, 400);
}

#[test]
fn purchase_with_missing_field_is_bad_request() {
    let (status, json) = purchase("duration=month");
    assert_eq!(status, 400);
    assert!(json["error"].as_str().unwrap_or("").contains("type"));
}

#[test]
fn purchase_for_unknown_landlord_is_not_found() {
    let resp = handle(
        post_form("/landlords/ghost/purchase", "type=Vip1&duration=day"),
        &vip_state(),
    )
    .unwrap();
    assert_eq!(resp.status(), 404);
}
