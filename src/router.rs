use crate::app_state::AppState;
use crate::errors::ServerError;
use crate::pricing::{
    duration_label, get_display_price, resolve_duration, select_for_purchase_str,
    DurationSelection, PackagePriceIndex, PriceGrid,
};
use crate::responses::{
    html_error_response, html_response, json_error_response, json_response, ResultResp,
};
use crate::templates::pages::{home_page, pricing_page, PricingVm};
use astra::{Body, Request, Response, ResponseBuilder};
use std::collections::HashMap;
use std::io::Read;

/// Runs `handle` and renders any error as an HTML page, logging one line per request.
pub fn serve_request(req: Request, state: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                log::warn!("{method} {path} failed: {err}");
            }
            html_error_response(err)
        }
    };

    log::info!("{method} {path} -> {}", resp.status().as_u16());
    resp
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = parse_query(&req);

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => html_response(home_page()),
        ("GET", ["lookup"]) => lookup_redirect(&query),
        ("GET", ["landlords", id, "packages"]) => packages_page(state, id, &query),
        ("POST", ["landlords", id, "purchase"]) => {
            let form = read_form(&mut req);
            Ok(form
                .and_then(|form| purchase(state, id, &form))
                .unwrap_or_else(json_error_response))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn lookup_redirect(query: &HashMap<String, String>) -> ResultResp {
    let id = query
        .get("landlord")
        .map(|s| s.trim())
        .ok_or_else(|| ServerError::BadRequest("missing landlord".into()))?;
    validate_landlord_id(id)?;

    ResponseBuilder::new()
        .status(302)
        .header("Location", format!("/landlords/{id}/packages"))
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

fn packages_page(state: &AppState, landlord_id: &str, query: &HashMap<String, String>) -> ResultResp {
    validate_landlord_id(landlord_id)?;

    let selection = query
        .get("duration")
        .map(|raw| raw.parse::<DurationSelection>())
        .transpose()?
        .unwrap_or(DurationSelection::Month);

    let packages = state.packages.fetch_packages(landlord_id)?;
    let index = PackagePriceIndex::build(&packages);
    let grid = PriceGrid::from_index(&index);

    let selected_prices = grid
        .rows
        .iter()
        .map(|row| get_display_price(&index, &row.service_type, selection))
        .collect();

    let vm = PricingVm {
        landlord_id: landlord_id.to_string(),
        selection,
        selected_label: duration_label(resolve_duration(selection)),
        grid,
        selected_prices,
    };

    html_response(pricing_page(&vm))
}

fn purchase(state: &AppState, landlord_id: &str, form: &HashMap<String, String>) -> ResultResp {
    validate_landlord_id(landlord_id)?;

    let service_type = required(form, "type")?;
    let duration = required(form, "duration")?;

    // Resolved against a fresh fetch, never against the rendered page.
    let packages = state.packages.fetch_packages(landlord_id)?;
    let index = PackagePriceIndex::build(&packages);

    let intent = select_for_purchase_str(&index, service_type, duration).map_err(|e| {
        log::warn!("purchase blocked for landlord {landlord_id}: {e}");
        ServerError::from(e)
    })?;

    log::info!(
        "purchase intent: landlord {landlord_id}, {} for {} day(s) at {}",
        intent.service_type,
        intent.duration_days,
        intent.price
    );

    json_response(200, &intent)
}

fn required<'a>(form: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    form.get(name)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing field {name:?}")))
}

/// Ids end up in URLs we build, so only accept URL-safe ones.
fn validate_landlord_id(id: &str) -> Result<(), ServerError> {
    let ok = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if ok {
        Ok(())
    } else {
        Err(ServerError::BadRequest(format!("invalid landlord id {id:?}")))
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_pairs(q.as_bytes()))
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(parse_pairs(&body))
}

fn parse_pairs(raw: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw).into_owned().collect()
}
