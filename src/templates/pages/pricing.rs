use crate::pricing::{DurationSelection, PriceGrid, NOT_AVAILABLE};
use crate::templates::{card, desktop_layout, price_table};
use maud::{html, Markup};

pub struct PricingVm {
    pub landlord_id: String,
    pub selection: DurationSelection,
    pub selected_label: String,
    pub grid: PriceGrid,
    /// Display price per grid row at `selection`.
    pub selected_prices: Vec<String>,
}

const SELECTOR_OPTIONS: [(&str, &str); 3] = [("day", "Day"), ("week", "Week"), ("month", "Month")];

pub fn pricing_page(vm: &PricingVm) -> Markup {
    let current = vm.selection.to_string();

    desktop_layout(
        "Service packages",
        html! {
            main class="container" {
                h1 { "Service packages" }
                p { "Landlord " strong { (vm.landlord_id) } }

                form method="get" action=(format!("/landlords/{}/packages", vm.landlord_id)) {
                    label for="duration" { "Billing period" }
                    select name="duration" id="duration" onchange="this.form.submit()" {
                        @for (value, label) in SELECTOR_OPTIONS {
                            option value=(value) selected[current == value] { (label) }
                        }
                        @if let DurationSelection::Days(n) = vm.selection {
                            option value=(n) selected { (vm.selected_label) }
                        }
                    }
                    noscript { button type="submit" class="btn" { "Apply" } }
                }

                (price_table(&vm.grid, &vm.selected_label, &vm.selected_prices))

                @if !vm.grid.rows.is_empty() {
                    (card("Buy a package", purchase_forms(vm)))
                }
            }
        },
    )
}

fn purchase_forms(vm: &PricingVm) -> Markup {
    let action = format!("/landlords/{}/purchase", vm.landlord_id);
    let duration = vm.selection.to_string();

    html! {
        ul class="purchase-list" {
            @for (row, price) in vm.grid.rows.iter().zip(&vm.selected_prices) {
                li {
                    @if price == NOT_AVAILABLE {
                        span class="muted" { (row.service_type) " is not offered for " (vm.selected_label) }
                    } @else {
                        form method="post" action=(action) {
                            input type="hidden" name="type" value=(row.service_type);
                            input type="hidden" name="duration" value=(duration);
                            button type="submit" class="btn" {
                                "Buy " (row.service_type) " (" (price) ")"
                            }
                        }
                    }
                }
            }
        }
    }
}
