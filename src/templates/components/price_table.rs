// templates/components/price_table.rs
use crate::pricing::PriceGrid;
use maud::{html, Markup};

/// Renders the type x duration pivot, with an extra column for the chosen duration.
///
/// `selected` holds one cell per grid row, in row order.
pub fn price_table(grid: &PriceGrid, selected_label: &str, selected: &[String]) -> Markup {
    html! {
        @if grid.rows.is_empty() {
            p class="empty" { "This landlord has no service packages yet." }
        } @else {
            table class="price-table" {
                thead {
                    tr {
                        th { "Type" }
                        @for header in grid.headers() {
                            th { (header) }
                        }
                        th { "Post limit" }
                        th class="selected" { (selected_label) }
                    }
                }
                tbody {
                    @for (row, chosen) in grid.rows.iter().zip(selected) {
                        tr {
                            th scope="row" { (row.service_type) }
                            @for cell in &row.cells {
                                td { (cell) }
                            }
                            td { (row.limit_post) }
                            td class="selected" { (chosen) }
                        }
                    }
                }
            }
        }
    }
}
