// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Service package pricing" }

                (card("Look up a landlord", html! {
                    form action="/lookup" method="get" {
                        label for="landlord" { "Landlord ID" }
                        input type="text" id="landlord" name="landlord" required;
                        button type="submit" class="btn" { "Show packages" }
                    }
                }))
            }
        },
    )
}
