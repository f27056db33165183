use maud::{html, Markup};

pub mod chart;
pub mod error;

pub use chart::category_bar_chart;
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn stat_tile(label: &str, value: &str) -> Markup {
    html! {
        div class="tile" {
            span class="tile-value" { (value) }
            span class="tile-label" { (label) }
        }
    }
}
