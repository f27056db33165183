// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Upload",
        html! {
            main class="container" {
                h1 { "Session Attendance" }
                p { "Upload the attendance CSV exported from your meeting platform." }

                (card("Upload attendance sheet", html! {
                    form action="/report" method="post" enctype="multipart/form-data" {
                        label for="file" { "Attendance CSV" }
                        input type="file" id="file" name="file" accept=".csv,text/csv" required;
                        div class="actions" {
                            button type="submit" { "View report" }
                            button type="submit" formaction="/export" class="secondary" {
                                "Download XLSX"
                            }
                        }
                    }
                }))

                (card("Accepted columns", html! {
                    p {
                        "Join time and Leave time are required. Name, Email, "
                        "Recording disclaimer response and Feedback are picked up when present."
                    }
                }))
            }
        },
    )
}
