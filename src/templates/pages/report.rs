use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::domain::report::{AttendanceReport, CategoryGroup, ClassifiedRecord};
use crate::templates::components::{card, category_bar_chart, stat_tile};
use crate::templates::desktop_layout;

pub fn report_page(report: &AttendanceReport) -> Markup {
    desktop_layout(
        "Attendance Report",
        html! {
            main class="container" {
                h1 { "Attendance Report" }

                div class="tiles" {
                    (stat_tile("Participants", &report.total().to_string()))
                    @for (label, count) in &report.counts {
                        (stat_tile(label, &count.to_string()))
                    }
                }

                (card("Category breakdown", category_bar_chart(&report.counts)))

                (card("Tracked durations", duration_summary(report)))

                @for group in &report.groups {
                    (category_section(group))
                }
            }
        },
    )
}

fn duration_summary(report: &AttendanceReport) -> Markup {
    let durations = &report.durations;

    html! {
        @match durations.mean_minutes {
            Some(mean) => {
                p {
                    "Across " strong { (durations.tracked) } " tracked rows: mean "
                    strong { (format_minutes(Some(mean))) } " min, shortest "
                    strong { (format_minutes(durations.min_minutes)) } " min, longest "
                    strong { (format_minutes(durations.max_minutes)) } " min."
                }
            }
            None => {
                p { "No row had both timestamps; durations could not be computed." }
            }
        }
        @if durations.untracked > 0 {
            p class="muted" {
                (durations.untracked) " row(s) had missing or unparseable timestamps."
            }
        }
    }
}

fn category_section(group: &CategoryGroup) -> Markup {
    html! {
        details class="category" open[!group.records.is_empty()] {
            summary {
                strong { (group.label) } " - " (group.records.len()) " participant(s)"
            }
            @if group.records.is_empty() {
                p class="muted" { "No participants in this category." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Join" }
                            th { "Leave" }
                            th { "Duration (min)" }
                            th { "Responded" }
                            th { "Feedback" }
                        }
                    }
                    tbody {
                        @for rec in &group.records {
                            (record_row(rec))
                        }
                    }
                }
            }
        }
    }
}

fn record_row(rec: &ClassifiedRecord) -> Markup {
    let r = &rec.record;

    html! {
        tr {
            td { (r.name) }
            td { (r.email.as_deref().unwrap_or("-")) }
            td { (format_timestamp(r.join_time)) }
            td { (format_timestamp(r.leave_time)) }
            td { (format_minutes(r.duration_minutes)) }
            td { (r.responded.as_deref().unwrap_or("-")) }
            td { (r.feedback.as_deref().unwrap_or("-")) }
        }
    }
}

fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_minutes(minutes: Option<f64>) -> String {
    minutes
        .map(|m| format!("{m:.1}"))
        .unwrap_or_else(|| "-".to_string())
}
