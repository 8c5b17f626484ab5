//! Student attendance calendar and subject summary.
//!
//! Filled calendar cells link to the appeal page with the date, hour slot and
//! subject code prefilled.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use leptos::prelude::*;
use leptos_router::components::A;
use portal::routes::AppRoute;
use portal::services::attendance::student_overview;
use portal::types::{Role, StudentOverview};
use portal::views::dates::DateRange;
use portal::views::student::{CalendarCellView, calendar_rows, is_low_attendance};

use crate::components::date_range::DateRangePicker;
use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};

/// Appeal link for one calendar cell. ISO dates and subject codes are
/// URL-safe as they stand.
fn appeal_href(date: &str, slot: u8, subject_code: &str) -> String {
    format!("{}?date={date}&slot={slot}&subject={subject_code}", AppRoute::StudentAppeal.to_path())
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let range = RwSignal::new(DateRange::default_window());

    let overview = load_into("Failed to fetch attendance data", move || {
        let api = api.get_value();
        let user_id = user.user_id();
        let range = range.get();
        async move { student_overview(&api, &user_id, &range).await }
    });

    view! {
        <TopBar role=Role::Student title="Attendance Analytics"/>
        <main class="attendance-page">
            <DateRangePicker range=range/>
            {load_view(overview, "No attendance records for this range.", overview_tables)}
        </main>
    }
}

fn overview_tables(overview: StudentOverview) -> impl IntoView {
    let rows = calendar_rows(&overview.calendar);
    view! {
        <section class="calendar">
            <table class="attendance-calendar">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Date"</th>
                        <th>"Day"</th>
                        <th>"Day Order"</th>
                        <th>"1st Hour"</th>
                        <th>"2nd Hour"</th>
                        <th>"3rd Hour"</th>
                        <th>"4th Hour"</th>
                        <th>"5th Hour"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let date = row.date.clone();
                            view! {
                                <tr>
                                    <td>{row.index}</td>
                                    <td>{row.date}</td>
                                    <td>{row.day}</td>
                                    <td>{row.day_order}</td>
                                    {row.cells.into_iter().map(|cell| calendar_cell(&date, cell)).collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
        <section class="summary">
            <h3>"Subject-wise Summary"</h3>
            <table class="summary-table">
                <thead>
                    <tr>
                        <th>"Subject"</th>
                        <th>"Present"</th>
                        <th>"Absent"</th>
                        <th>"OD"</th>
                        <th>"Total"</th>
                        <th>"Percentage"</th>
                    </tr>
                </thead>
                <tbody>
                    {overview
                        .summary
                        .into_iter()
                        .map(|s| {
                            let class = if is_low_attendance(s.percentage) { "percentage low" } else { "percentage" };
                            view! {
                                <tr>
                                    <td>{s.subject}</td>
                                    <td>{s.present}</td>
                                    <td>{s.absent}</td>
                                    <td>{s.od}</td>
                                    <td>{s.total}</td>
                                    <td class=class>{format!("{}%", s.percentage)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

fn calendar_cell(date: &str, cell: CalendarCellView) -> AnyView {
    match (cell.label, cell.subject_code) {
        (Some(label), Some(code)) => {
            let href = appeal_href(date, cell.slot, &code);
            view! {
                <td class=cell.class>
                    <A href=href>{label}</A>
                </td>
            }
            .into_any()
        }
        _ => view! { <td class=cell.class>"-"</td> }.into_any(),
    }
}
