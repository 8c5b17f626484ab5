//! Teacher attendance overview: one row per lecture in the selected range.

use leptos::prelude::*;
use leptos_router::components::A;
use portal::services::attendance::teacher_overview;
use portal::types::{Role, TeacherOverview};
use portal::views::dates::DateRange;
use portal::views::teacher::{OverviewRow, overview_rows};

use crate::components::date_range::DateRangePicker;
use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};

#[component]
pub fn TeacherAttendancePage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let range = RwSignal::new(DateRange::default_window());

    let overview = load_into("Failed to load attendance overview", move || {
        let api = api.get_value();
        let teacher_id = user.user_id();
        let range = range.get();
        async move { teacher_overview(&api, &teacher_id, &range).await }
    });

    view! {
        <TopBar role=Role::Teacher title="Attendance Overview"/>
        <main class="teacher-attendance-page">
            <DateRangePicker range=range/>
            {load_view(overview, "No lectures found for the selected range.", overview_table)}
        </main>
    }
}

fn overview_table(overview: TeacherOverview) -> impl IntoView {
    view! {
        <table class="overview-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Hour"</th>
                    <th>"Subject"</th>
                    <th>"Present"</th>
                    <th>"Absent"</th>
                    <th>"OD"</th>
                    <th>"Pending"</th>
                    <th>"Total"</th>
                    <th>"Percentage"</th>
                </tr>
            </thead>
            <tbody>
                {overview_rows(&overview.lectures).into_iter().map(overview_row).collect_view()}
            </tbody>
        </table>
    }
}

fn overview_row(row: OverviewRow) -> AnyView {
    match row {
        OverviewRow::Placeholder { colspan, message } => view! {
            <tr>
                <td class="empty-state" colspan=colspan.to_string()>{message}</td>
            </tr>
        }
        .into_any(),
        OverviewRow::Lecture(line) => {
            let class = if line.low { "percentage low" } else { "percentage" };
            let percentage = line.percentage_label();
            view! {
                <tr>
                    <td>{line.date}</td>
                    <td>{line.hour_slot}</td>
                    <td>
                        <A href=line.report_path>{line.subject}</A>
                    </td>
                    <td>{line.present}</td>
                    <td>{line.absent}</td>
                    <td>{line.od}</td>
                    <td>{line.pending}</td>
                    <td>{line.total}</td>
                    <td class=class>{percentage}</td>
                </tr>
            }
            .into_any()
        }
    }
}
