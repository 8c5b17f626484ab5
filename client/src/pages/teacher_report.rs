//! Per-lecture student report with decision and understanding filters.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use portal::routes::AppRoute;
use portal::services::attendance::lecture_attendance;
use portal::types::{LectureReport, Role};
use portal::views::teacher::{
    DECISION_FILTERS, NO_MATCHING_RECORDS_MESSAGE, ReportFilter, ReportRow, UNDERSTANDING_FILTERS, showing_label,
};

use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::use_portal;

#[component]
pub fn TeacherReportPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let params = use_params_map();
    let filter = RwSignal::new(ReportFilter::default());

    let report = load_into("Failed to load attendance details", move || {
        let api = api.get_value();
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { lecture_attendance(&api, &id).await }
    });

    view! {
        <TopBar role=Role::Teacher title="Lecture Report"/>
        <main class="teacher-report-page">
            <A href=AppRoute::TeacherAttendance.to_path()>"Back"</A>
            <div class="report-filters">
                <label>
                    "Attendance Status"
                    <select
                        prop:value=move || filter.with(|f| f.decision.clone())
                        on:change=move |ev| filter.update(|f| f.decision = event_target_value(&ev))
                    >
                        {DECISION_FILTERS.into_iter().map(|v| view! { <option value=v>{v}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    "Conceptual Understanding"
                    <select
                        prop:value=move || filter.with(|f| f.understanding.clone())
                        on:change=move |ev| filter.update(|f| f.understanding = event_target_value(&ev))
                    >
                        {UNDERSTANDING_FILTERS.into_iter().map(|v| view! { <option value=v>{v}</option> }).collect_view()}
                    </select>
                </label>
            </div>
            {load_view(report, "No attendance records for this lecture.", move |report: LectureReport| {
                let students = StoredValue::new(report.students);
                move || {
                    let filter = filter.get();
                    students.with_value(|all| {
                        let rows: Vec<ReportRow> = filter.apply(all).into_iter().map(ReportRow::from).collect();
                        report_table(showing_label(rows.len(), all.len()), rows)
                    })
                }
            })}
        </main>
    }
}

fn report_table(showing: String, rows: Vec<ReportRow>) -> AnyView {
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td class="empty-state" colspan="7">{NO_MATCHING_RECORDS_MESSAGE}</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter().map(report_row).collect_view().into_any()
    };
    view! {
        <p class="report-stats">{showing}</p>
        <table class="report-table">
            <thead>
                <tr>
                    <th>"Reg. Number"</th>
                    <th>"Name"</th>
                    <th>"Decision"</th>
                    <th>"Understanding"</th>
                    <th>"Reason"</th>
                    <th>"Submitted"</th>
                    <th>"Proof"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}

fn report_row(row: ReportRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.username}</td>
            <td>{row.name}</td>
            <td class=row.decision_class>{row.decision}</td>
            <td class=row.understanding_class>{row.understanding}</td>
            <td>{row.reason}</td>
            <td>{row.submitted_at}</td>
            <td>
                {match row.upload_url {
                    Some(url) => view! { <a href=url target="_blank" rel="noopener noreferrer">"View"</a> }.into_any(),
                    None => view! { <span>"-"</span> }.into_any(),
                }}
            </td>
        </tr>
    }
}
