//! Student submission history and processing status lookup.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use portal::services::submissions::{student_submissions, submission_status};
use portal::types::{Role, Submission, SubmissionStatus};
use portal::views::status::processing_icon;

use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::use_portal;

/// `(label, icon, value)` for each processing stage.
fn status_lines(status: &SubmissionStatus) -> Vec<(&'static str, &'static str, String)> {
    [
        ("OCR", status.ocr_status.as_deref()),
        ("AI review", status.ai_status.as_deref()),
        ("Similarity", status.similarity_status.as_deref()),
    ]
    .into_iter()
    .map(|(label, value)| (label, processing_icon(value), value.unwrap_or("-").to_owned()))
    .collect()
}

#[component]
pub fn SubmissionsPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let submissions = load_into("Failed to load submissions", move || {
        let api = api.get_value();
        async move { student_submissions(&api).await }
    });

    let lookup_id = RwSignal::new(String::new());
    let checking = RwSignal::new(false);
    let status = RwSignal::new(None::<Result<SubmissionStatus, String>>);

    let on_check = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = lookup_id.get().trim().to_owned();
        if id.is_empty() || checking.get() {
            return;
        }
        checking.set(true);
        let api = api.get_value();
        spawn_local(async move {
            let result = submission_status(&api, &id)
                .await
                .map_err(|e| e.user_message("Could not fetch submission status."));
            let _ = status.try_set(Some(result));
            let _ = checking.try_set(false);
        });
    };

    view! {
        <TopBar role=Role::Student title="My Submissions"/>
        <main class="submissions-page">
            <section class="submission-list">
                {load_view(submissions, "No submissions yet.", submission_table)}
            </section>
            <section class="submission-status">
                <h3>"Processing status"</h3>
                <form on:submit=on_check>
                    <input
                        type="text"
                        placeholder="Submission ID"
                        prop:value=move || lookup_id.get()
                        on:input=move |ev| lookup_id.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || checking.get()>"Check"</button>
                </form>
                {move || status.get().map(|s| match s {
                    Ok(status) => view! {
                        <ul class="status-lines">
                            {status_lines(&status)
                                .into_iter()
                                .map(|(label, icon, value)| view! { <li>{icon}" "{label}": "{value}</li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Err(message) => view! { <p class="error-message">{message}</p> }.into_any(),
                })}
            </section>
        </main>
    }
}

fn submission_table(items: Vec<Submission>) -> AnyView {
    if items.is_empty() {
        return view! { <p class="empty-state">"No submissions yet."</p> }.into_any();
    }
    view! {
        <table class="submission-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Subject"</th>
                    <th>"Proof"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|s| {
                        let subject = match (s.subject_code, s.subject_name) {
                            (Some(code), Some(name)) => format!("{code} - {name}"),
                            (Some(code), None) => code,
                            (None, Some(name)) => name,
                            (None, None) => "-".to_owned(),
                        };
                        view! {
                            <tr>
                                <td>{s.date.unwrap_or_else(|| "-".to_owned())}</td>
                                <td>{subject}</td>
                                <td>
                                    {s.image_url.map(|url| view! {
                                        <a href=url target="_blank" rel="noopener noreferrer">"View"</a>
                                    })}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
