//! Teacher appeal review: filter by status, resolve pending appeals and
//! inspect the plagiarism/AI analysis behind a student's submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! A resolved appeal is dropped from the loaded list in place; the filtered
//! list is not fetched again.

#[cfg(test)]
#[path = "teacher_appeals_test.rs"]
mod teacher_appeals_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use portal::services::appeals::{AppealDecision, AppealStatus, resolve_appeal, student_appeal_data, teacher_appeals};
use portal::types::{Appeal, Role};
use portal::views::LoadState;
use portal::views::teacher::{AnalysisView, remove_appeal};

use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};
use crate::util::dialog::confirm;

fn confirm_prompt(decision: AppealDecision) -> &'static str {
    match decision {
        AppealDecision::Approved => "Are you sure you want to approve this appeal?",
        AppealDecision::Rejected => "Are you sure you want to reject this appeal?",
    }
}

fn is_pending(appeal: &Appeal) -> bool {
    appeal.appeal_status.as_deref().is_none_or(|s| s.eq_ignore_ascii_case(AppealStatus::Pending.as_str()))
}

fn tab_class(tab: AppealStatus, active: AppealStatus) -> &'static str {
    if tab == active { "filter-tab active" } else { "filter-tab" }
}

#[component]
pub fn TeacherAppealsPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let status = RwSignal::new(AppealStatus::Pending);
    let analysis = RwSignal::new(None::<Result<AnalysisView, String>>);
    let analysing = RwSignal::new(false);

    let appeals = load_into("Failed to fetch appeals", move || {
        let api = api.get_value();
        let teacher_id = user.user_id();
        let status = status.get();
        async move { teacher_appeals(&api, &teacher_id, status).await.map(|list| list.appeals) }
    });

    view! {
        <TopBar role=Role::Teacher title="Student Appeals"/>
        <main class="teacher-appeals-page">
            <div class="appeal-filter-tabs">
                {AppealStatus::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button class=move || tab_class(tab, status.get()) on:click=move |_| status.set(tab)>
                            {tab.as_str()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || {
                let empty = status.get().empty_message();
                load_view(appeals, "No appeals found", move |list: Vec<Appeal>| {
                    if list.is_empty() {
                        return view! { <p class="empty-state">{empty.clone()}</p> }.into_any();
                    }
                    list.into_iter()
                        .map(|appeal| view! {
                            <AppealCard appeal=appeal appeals=appeals analysis=analysis analysing=analysing/>
                        })
                        .collect_view()
                        .into_any()
                })
            }}
            <AnalysisPanel analysis=analysis/>
        </main>
    }
}

#[component]
fn AppealCard(
    appeal: Appeal,
    appeals: RwSignal<LoadState<Vec<Appeal>>>,
    analysis: RwSignal<Option<Result<AnalysisView, String>>>,
    analysing: RwSignal<bool>,
) -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let id = StoredValue::new(appeal.appeal_id.clone());
    let comment = RwSignal::new(String::new());
    let resolving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let resolve = move |decision: AppealDecision| {
        if resolving.get() || !confirm(confirm_prompt(decision)) {
            return;
        }
        resolving.set(true);
        error.set(None);
        let api = api.get_value();
        let teacher_id = user.user_id();
        let appeal_id = id.get_value();
        let text = comment.get();
        spawn_local(async move {
            match resolve_appeal(&api, &appeal_id, &teacher_id, decision, Some(&text)).await {
                Ok(_) => {
                    let _ = appeals.try_update(|state| {
                        if let LoadState::Ready(list) = state {
                            remove_appeal(list, &appeal_id);
                        }
                    });
                }
                Err(e) => {
                    let verb = if decision == AppealDecision::Approved { "approve" } else { "reject" };
                    let _ = error.try_set(Some(e.user_message(&format!("Failed to {verb} appeal"))));
                    let _ = resolving.try_set(false);
                }
            }
        });
    };

    let lecture_id = appeal.lecture_instance_id.clone();
    let student_id = appeal.student_id.clone();
    let on_analysis = move |_| {
        let (Some(lecture_id), Some(student_id)) = (lecture_id.clone(), student_id.clone()) else {
            analysis.set(Some(Err("This appeal has no linked submission.".to_owned())));
            return;
        };
        if analysing.get() {
            return;
        }
        analysing.set(true);
        let api = api.get_value();
        spawn_local(async move {
            let result = student_appeal_data(&api, &lecture_id, &student_id)
                .await
                .map(|data| AnalysisView::from(&data))
                .map_err(|e| e.user_message("Failed to fetch student analysis data"));
            let _ = analysis.try_set(Some(result));
            let _ = analysing.try_set(false);
        });
    };

    let pending = is_pending(&appeal);
    let status_text = appeal.appeal_status.clone().unwrap_or_else(|| AppealStatus::Pending.as_str().to_owned());
    let status_class = format!("status-badge-compact {}", status_text.to_ascii_lowercase());
    let context = format!(
        "{} | {}",
        appeal.class_code.clone().unwrap_or_default(),
        appeal.lecture_date.clone().unwrap_or_default()
    );

    view! {
        <div class="appeal-card">
            <div class="appeal-card__header">
                <div class="student-details">
                    <span class="name">{appeal.student_name.clone().unwrap_or_else(|| "Student".to_owned())}</span>
                    <span class="id">{context}</span>
                </div>
                <span class=status_class>{status_text}</span>
            </div>
            <div class="appeal-card__body">
                <p>
                    <strong>"Class: "</strong>
                    {appeal.class_name.clone().unwrap_or_default()}
                </p>
                <p>
                    <strong>"Current Attendance: "</strong>
                    {appeal.current_decision.clone().unwrap_or_else(|| "-".to_owned())}
                </p>
                <p class="reason-box">
                    <strong>"Reason for Appeal: "</strong>
                    {appeal.reason.clone().unwrap_or_default()}
                </p>
                {appeal.evidence_url.clone().map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">"View Supporting Evidence"</a>
                })}
            </div>
            <button class="analysis-btn" disabled=move || analysing.get() on:click=on_analysis>
                "View Analysis"
            </button>
            {if pending {
                view! {
                    <div class="appeal-card__resolve">
                        <textarea
                            placeholder="Add a comment for the student (optional)..."
                            prop:value=move || comment.get()
                            on:input=move |ev| comment.set(event_target_value(&ev))
                            disabled=move || resolving.get()
                        ></textarea>
                        <button
                            class="approve-btn"
                            disabled=move || resolving.get()
                            on:click=move |_| resolve(AppealDecision::Approved)
                        >
                            {move || if resolving.get() { "Wait..." } else { "Approve" }}
                        </button>
                        <button
                            class="reject-btn"
                            disabled=move || resolving.get()
                            on:click=move |_| resolve(AppealDecision::Rejected)
                        >
                            {move || if resolving.get() { "Wait..." } else { "Reject" }}
                        </button>
                        {move || error.get().map(|e| view! { <p class="error-message">{e}</p> })}
                    </div>
                }
                .into_any()
            } else {
                let comment = appeal.teacher_comment.clone().unwrap_or_else(|| "No comment provided.".to_owned());
                view! {
                    <p class="appeal-card__comment">
                        <strong>"Teacher Comment: "</strong>
                        {comment}
                    </p>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn AnalysisPanel(analysis: RwSignal<Option<Result<AnalysisView, String>>>) -> impl IntoView {
    move || {
        analysis.get().map(|result| {
            let body = match result {
                Ok(a) => view! {
                    <dl>
                        <dt>"Similarity"</dt>
                        <dd class=a.similarity_class>{a.similarity}</dd>
                        {a.copied_from.map(|source| view! {
                            <dt>"Copied from"</dt>
                            <dd>{format!("Submission {source}")}</dd>
                        })}
                        <dt>"AI score"</dt>
                        <dd class=a.ai_score_class>{a.ai_score}</dd>
                        <dt>"Confidence"</dt>
                        <dd class=a.confidence_class>{a.confidence}</dd>
                        <dt>"Reasoning"</dt>
                        <dd>{a.ai_reason}</dd>
                    </dl>
                }
                .into_any(),
                Err(message) => view! { <p class="error-message">{message}</p> }.into_any(),
            };
            view! {
                <div class="analysis-panel">
                    <h3>"Submission Analysis"</h3>
                    {body}
                    <button on:click=move |_| analysis.set(None)>"Close"</button>
                </div>
            }
        })
    }
}
