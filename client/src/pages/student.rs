//! Student home: profile, enrolled classes and today's lectures with upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lectures and classes load concurrently once the guard has resolved the
//! user. An upload refreshes only the lecture list.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use leptos::prelude::*;
use portal::services::lectures::{my_classes, today_lectures};
use portal::types::{ClassInfo, Role, UploadReceipt};
use portal::views::student::{LectureCard, lecture_cards};

use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};

fn receipt_message(receipt: &UploadReceipt) -> String {
    match receipt.submission_id.as_deref() {
        Some(id) => format!("Uploaded. Submission #{id} is being processed."),
        None => "Uploaded. Your submission is being processed.".to_owned(),
    }
}

#[component]
pub fn StudentPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();

    let refresh = RwSignal::new(0_u32);
    let uploading = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Result<String, String>>);

    let lectures = load_into("Failed to load data", move || {
        refresh.track();
        let api = api.get_value();
        let user_id = user.user_id();
        async move { today_lectures(&api, &user_id).await.map(|today| lecture_cards(&today.lectures)) }
    });
    let classes = load_into("Failed to load data", move || {
        let api = api.get_value();
        let user_id = user.user_id();
        async move { my_classes(&api, &user_id).await.map(|list| list.classes) }
    });

    view! {
        <TopBar role=Role::Student title="Student Dashboard"/>
        <main class="student-page">
            <section class="profile-card">
                <h2>{move || user.display_name()}</h2>
                <p>{move || format!("ID: {}", user.user_id())}</p>
            </section>
            <section class="classes">
                <h3>"Enrolled Classes"</h3>
                {load_view(classes, "Not enrolled in any classes.", class_list)}
            </section>
            <section class="lectures">
                <h3>"Today's Lectures"</h3>
                {move || notice.get().map(|n| match n {
                    Ok(text) => view! { <p class="success-message">{text}</p> }.into_any(),
                    Err(text) => view! { <p class="error-message">{text}</p> }.into_any(),
                })}
                {load_view(lectures, "No lectures scheduled for today.", move |cards: Vec<LectureCard>| {
                    if cards.is_empty() {
                        return view! { <p class="empty-state">"No lectures scheduled for today."</p> }.into_any();
                    }
                    cards
                        .into_iter()
                        .map(|card| view! { <LectureCardView card=card uploading=uploading notice=notice refresh=refresh/> })
                        .collect_view()
                        .into_any()
                })}
            </section>
        </main>
    }
}

fn class_list(classes: Vec<ClassInfo>) -> AnyView {
    if classes.is_empty() {
        return view! { <p class="empty-state">"Not enrolled in any classes."</p> }.into_any();
    }
    view! {
        <ul class="class-list">
            {classes
                .into_iter()
                .map(|c| {
                    let meta = format!(
                        "Sem {} | {}",
                        c.semester.unwrap_or_default(),
                        c.department.unwrap_or_default()
                    );
                    view! {
                        <li>
                            <strong>{c.class_code}</strong>
                            " "
                            {c.class_name}
                            <span class="class-meta">{meta}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn LectureCardView(
    card: LectureCard,
    uploading: RwSignal<Option<String>>,
    notice: RwSignal<Option<Result<String, String>>>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let id = card.lecture_instance_id.clone();
    let busy_id = id.clone();
    let is_busy = move || uploading.get().as_deref() == Some(busy_id.as_str());
    let upload_allowed = {
        let card = card.clone();
        let is_busy = is_busy.clone();
        move || card.can_upload(is_busy())
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            use portal::services::submissions::{UploadTarget, upload_submission};

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let api = api.get_value();
            let user_id = user.user_id();
            let target = UploadTarget::LectureInstance(id.clone());
            uploading.set(Some(id.clone()));
            leptos::task::spawn_local(async move {
                let outcome = match crate::util::file::read_selected(&input).await {
                    Ok(Some(file)) => upload_submission(&api, &user_id, &target, file)
                        .await
                        .map(|r| receipt_message(&r))
                        .map_err(|e| e.user_message("Upload failed")),
                    Ok(None) => Err("Select a file to upload.".to_owned()),
                    Err(message) => Err(message),
                };
                crate::util::file::clear(&input);
                if outcome.is_ok() {
                    let _ = refresh.try_update(|n| *n += 1);
                }
                let _ = notice.try_set(Some(outcome));
                let _ = uploading.try_set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, &api, user, &id, notice, refresh);
        }
    };

    let closed_notice = card.shows_closed_notice();
    let status_class = format!("status-badge {}", card.badge.class);
    view! {
        <div class="lecture-card">
            <div class="lecture-card__header">
                <h4>{card.subject_name.clone()}</h4>
                <span class=status_class>{card.badge.icon}" "{card.badge.text}</span>
            </div>
            <p class="lecture-card__class">{card.class_code.clone()}</p>
            <p class="lecture-card__time">{card.time_label.clone()}</p>
            <Show when=upload_allowed.clone()>
                <label class="upload-button">
                    "Upload proof"
                    <input type="file" accept="image/jpeg,image/png,application/pdf" on:change=on_pick.clone()/>
                </label>
            </Show>
            <Show when=is_busy.clone()>
                <p class="uploading">"Uploading..."</p>
            </Show>
            {closed_notice.then(|| view! { <p class="closed-notice">"Session ended. No submission possible."</p> })}
        </div>
    }
}
