//! Teacher home: today's schedule with lecture controls and the assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each lecture row can be started (with an optional concept line), closed,
//! or have its attendance locked. Every successful action reloads the
//! schedule so the row reflects the backend state rather than a local guess.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use portal::services::teacher::{LectureAction, control_lecture, teacher_schedule, toggle_lecture_lock};
use portal::types::{Role, TeacherLecture, TeacherSchedule};

use crate::components::chatbot::Chatbot;
use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};

fn time_label(lecture: &TeacherLecture) -> String {
    match (lecture.start_time.as_deref(), lecture.end_time.as_deref()) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        _ => "Time TBD".to_owned(),
    }
}

fn is_running(lecture: &TeacherLecture) -> bool {
    lecture.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("ACTIVE") || s.eq_ignore_ascii_case("STARTED"))
}

fn lock_label(locked: bool) -> &'static str {
    if locked { "Unlock attendance" } else { "Lock attendance" }
}

#[component]
pub fn TeacherPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let refresh = RwSignal::new(0_u32);
    let notice = RwSignal::new(None::<Result<String, String>>);

    let schedule = load_into("Failed to load schedule", move || {
        refresh.track();
        let api = api.get_value();
        let teacher_id = user.user_id();
        async move { teacher_schedule(&api, &teacher_id).await }
    });

    view! {
        <TopBar role=Role::Teacher title="Teacher Dashboard"/>
        <main class="teacher-page">
            <section class="profile-card">
                <h2>{move || format!("Welcome, {}", user.display_name())}</h2>
            </section>
            {move || notice.get().map(|n| match n {
                Ok(text) => view! { <p class="success-message">{text}</p> }.into_any(),
                Err(text) => view! { <p class="error-message">{text}</p> }.into_any(),
            })}
            <section class="schedule">
                {load_view(schedule, "No lectures scheduled for today.", move |schedule: TeacherSchedule| {
                    let heading = schedule
                        .date
                        .map_or_else(|| "Today's Schedule".to_owned(), |d| format!("Schedule for {d}"));
                    let rows = if schedule.lectures.is_empty() {
                        view! { <p class="empty-state">"No lectures scheduled for today."</p> }.into_any()
                    } else {
                        schedule
                            .lectures
                            .into_iter()
                            .map(|lecture| view! { <LectureRow lecture=lecture notice=notice refresh=refresh/> })
                            .collect_view()
                            .into_any()
                    };
                    view! {
                        <h3>{heading}</h3>
                        {rows}
                    }
                })}
            </section>
            <Chatbot/>
        </main>
    }
}

#[component]
fn LectureRow(
    lecture: TeacherLecture,
    notice: RwSignal<Option<Result<String, String>>>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let id = StoredValue::new(lecture.lecture_instance_id.clone());
    let locked = lecture.attendance_locked;
    let running = is_running(&lecture);
    let concept = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let settle = move |result: Result<String, String>| {
        if result.is_ok() {
            let _ = refresh.try_update(|n| *n += 1);
        }
        let _ = notice.try_set(Some(result));
        let _ = busy.try_set(false);
    };

    let run_action = move |action: LectureAction| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let api = api.get_value();
        let teacher_id = user.user_id();
        let id = id.get_value();
        spawn_local(async move {
            let done = match action {
                LectureAction::Start { .. } => "Lecture started.",
                LectureAction::Close => "Lecture closed.",
            };
            let result = control_lecture(&api, &id, &teacher_id, &action)
                .await
                .map(|_| done.to_owned())
                .map_err(|e| e.user_message("Lecture update failed"));
            settle(result);
        });
    };

    let on_lock = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let api = api.get_value();
        let id = id.get_value();
        spawn_local(async move {
            let result = toggle_lecture_lock(&api, &id, !locked)
                .await
                .map(|_| if locked { "Attendance unlocked." } else { "Attendance locked." }.to_owned())
                .map_err(|e| e.user_message("Failed to update attendance lock"));
            settle(result);
        });
    };

    let subject = lecture
        .subject_name
        .clone()
        .or_else(|| lecture.class_name.clone())
        .unwrap_or_default();
    let status = lecture.status.clone().unwrap_or_else(|| "SCHEDULED".to_owned());

    view! {
        <div class="lecture-row">
            <div class="lecture-row__info">
                <strong>{lecture.class_code.clone().unwrap_or_default()}</strong>
                " "
                {subject}
                <span class="lecture-row__time">{time_label(&lecture)}</span>
                <span class="lecture-row__status">{status}</span>
            </div>
            <div class="lecture-row__actions">
                {if running {
                    view! {
                        <button disabled=move || busy.get() on:click=move |_| run_action(LectureAction::Close)>
                            "Close lecture"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <input
                            type="text"
                            placeholder="Today's concept (optional)"
                            prop:value=move || concept.get()
                            on:input=move |ev| concept.set(event_target_value(&ev))
                        />
                        <button
                            disabled=move || busy.get()
                            on:click=move |_| run_action(LectureAction::Start { concept: Some(concept.get()) })
                        >
                            "Start lecture"
                        </button>
                    }
                    .into_any()
                }}
                <button class="lock-toggle" disabled=move || busy.get() on:click=on_lock>
                    {lock_label(locked)}
                </button>
            </div>
        </div>
    }
}
