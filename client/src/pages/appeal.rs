//! Student appeal form.
//!
//! Prefilled from the attendance calendar (`?date=&slot=&subject=`). Submits
//! through the two-step pipeline: resolve the lecture instance for the cell,
//! then file the appeal against it.

#[cfg(test)]
#[path = "appeal_test.rs"]
mod appeal_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use portal::pipeline::PipelineError;
use portal::services::appeals::{AppealRequest, appeal_calendar_cell};
use portal::types::Role;
use portal::views::student::{HOUR_SLOTS, subject_code};

use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};

fn build_request(
    user_id: String,
    date: &str,
    slot: &str,
    subject: &str,
    reason: &str,
) -> Result<AppealRequest, &'static str> {
    let date = date.trim();
    let subject = subject_code(subject);
    if date.is_empty() || subject.is_empty() {
        return Err("Pick the date and subject of the lecture.");
    }
    let hour_slot: u8 = slot.trim().parse().map_err(|_| "Pick an hour slot.")?;
    if !HOUR_SLOTS.contains(&hour_slot) {
        return Err("Pick an hour slot.");
    }
    if reason.trim().is_empty() {
        return Err("Explain why the record is wrong.");
    }
    Ok(AppealRequest {
        user_id,
        date: date.to_owned(),
        hour_slot,
        subject_code: subject.to_owned(),
        reason: reason.trim().to_owned(),
    })
}

fn pipeline_message(err: &PipelineError) -> String {
    let detail = err.source.user_message("Request failed.");
    match err.step {
        "resolve_lecture" => format!("Could not resolve lecture instance details. {detail}"),
        _ => format!("Failed to submit appeal. {detail}"),
    }
}

#[component]
pub fn AppealPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let query = use_query_map();
    let prefill = move |key: &str| query.with_untracked(|q| q.get(key).unwrap_or_default());

    let date = RwSignal::new(prefill("date"));
    let slot = RwSignal::new(prefill("slot"));
    let subject = RwSignal::new(prefill("subject"));
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let outcome = RwSignal::new(None::<Result<String, String>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match build_request(user.user_id(), &date.get(), &slot.get(), &subject.get(), &reason.get()) {
            Ok(request) => request,
            Err(message) => {
                outcome.set(Some(Err(message.to_owned())));
                return;
            }
        };
        busy.set(true);
        outcome.set(None);
        let api = api.get_value();
        spawn_local(async move {
            let result = appeal_calendar_cell(&api, request)
                .await
                .map(|_| "Appeal submitted. Your teacher will review it.".to_owned())
                .map_err(|e| pipeline_message(&e));
            if result.is_ok() {
                let _ = reason.try_set(String::new());
            }
            let _ = outcome.try_set(Some(result));
            let _ = busy.try_set(false);
        });
    };

    view! {
        <TopBar role=Role::Student title="Appeal Submission"/>
        <main class="appeal-page">
            <p>"Marked absent incorrectly? Submit an appeal for attendance correction here."</p>
            <form class="appeal-form" on:submit=on_submit>
                <label>
                    "Date"
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Hour"
                    <select prop:value=move || slot.get() on:change=move |ev| slot.set(event_target_value(&ev))>
                        <option value="">"Select"</option>
                        {HOUR_SLOTS
                            .iter()
                            .map(|h| view! { <option value=h.to_string()>{h.to_string()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Subject code"
                    <input
                        type="text"
                        placeholder="CS101"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Reason"
                    <textarea
                        rows="4"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || outcome.get().map(|o| match o {
                    Ok(text) => view! { <p class="success-message">{text}</p> }.into_any(),
                    Err(text) => view! { <p class="error-message">{text}</p> }.into_any(),
                })}
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Appeal" }}
                </button>
            </form>
        </main>
    }
}
