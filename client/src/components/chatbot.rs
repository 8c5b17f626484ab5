//! Teacher AI assistant panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use portal::services::assistant::{ChatLog, Speaker, teacher_chat};

use crate::state::context::{use_current_user, use_portal};

#[component]
pub fn Chatbot() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();

    let open = RwSignal::new(false);
    let log = RwSignal::new(ChatLog::default());
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = draft.get().trim().to_owned();
        if message.is_empty() || sending.get() {
            return;
        }
        log.update(|l| l.push_user(&message));
        draft.set(String::new());
        sending.set(true);

        let api = api.get_value();
        let teacher_id = user.user_id();
        spawn_local(async move {
            let result = teacher_chat(&api, &teacher_id, &message).await;
            let _ = log.try_update(|l| l.push_result(result));
            let _ = sending.try_set(false);
        });
    };

    view! {
        <div class="chatbot">
            <button class="chatbot__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                {move || if open.get() { "Close assistant" } else { "Ask the assistant" }}
            </button>
            <Show when=move || open.get()>
                <div class="chatbot__messages">
                    {move || {
                        log.get()
                            .messages()
                            .iter()
                            .map(|m| {
                                let class = match m.speaker {
                                    Speaker::User => "chatbot__message chatbot__message--user",
                                    Speaker::Assistant => "chatbot__message chatbot__message--bot",
                                };
                                view! { <div class=class>{m.content.clone()}</div> }
                            })
                            .collect_view()
                    }}
                    <Show when=move || sending.get()>
                        <div class="chatbot__message chatbot__message--bot">"Thinking..."</div>
                    </Show>
                </div>
                <form class="chatbot__input" on:submit=on_send>
                    <input
                        type="text"
                        placeholder="Ask about your classes..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || sending.get()>"Send"</button>
                </form>
            </Show>
        </div>
    }
}
