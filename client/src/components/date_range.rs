//! Start/end date inputs bound to a `DateRange` signal.
//!
//! An invalid edit (bad date, start after end) leaves the range untouched and
//! shows the reason under the inputs.

use leptos::prelude::*;
use portal::views::dates::DateRange;

#[component]
pub fn DateRangePicker(range: RwSignal<DateRange>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let apply = move |edit: Result<DateRange, portal::ApiError>| match edit {
        Ok(next) => {
            error.set(None);
            range.set(next);
        }
        Err(e) => error.set(Some(e.user_message("Invalid date range."))),
    };

    view! {
        <div class="date-range">
            <label>
                "From "
                <input
                    type="date"
                    prop:value=move || range.get().start_iso()
                    on:change=move |ev| apply(range.get_untracked().with_start(&event_target_value(&ev)))
                />
            </label>
            <label>
                "To "
                <input
                    type="date"
                    prop:value=move || range.get().end_iso()
                    on:change=move |ev| apply(range.get_untracked().with_end(&event_target_value(&ev)))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
