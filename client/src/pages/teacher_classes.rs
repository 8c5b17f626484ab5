//! Teacher's assigned classes with an expandable student roster.

use leptos::prelude::*;
use portal::services::teacher::teacher_classes;
use portal::types::{ClassInfo, Role};
use portal::views::teacher::{EMPTY_ROSTER_MESSAGE, enrollment_label};

use crate::components::load::{load_into, load_view};
use crate::components::top_bar::TopBar;
use crate::state::context::{use_current_user, use_portal};

#[component]
pub fn TeacherClassesPage() -> impl IntoView {
    let api = StoredValue::new(use_portal().api().clone());
    let user = use_current_user();
    let expanded = RwSignal::new(None::<String>);

    let classes = load_into("Failed to load classes", move || {
        let api = api.get_value();
        let teacher_id = user.user_id();
        async move { teacher_classes(&api, &teacher_id).await.map(|list| list.classes) }
    });

    view! {
        <TopBar role=Role::Teacher title="My Classes"/>
        <main class="teacher-classes-page">
            {load_view(classes, "No classes assigned.", move |classes: Vec<ClassInfo>| {
                let heading = format!("Your Assigned Classes ({})", classes.len());
                view! {
                    <h2>{heading}</h2>
                    <div class="class-grid">
                        {classes
                            .into_iter()
                            .map(|class| view! { <ClassCard class=class expanded=expanded/> })
                            .collect_view()}
                    </div>
                }
            })}
        </main>
    }
}

#[component]
fn ClassCard(class: ClassInfo, expanded: RwSignal<Option<String>>) -> impl IntoView {
    let id = class.class_id.clone();
    let toggle_id = id.clone();
    let is_open = move || expanded.get().as_deref() == Some(id.as_str());
    let on_toggle = move |_| {
        expanded.update(|current| {
            *current = if current.as_deref() == Some(toggle_id.as_str()) { None } else { Some(toggle_id.clone()) };
        });
    };

    let meta = format!(
        "Semester {} | {}",
        class.semester.clone().unwrap_or_else(|| "-".to_owned()),
        class.department.clone().unwrap_or_else(|| "-".to_owned())
    );
    let label = enrollment_label(&class);
    let students = StoredValue::new(class.students);

    view! {
        <div class="class-card">
            <div class="class-card__header" on:click=on_toggle>
                <h3>{class.class_code}" "{class.class_name}</h3>
                <p class="class-card__meta">{meta}</p>
                <p class="class-card__count">{label}</p>
            </div>
            <Show when=is_open.clone()>
                {move || {
                    let students = students.get_value();
                    if students.is_empty() {
                        return view! { <p class="empty-state">{EMPTY_ROSTER_MESSAGE}</p> }.into_any();
                    }
                    view! {
                        <table class="roster">
                            <thead>
                                <tr>
                                    <th>"Reg. Number"</th>
                                    <th>"Student Name"</th>
                                    <th>"Dept"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {students
                                    .into_iter()
                                    .map(|s| view! {
                                        <tr>
                                            <td>{s.username}</td>
                                            <td>{s.name}</td>
                                            <td>{s.dept.unwrap_or_else(|| "-".to_owned())}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}
