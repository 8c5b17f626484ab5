//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use portal::types::Role;

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    appeal::AppealPage, attendance::AttendancePage, login::LoginPage, not_found::NotFound, student::StudentPage,
    submissions::SubmissionsPage, teacher::TeacherPage, teacher_appeals::TeacherAppealsPage,
    teacher_attendance::TeacherAttendancePage, teacher_classes::TeacherClassesPage, teacher_report::TeacherReportPage,
};
use crate::state::context::PortalContext;

/// Root application component.
///
/// Provides the backend gateway and sets up client-side routing. Every page
/// except login sits behind a role guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(PortalContext::browser());

    view! {
        <Stylesheet id="portal" href="/pkg/portal.css"/>
        <Title text="Attendance Portal"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("student")
                    view=|| view! { <ProtectedRoute role=Role::Student><StudentPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("attendance")
                    view=|| view! { <ProtectedRoute role=Role::Student><AttendancePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("submissions")
                    view=|| view! { <ProtectedRoute role=Role::Student><SubmissionsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("appeal")
                    view=|| view! { <ProtectedRoute role=Role::Student><AppealPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("teacher")
                    view=|| view! { <ProtectedRoute role=Role::Teacher><TeacherPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("classes"))
                    view=|| view! { <ProtectedRoute role=Role::Teacher><TeacherClassesPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("attendance"))
                    view=|| view! { <ProtectedRoute role=Role::Teacher><TeacherAttendancePage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("report"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute role=Role::Teacher><TeacherReportPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("appeals"))
                    view=|| view! { <ProtectedRoute role=Role::Teacher><TeacherAppealsPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
