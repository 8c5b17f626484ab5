//! Application routes and their role requirements.
//!
//! Pure path logic shared by the browser router and the CLI `open` command;
//! no DOM access here.

use std::fmt;

use crate::types::Role;

/// Unauthenticated entry point; every denial and unknown path lands here.
pub const LOGIN_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Login,
    StudentHome,
    StudentAttendance,
    StudentSubmissions,
    StudentAppeal,
    TeacherHome,
    TeacherClasses,
    TeacherAttendance,
    /// Per-lecture report, keyed by lecture instance id.
    TeacherReport(String),
    TeacherAppeals,
    NotFound,
}

impl AppRoute {
    /// Parse a URL path. Trailing slashes and query strings are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Login,
            "/student" => Self::StudentHome,
            "/attendance" => Self::StudentAttendance,
            "/submissions" => Self::StudentSubmissions,
            "/appeal" => Self::StudentAppeal,
            "/teacher" => Self::TeacherHome,
            "/teacher/classes" => Self::TeacherClasses,
            "/teacher/attendance" => Self::TeacherAttendance,
            "/teacher/appeals" => Self::TeacherAppeals,
            other => match other.strip_prefix("/teacher/report/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::TeacherReport(id.to_owned()),
                _ => Self::NotFound,
            },
        }
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Login | Self::NotFound => LOGIN_PATH.to_owned(),
            Self::StudentHome => "/student".to_owned(),
            Self::StudentAttendance => "/attendance".to_owned(),
            Self::StudentSubmissions => "/submissions".to_owned(),
            Self::StudentAppeal => "/appeal".to_owned(),
            Self::TeacherHome => "/teacher".to_owned(),
            Self::TeacherClasses => "/teacher/classes".to_owned(),
            Self::TeacherAttendance => "/teacher/attendance".to_owned(),
            Self::TeacherReport(id) => format!("/teacher/report/{id}"),
            Self::TeacherAppeals => "/teacher/appeals".to_owned(),
        }
    }

    /// Role a caller must hold to render this route; `None` for public ones.
    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Login | Self::NotFound => None,
            Self::StudentHome | Self::StudentAttendance | Self::StudentSubmissions | Self::StudentAppeal => {
                Some(Role::Student)
            }
            Self::TeacherHome
            | Self::TeacherClasses
            | Self::TeacherAttendance
            | Self::TeacherReport(_)
            | Self::TeacherAppeals => Some(Role::Teacher),
        }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.required_role().is_some()
    }

    /// Unknown paths are not rendered; they redirect to login.
    #[must_use]
    pub fn redirects_to_login(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Landing route after a successful login.
    #[must_use]
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentHome,
            Role::Teacher => Self::TeacherHome,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
