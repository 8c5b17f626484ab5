use super::*;

#[test]
fn from_path_maps_every_known_route() {
    let cases = [
        ("/", AppRoute::Login),
        ("/student", AppRoute::StudentHome),
        ("/attendance", AppRoute::StudentAttendance),
        ("/submissions", AppRoute::StudentSubmissions),
        ("/appeal", AppRoute::StudentAppeal),
        ("/teacher", AppRoute::TeacherHome),
        ("/teacher/classes", AppRoute::TeacherClasses),
        ("/teacher/attendance", AppRoute::TeacherAttendance),
        ("/teacher/appeals", AppRoute::TeacherAppeals),
    ];
    for (path, route) in cases {
        assert_eq!(AppRoute::from_path(path), route, "{path}");
        assert_eq!(route.to_path(), path);
    }
}

#[test]
fn from_path_reads_report_id() {
    assert_eq!(AppRoute::from_path("/teacher/report/L-17"), AppRoute::TeacherReport("L-17".to_owned()));
    assert_eq!(AppRoute::TeacherReport("L-17".to_owned()).to_path(), "/teacher/report/L-17");
}

#[test]
fn from_path_ignores_trailing_slash_and_query() {
    assert_eq!(AppRoute::from_path("/teacher/classes/"), AppRoute::TeacherClasses);
    assert_eq!(AppRoute::from_path("/attendance?start=2024-01-01"), AppRoute::StudentAttendance);
}

#[test]
fn unknown_paths_redirect_to_login() {
    for path in ["/admin", "/teacher/report/", "/teacher/report/a/b", "/students"] {
        let route = AppRoute::from_path(path);
        assert_eq!(route, AppRoute::NotFound, "{path}");
        assert!(route.redirects_to_login());
        assert_eq!(route.to_path(), LOGIN_PATH);
    }
}

#[test]
fn required_roles_split_by_prefix() {
    assert_eq!(AppRoute::Login.required_role(), None);
    assert_eq!(AppRoute::StudentAppeal.required_role(), Some(Role::Student));
    assert_eq!(AppRoute::TeacherReport("x".to_owned()).required_role(), Some(Role::Teacher));
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn home_for_role() {
    assert_eq!(AppRoute::home_for(Role::Teacher).to_path(), "/teacher");
    assert_eq!(AppRoute::home_for(Role::Student).to_path(), "/student");
}
