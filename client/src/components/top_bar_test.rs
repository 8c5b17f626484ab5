use super::*;

#[test]
fn student_links_cover_student_pages() {
    let paths: Vec<String> = nav_links(Role::Student).into_iter().map(|(_, p)| p).collect();
    assert_eq!(paths, ["/student", "/attendance", "/submissions", "/appeal"]);
}

#[test]
fn teacher_links_start_at_teacher_home() {
    let links = nav_links(Role::Teacher);
    assert_eq!(links[0], ("Home", "/teacher".to_owned()));
    assert!(links.iter().all(|(_, p)| p.starts_with("/teacher")));
}
