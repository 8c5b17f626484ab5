use super::*;

#[test]
fn appeal_href_prefills_cell_details() {
    assert_eq!(appeal_href("2024-01-02", 3, "CS101"), "/appeal?date=2024-01-02&slot=3&subject=CS101");
}
