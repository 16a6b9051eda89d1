use super::EditSession;

#[test]
fn it_begins_with_a_seeded_draft() {
    let mut session = EditSession::default();
    session.begin(2, "Apply the product rule.");

    assert!(session.is_active());
    assert_eq!(session.editing_index(), Some(2));
    assert_eq!(session.draft_content(), "Apply the product rule.");
}

#[test]
fn it_cancels_without_leftovers() {
    let mut session = EditSession::default();
    session.begin(2, "Apply the product rule.");
    session.cancel();

    assert!(!session.is_active());
    assert_eq!(session.editing_index(), None);
    assert_eq!(session.draft_content(), "");
}

#[test]
fn it_takes_the_index_exactly_once() {
    let mut session = EditSession::default();
    session.begin(3, "Substitute u = ln(x).");

    assert_eq!(session.take(), Some(3));
    assert!(!session.is_active());
    assert_eq!(session.take(), None);
}

#[test]
fn it_replaces_an_earlier_session_on_begin() {
    let mut session = EditSession::default();
    session.begin(1, "First draft.");
    session.begin(4, "Second draft.");

    assert_eq!(session.editing_index(), Some(4));
    assert_eq!(session.draft_content(), "Second draft.");
}
