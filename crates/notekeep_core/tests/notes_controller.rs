use notekeep_core::db::open_db_in_memory;
use notekeep_core::{
    Note, NoteRepository, NoteStore, NotesController, Priority, PriorityColor,
    SqliteNoteRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

fn seed(conn: &mut Connection, notes: &[Note]) {
    let mut repo = SqliteNoteRepository::try_new(conn).unwrap();
    for note in notes {
        repo.insert_note(note).unwrap();
    }
}

fn controller(conn: &mut Connection) -> NotesController<SqliteNoteRepository<'_>> {
    let store = NoteStore::new(SqliteNoteRepository::try_new(conn).unwrap());
    NotesController::new(store).unwrap()
}

#[test]
fn new_controller_starts_with_empty_form_and_medium_priority() {
    let mut conn = open_db_in_memory().unwrap();
    let controller = controller(&mut conn);

    assert_eq!(controller.title(), "");
    assert_eq!(controller.selected_priority(), Priority::Medium);
    assert!(controller.rows().is_empty());
    assert!(controller.notice().is_none());
}

#[test]
fn save_adds_row_at_head_and_keeps_form() {
    let mut conn = open_db_in_memory().unwrap();
    let mut controller = controller(&mut conn);

    controller.set_title("first");
    controller.select_priority(Priority::Low);
    controller.save().unwrap();
    controller.set_title("second");
    controller.select_priority(Priority::High);
    controller.save().unwrap();

    let rows = controller.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "second");
    assert_eq!(rows[0].priority_label, "High");
    assert_eq!(rows[0].priority_color, PriorityColor::Red);
    assert!(!rows[0].is_favorite);
    assert_eq!(rows[1].priority_color, PriorityColor::Green);
    assert_eq!(controller.title(), "second");
}

#[test]
fn toggle_favorite_refreshes_row() {
    let mut conn = open_db_in_memory().unwrap();
    let mut controller = controller(&mut conn);
    controller.set_title("star me");
    controller.save().unwrap();
    let id = controller.rows()[0].id;

    controller.toggle_favorite(id).unwrap();
    assert!(controller.rows()[0].is_favorite);

    controller.toggle_favorite(id).unwrap();
    assert!(!controller.rows()[0].is_favorite);
}

#[test]
fn delete_at_removes_rows_by_offset() {
    let mut conn = open_db_in_memory().unwrap();
    let notes: Vec<Note> = (1..=3)
        .map(|index| {
            Note::with_id(Uuid::new_v4(), format!("n{index}"), Priority::Medium, index).unwrap()
        })
        .collect();
    seed(&mut conn, &notes);
    let mut controller = controller(&mut conn);

    // Rows are n3, n2, n1.
    controller.delete_at(&[0, 2, 9]).unwrap();

    let titles: Vec<&str> = controller.rows().iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["n2"]);
}

#[test]
fn missing_note_is_silent_no_op() {
    let mut conn = open_db_in_memory().unwrap();
    let mut controller = controller(&mut conn);

    controller.delete(Uuid::new_v4()).unwrap();
    controller.toggle_favorite(Uuid::new_v4()).unwrap();

    assert!(controller.notice().is_none());
    assert!(controller.rows().is_empty());
}

#[test]
fn persistence_failure_sets_notice_and_keeps_rows() {
    let mut conn = open_db_in_memory().unwrap();
    seed(
        &mut conn,
        &[Note::with_id(Uuid::new_v4(), "existing", Priority::High, 7).unwrap()],
    );
    conn.execute_batch("PRAGMA query_only = ON;").unwrap();
    let mut controller = controller(&mut conn);
    let before = controller.rows().to_vec();

    controller.set_title("will fail");
    controller.save().unwrap();
    let notice = controller.notice().expect("save failure should set a notice");
    assert_eq!(notice.action, "save");
    assert!(notice.message.contains("note storage failed"));
    assert_eq!(controller.rows(), before.as_slice());

    controller.toggle_favorite(before[0].id).unwrap();
    assert_eq!(controller.notice().map(|n| n.action), Some("toggle_favorite"));
    assert_eq!(controller.rows(), before.as_slice());

    controller.delete_at(&[0]).unwrap();
    assert_eq!(controller.notice().map(|n| n.action), Some("delete"));
    assert_eq!(controller.rows(), before.as_slice());

    controller.dismiss_notice();
    assert!(controller.notice().is_none());
}
