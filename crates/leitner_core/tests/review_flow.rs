use chrono::{DateTime, TimeZone, Utc};
use leitner_core::db::open_db_in_memory;
use leitner_core::{
    BoxType, FixedClock, Note, NoteStore, ReviewService, ServiceError, SqliteDailyReviewStore,
    SqliteNoteStore, SqliteUserStore, User, UserStore,
};
use rusqlite::Connection;
use uuid::Uuid;

fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn service(
    conn: &Connection,
    now: DateTime<Utc>,
) -> ReviewService<SqliteUserStore<'_>, SqliteNoteStore<'_>, SqliteDailyReviewStore<'_>, FixedClock>
{
    ReviewService::new(
        SqliteUserStore::new(conn),
        SqliteNoteStore::new(conn),
        SqliteDailyReviewStore::new(conn),
        FixedClock(now),
    )
}

fn seed_user(conn: &Connection, created_at: DateTime<Utc>) -> User {
    let user = User::new(created_at);
    SqliteUserStore::new(conn).create_user(&user).unwrap();
    user
}

fn seed_note(conn: &Connection, user: &User, box_type: BoxType) -> Note {
    let mut note = Note::new(user.id, user.created_at);
    note.box_type = box_type;
    SqliteNoteStore::new(conn).create_note(&note).unwrap();
    note
}

#[test]
fn review_queue_returns_notes_of_due_boxes_only() {
    let conn = open_db_in_memory().unwrap();
    // Account anchor 2024-01-01; logical today 2024-01-15 (UTC+3).
    let user = seed_user(&conn, instant(2024, 1, 1, 8));
    let daily = seed_note(&conn, &user, BoxType::Daily);
    let every_2 = seed_note(&conn, &user, BoxType::Every2Days);
    let every_4 = seed_note(&conn, &user, BoxType::Every4Days);
    let weekly = seed_note(&conn, &user, BoxType::Weekly);
    let biweekly = seed_note(&conn, &user, BoxType::Every2Weeks);
    let learned = seed_note(&conn, &user, BoxType::Learned);

    let svc = service(&conn, instant(2024, 1, 15, 10));
    let feed = svc.review_queue(user.id, None).unwrap();
    let ids: Vec<_> = feed.notes.iter().map(|note| note.id).collect();

    // Jan 15: daily, every_2_days, weekly and every_2_weeks are open;
    // every_4_days (5, 9, 13, 17) is not; learned never is.
    assert!(ids.contains(&daily.id));
    assert!(ids.contains(&every_2.id));
    assert!(ids.contains(&weekly.id));
    assert!(ids.contains(&biweekly.id));
    assert!(!ids.contains(&every_4.id));
    assert!(!ids.contains(&learned.id));

    let count = svc.today_review_count(user.id, None).unwrap();
    assert_eq!(count.count, 4);
}

#[test]
fn due_set_ignores_note_creation_time() {
    let conn = open_db_in_memory().unwrap();
    let user = seed_user(&conn, instant(2024, 1, 1, 8));

    // Note created the day before review; the account anchor still
    // governs, so the weekly box is open on Jan 15 regardless.
    let mut late_note = Note::new(user.id, instant(2024, 1, 14, 12));
    late_note.box_type = BoxType::Weekly;
    SqliteNoteStore::new(&conn).create_note(&late_note).unwrap();

    let svc = service(&conn, instant(2024, 1, 15, 10));
    let feed = svc.review_queue(user.id, None).unwrap();
    assert_eq!(feed.notes.len(), 1);
    assert_eq!(feed.notes[0].id, late_note.id);
}

#[test]
fn remembered_promotes_one_step_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let user = seed_user(&conn, instant(2024, 1, 1, 8));
    let note = seed_note(&conn, &user, BoxType::Daily);

    let now = instant(2024, 1, 15, 10);
    let svc = service(&conn, now);

    let updated = svc.submit_review(user.id, note.id, true).unwrap();
    assert_eq!(updated.box_type, BoxType::Every2Days);
    assert_eq!(updated.last_reviewed, Some(now));

    let stored = SqliteNoteStore::new(&conn).get_note(note.id).unwrap().unwrap();
    assert_eq!(stored.box_type, BoxType::Every2Days);
    assert_eq!(stored.last_reviewed, Some(now));
}

#[test]
fn forgotten_note_holds_its_box_but_is_stamped() {
    let conn = open_db_in_memory().unwrap();
    let user = seed_user(&conn, instant(2024, 1, 1, 8));
    let note = seed_note(&conn, &user, BoxType::Weekly);

    let now = instant(2024, 1, 15, 10);
    let svc = service(&conn, now);

    let updated = svc.submit_review(user.id, note.id, false).unwrap();
    assert_eq!(updated.box_type, BoxType::Weekly);
    assert_eq!(updated.last_reviewed, Some(now));
}

#[test]
fn final_promotion_retires_the_note_from_the_queue() {
    let conn = open_db_in_memory().unwrap();
    let user = seed_user(&conn, instant(2024, 1, 1, 8));
    let note = seed_note(&conn, &user, BoxType::Every2Weeks);

    let svc = service(&conn, instant(2024, 1, 15, 10));

    let updated = svc.submit_review(user.id, note.id, true).unwrap();
    assert_eq!(updated.box_type, BoxType::Learned);

    let feed = svc.review_queue(user.id, None).unwrap();
    assert!(feed.notes.is_empty());
}

#[test]
fn forgetting_does_not_change_the_due_pattern() {
    let conn = open_db_in_memory().unwrap();
    let user = seed_user(&conn, instant(2024, 1, 1, 8));
    let note = seed_note(&conn, &user, BoxType::Every2Days);

    let svc = service(&conn, instant(2024, 1, 15, 10));
    svc.submit_review(user.id, note.id, false).unwrap();

    // The box cadence is anchored to the account, so the failed review on
    // Jan 15 neither delays Jan 17 nor adds Jan 16.
    let on_16 = svc.review_queue(user.id, Some("2024-01-16")).unwrap();
    assert!(on_16.notes.is_empty());
    let on_17 = svc.review_queue(user.id, Some("2024-01-17")).unwrap();
    assert_eq!(on_17.notes.len(), 1);
}

#[test]
fn date_override_takes_precedence_and_is_validated() {
    let conn = open_db_in_memory().unwrap();
    let user = seed_user(&conn, instant(2024, 1, 1, 8));
    seed_note(&conn, &user, BoxType::Weekly);

    let svc = service(&conn, instant(2024, 1, 15, 10));

    // Computed today (Jan 15) is a weekly due day; the override moves to a
    // quiet day.
    assert_eq!(svc.today_review_count(user.id, None).unwrap().count, 1);
    assert_eq!(
        svc.today_review_count(user.id, Some("2024-01-16")).unwrap().count,
        0
    );

    let err = svc.today_review_count(user.id, Some("01/16/2024")).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidDateOverride(_)));
}

#[test]
fn unknown_user_and_foreign_note_are_not_found() {
    let conn = open_db_in_memory().unwrap();
    let owner = seed_user(&conn, instant(2024, 1, 1, 8));
    let other = seed_user(&conn, instant(2024, 1, 2, 8));
    let note = seed_note(&conn, &owner, BoxType::Daily);

    let svc = service(&conn, instant(2024, 1, 15, 10));

    let err = svc.review_queue(Uuid::new_v4(), None).unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound(_)));

    let err = svc.submit_review(owner.id, Uuid::new_v4(), true).unwrap_err();
    assert!(matches!(err, ServiceError::NoteNotFound(_)));

    // Another user's note is indistinguishable from a missing one.
    let err = svc.submit_review(other.id, note.id, true).unwrap_err();
    assert!(matches!(err, ServiceError::NoteNotFound(_)));
}
