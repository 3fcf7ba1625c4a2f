use chrono::{NaiveDate, TimeZone, Utc};
use leitner_core::db::open_db_in_memory;
use leitner_core::{
    DailyReviewRecord, DailyReviewStore, FixedClock, ReviewService, SqliteDailyReviewStore,
    SqliteNoteStore, SqliteUserStore, User, UserStore,
};
use rusqlite::Connection;

fn setup(conn: &Connection) -> (User, ReviewService<SqliteUserStore<'_>, SqliteNoteStore<'_>, SqliteDailyReviewStore<'_>, FixedClock>)
{
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
    let user = User::new(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    SqliteUserStore::new(conn).create_user(&user).unwrap();

    let svc = ReviewService::new(
        SqliteUserStore::new(conn),
        SqliteNoteStore::new(conn),
        SqliteDailyReviewStore::new(conn),
        FixedClock(now),
    );
    (user, svc)
}

fn ledger_rows(conn: &Connection, user: &User) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM daily_reviews WHERE user_id = ?1;",
        [user.id.to_string()],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn completing_twice_leaves_exactly_one_record() {
    let conn = open_db_in_memory().unwrap();
    let (user, svc) = setup(&conn);

    let first = svc.complete_daily_review(user.id, None).unwrap();
    let second = svc.complete_daily_review(user.id, None).unwrap();

    // The duplicate is absorbed silently, not surfaced as an error.
    assert!(first.success);
    assert!(second.success);
    assert_eq!(ledger_rows(&conn, &user), 1);
}

#[test]
fn status_flips_after_completion() {
    let conn = open_db_in_memory().unwrap();
    let (user, svc) = setup(&conn);

    let before = svc.daily_review_status(user.id, None).unwrap();
    assert!(!before.is_completed);
    assert_eq!(before.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    svc.complete_daily_review(user.id, None).unwrap();

    let after = svc.daily_review_status(user.id, None).unwrap();
    assert!(after.is_completed);
    assert_eq!(after.date, before.date);
}

#[test]
fn completion_is_scoped_to_the_logical_day() {
    let conn = open_db_in_memory().unwrap();
    let (user, svc) = setup(&conn);

    svc.complete_daily_review(user.id, None).unwrap();
    svc.complete_daily_review(user.id, Some("2024-01-16")).unwrap();

    assert_eq!(ledger_rows(&conn, &user), 2);
    assert!(svc.daily_review_status(user.id, Some("2024-01-16")).unwrap().is_completed);
    assert!(!svc.daily_review_status(user.id, Some("2024-01-17")).unwrap().is_completed);
}

#[test]
fn insert_if_absent_reports_freshness() {
    let conn = open_db_in_memory().unwrap();
    let (user, _svc) = setup(&conn);

    let store = SqliteDailyReviewStore::new(&conn);
    let record = DailyReviewRecord {
        user_id: user.id,
        review_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        completed_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    };

    assert!(store.insert_if_absent(&record).unwrap());
    assert!(!store.insert_if_absent(&record).unwrap());
    assert!(store.exists(user.id, record.review_date).unwrap());
}

#[test]
fn completed_dates_in_range_is_clipped_and_sorted() {
    let conn = open_db_in_memory().unwrap();
    let (user, svc) = setup(&conn);

    for date in ["2024-01-20", "2024-01-05", "2024-02-15"] {
        svc.complete_daily_review(user.id, Some(date)).unwrap();
    }

    let store = SqliteDailyReviewStore::new(&conn);
    let dates = store
        .completed_dates_in_range(
            user.id,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        ]
    );
}
