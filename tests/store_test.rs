//! Integration tests for the group and meeting store. Skipped without TEST_DATABASE_URL.

mod common;

use chrono::NaiveDate;
use sqlx::PgPool;

use studygroups::errors::AppError;
use studygroups::models::group::{self, NewGroup};
use studygroups::models::meeting::{self, NewMeeting};
use studygroups::models::user::{self, NewUser};
use common::{setup_test_db, unique_username};

/// Helper: create a leader, returning the user id.
async fn create_leader(pool: &PgPool, prefix: &str) -> i64 {
    user::create(
        pool,
        &NewUser {
            username: unique_username(prefix),
            password: "not-a-real-hash".to_string(),
            display_name: format!("Leader {prefix}"),
        },
    )
    .await
    .unwrap()
}

async fn create_group(pool: &PgPool, leader_id: i64, name: &str) -> i64 {
    group::create(pool, &NewGroup { name: name.to_string(), leader_id })
        .await
        .unwrap()
        .id
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_create_group_records_owner() {
    let Some(pool) = setup_test_db().await else { return };
    let leader_id = create_leader(&pool, "owner").await;

    let g = group::create(&pool, &NewGroup { name: "Romans".to_string(), leader_id })
        .await
        .unwrap();

    assert!(g.id > 0);
    assert_eq!(g.name, "Romans");
    assert_eq!(g.leader_id, leader_id);
}

#[tokio::test]
async fn test_groups_are_listed_per_leader() {
    let Some(pool) = setup_test_db().await else { return };
    let alice = create_leader(&pool, "alice").await;
    let bob = create_leader(&pool, "bob").await;

    let a1 = create_group(&pool, alice, "Alice first").await;
    let a2 = create_group(&pool, alice, "Alice second").await;
    create_group(&pool, bob, "Bob only").await;

    let groups = group::find_by_leader(&pool, alice).await.unwrap();
    let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![a1, a2]);
    assert!(groups.iter().all(|g| g.leader_id == alice));
}

#[tokio::test]
async fn test_group_lookup_is_scoped_to_owner() {
    let Some(pool) = setup_test_db().await else { return };
    let alice = create_leader(&pool, "scope_a").await;
    let bob = create_leader(&pool, "scope_b").await;
    let gid = create_group(&pool, alice, "Private").await;

    assert!(group::find_for_leader(&pool, gid, alice).await.unwrap().is_some());
    assert!(group::find_for_leader(&pool, gid, bob).await.unwrap().is_none());
}

#[tokio::test]
async fn test_meetings_start_incomplete_and_sort_by_date() {
    let Some(pool) = setup_test_db().await else { return };
    let leader = create_leader(&pool, "sched").await;
    let gid = create_group(&pool, leader, "Schedule").await;

    for (theme, d) in [("Third", date(2025, 3, 1)), ("First", date(2025, 1, 1)), ("Second", date(2025, 2, 1))] {
        let m = meeting::create(
            &pool,
            &NewMeeting {
                group_id: gid,
                theme: theme.to_string(),
                date: d,
                materials: "Notes".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(!m.completed);
        assert_eq!(m.group_id, gid);
    }

    let meetings = meeting::find_by_group(&pool, gid).await.unwrap();
    let themes: Vec<&str> = meetings.iter().map(|m| m.theme.as_str()).collect();
    assert_eq!(themes, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_toggle_completion_both_ways() {
    let Some(pool) = setup_test_db().await else { return };
    let leader = create_leader(&pool, "toggle").await;
    let gid = create_group(&pool, leader, "Toggle").await;
    let m = meeting::create(
        &pool,
        &NewMeeting {
            group_id: gid,
            theme: "Prayer".to_string(),
            date: date(2025, 6, 1),
            materials: "Psalms".to_string(),
        },
    )
    .await
    .unwrap();

    meeting::set_completed(&pool, gid, m.id, true).await.unwrap();
    assert!(meeting::find_by_group(&pool, gid).await.unwrap()[0].completed);

    meeting::set_completed(&pool, gid, m.id, false).await.unwrap();
    assert!(!meeting::find_by_group(&pool, gid).await.unwrap()[0].completed);
}

#[tokio::test]
async fn test_toggle_with_wrong_group_is_not_found() {
    let Some(pool) = setup_test_db().await else { return };
    let leader = create_leader(&pool, "wrong").await;
    let g1 = create_group(&pool, leader, "One").await;
    let g2 = create_group(&pool, leader, "Two").await;
    let m = meeting::create(
        &pool,
        &NewMeeting {
            group_id: g1,
            theme: "Hope".to_string(),
            date: date(2025, 7, 1),
            materials: "Hebrews".to_string(),
        },
    )
    .await
    .unwrap();

    let err = meeting::set_completed(&pool, g2, m.id, true).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert!(!meeting::find_by_group(&pool, g1).await.unwrap()[0].completed);
}

#[tokio::test]
async fn test_meeting_for_missing_group_is_transport_error() {
    let Some(pool) = setup_test_db().await else { return };

    let err = meeting::create(
        &pool,
        &NewMeeting {
            group_id: i64::MAX,
            theme: "Orphan".to_string(),
            date: date(2025, 8, 1),
            materials: "None".to_string(),
        },
    )
    .await
    .unwrap_err();

    // Foreign key violation surfaces from the store
    assert!(matches!(err, AppError::Transport(_)));
}
