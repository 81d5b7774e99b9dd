//! Behaviour of the in-memory store used as the handlers' test double.
//!
//! These tests pin down the properties the HTTP layer relies on: sequential
//! ids, id ordering, full-overwrite updates and the rentals-first cascade.

use chrono::NaiveDate;
use vidrental_core::video::NewVideo;
use vidrental_db::store::memory::MemoryStore;
use vidrental_db::store::VideoStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_video(title: &str, inventory: i32) -> NewVideo {
    NewVideo {
        title: title.to_string(),
        release_date: NaiveDate::from_ymd_opt(1986, 7, 18).unwrap(),
        total_inventory: inventory,
    }
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_sequential_ids_from_one() {
    let store = MemoryStore::new();
    let first = store.create_video(&new_video("Aliens", 2)).await.unwrap();
    let second = store.create_video(&new_video("Alien 3", 1)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn list_returns_videos_in_id_order() {
    let store = MemoryStore::new();
    for title in ["C", "A", "B"] {
        store.create_video(&new_video(title, 1)).await.unwrap();
    }

    let titles: Vec<_> = store
        .list_videos()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.title)
        .collect();
    assert_eq!(titles, ["C", "A", "B"]);
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let store = MemoryStore::new();
    let video = store.create_video(&new_video("Aliens", 2)).await.unwrap();

    let changed = NewVideo {
        title: "Aliens (Special Edition)".into(),
        release_date: NaiveDate::from_ymd_opt(1991, 1, 1).unwrap(),
        total_inventory: 7,
    };
    let updated = store
        .update_video(video.id, &changed)
        .await
        .unwrap()
        .expect("video exists");

    assert_eq!(updated.id, video.id);
    assert_eq!(updated.title, changed.title);
    assert_eq!(updated.release_date, changed.release_date);
    assert_eq!(updated.total_inventory, 7);
}

#[tokio::test]
async fn update_missing_video_returns_none() {
    let store = MemoryStore::new();
    let result = store.update_video(5, &new_video("x", 1)).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Cascade delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_only_that_videos_rentals() {
    let store = MemoryStore::new();
    let doomed = store.create_video(&new_video("Aliens", 2)).await.unwrap();
    let kept = store.create_video(&new_video("Predator", 1)).await.unwrap();
    let customer = store.insert_customer("Hicks").await;

    let r1 = store.insert_rental(doomed.id, customer.id).await.unwrap();
    let r2 = store.insert_rental(doomed.id, customer.id).await.unwrap();
    let other = store.insert_rental(kept.id, customer.id).await.unwrap();

    let removed = store.delete_video_cascade(doomed.id).await.unwrap();
    assert_eq!(removed, Some(2));

    assert!(store.find_video(doomed.id).await.unwrap().is_none());
    assert!(store.find_rental(r1.id).await.is_none());
    assert!(store.find_rental(r2.id).await.is_none());
    assert_eq!(store.find_rental(other.id).await, Some(other));
    assert_eq!(store.rental_count().await, 1);
}

#[tokio::test]
async fn delete_missing_video_returns_none() {
    let store = MemoryStore::new();
    assert_eq!(store.delete_video_cascade(1).await.unwrap(), None);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let store = MemoryStore::new();
    let first = store.create_video(&new_video("Aliens", 2)).await.unwrap();
    store.delete_video_cascade(first.id).await.unwrap();

    let next = store.create_video(&new_video("Alien 3", 1)).await.unwrap();
    assert_eq!(next.id, 2);
}

// ---------------------------------------------------------------------------
// Rentals and customers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rentals_are_filtered_by_video() {
    let store = MemoryStore::new();
    let a = store.create_video(&new_video("A", 1)).await.unwrap();
    let b = store.create_video(&new_video("B", 1)).await.unwrap();
    let customer = store.insert_customer("Vasquez").await;

    store.insert_rental(a.id, customer.id).await.unwrap();
    store.insert_rental(b.id, customer.id).await.unwrap();
    store.insert_rental(a.id, customer.id).await.unwrap();

    let rentals = store.list_rentals_for_video(a.id).await.unwrap();
    assert_eq!(rentals.len(), 2);
    assert!(rentals.iter().all(|r| r.video_id == a.id));
    assert!(rentals[0].id < rentals[1].id);
}

#[tokio::test]
async fn memory_store_reports_backend_and_health() {
    let store = MemoryStore::new();
    assert_eq!(store.backend_name(), "memory");
    assert!(store.health_check().await.is_ok());
}
