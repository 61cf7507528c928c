use gifarr::db::Store;

fn memory_store() -> Store {
    Store::new("sqlite::memory:")
}

#[tokio::test]
async fn history_is_empty_for_an_unknown_user() {
    let store = memory_store();
    let history = store.get_history("nobody").await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn saved_record_carries_its_inputs() {
    let store = memory_store();
    let record = store.save_search("u1", "cats").await.unwrap();

    assert_eq!(record.user_id, "u1");
    assert_eq!(record.search_term, "cats");
    assert!(!record.created_at.is_empty());
}

#[tokio::test]
async fn history_deduplicates_by_term_keeping_first_occurrence() {
    let store = memory_store();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u1", "dogs").await.unwrap();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u1", "cats").await.unwrap();

    let history = store.get_history("u1").await.unwrap();
    let terms: Vec<&str> = history.iter().map(|r| r.search_term.as_str()).collect();
    assert_eq!(terms, vec!["cats", "dogs"]);
}

#[tokio::test]
async fn history_is_scoped_by_user() {
    let store = memory_store();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u2", "dogs").await.unwrap();

    let history = store.get_history("u1").await.unwrap();
    let terms: Vec<&str> = history.iter().map(|r| r.search_term.as_str()).collect();
    assert_eq!(terms, vec!["cats"]);
}

#[tokio::test]
async fn delete_clears_only_that_users_rows() {
    let store = memory_store();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u2", "dogs").await.unwrap();

    let deleted = store.delete_searches("u1").await.unwrap();
    assert_eq!(deleted, 2);

    assert!(store.get_history("u1").await.unwrap().is_empty());
    assert_eq!(store.get_history("u2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_with_no_rows_is_a_noop() {
    let store = memory_store();
    assert_eq!(store.delete_searches("u1").await.unwrap(), 0);
}

#[tokio::test]
async fn empty_user_short_circuits_without_connecting() {
    let store = memory_store();

    let history = store.get_history("").await.unwrap();
    assert!(history.is_empty());
    assert!(!store.gateway().is_connected().await);
}

#[tokio::test]
async fn gateway_connects_once_and_disconnects_idempotently() {
    let store = memory_store();

    // Never connected: disconnect is a no-op.
    assert!(!store.gateway().disconnect().await.unwrap());

    store.save_search("u1", "cats").await.unwrap();
    assert!(store.gateway().is_connected().await);

    let still_connected = store.gateway().disconnect().await.unwrap();
    assert!(!still_connected);
    assert!(!store.gateway().is_connected().await);

    // A second disconnect stays a no-op.
    assert!(!store.gateway().disconnect().await.unwrap());
}

#[tokio::test]
async fn count_reflects_every_stored_row() {
    let store = memory_store();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u1", "cats").await.unwrap();
    store.save_search("u2", "dogs").await.unwrap();

    assert_eq!(store.search_count().await.unwrap(), 3);
}
