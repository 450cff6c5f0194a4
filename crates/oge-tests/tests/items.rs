//! Items listing endpoint tests.

use futures_util::future::join_all;
use oge_client::ItemsQuery;
use oge_tests::create_test_client;

fn limit(n: i64) -> ItemsQuery {
    ItemsQuery { limit: Some(n) }
}

#[tokio::test]
async fn test_list_items_respects_limit() {
    let client = create_test_client().expect("Failed to create client");

    for n in [0, 1, 3, 5, 10] {
        let items = client
            .list_items(Some(&limit(n)))
            .await
            .expect("Failed to list items");
        assert!(
            items.len() <= n as usize,
            "limit={} returned {} items",
            n,
            items.len()
        );
    }
}

#[tokio::test]
async fn test_list_items_zero_limit_is_empty() {
    let client = create_test_client().expect("Failed to create client");

    let items = client
        .list_items(Some(&limit(0)))
        .await
        .expect("Failed to list items");

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_default_matches_limit_ten() {
    let client = create_test_client().expect("Failed to create client");

    let default_items = client.list_items(None).await.expect("Failed to list items");
    let ten_items = client
        .list_items(Some(&limit(10)))
        .await
        .expect("Failed to list items");

    // Row order is not guaranteed, so only the count is compared.
    assert_eq!(default_items.len(), ten_items.len());
    assert!(default_items.len() <= 10);
}

#[tokio::test]
async fn test_list_items_have_exact_fields() {
    let client = create_test_client().expect("Failed to create client");

    // `Item` rejects unknown fields, so a successful decode means every row
    // carries exactly id, name and created_at.
    let items = client
        .list_items(Some(&limit(5)))
        .await
        .expect("Failed to list items");

    for item in items {
        assert!(!item.created_at.is_empty());
    }
}

#[tokio::test]
async fn test_concurrent_list_items_share_pool() {
    let client = create_test_client().expect("Failed to create client");

    let requests = (0..20).map(|_| {
        let client = client.clone();
        async move { client.list_items(Some(&limit(5))).await }
    });

    let results = join_all(requests).await;

    for result in results {
        let items = result.expect("Concurrent request failed");
        assert!(items.len() <= 5);
    }
}
