mod common;

const URL: &str = "https://example.com/target";

#[tokio::test]
async fn test_redirect_both_aliases() {
    let (server, store) = common::create_test_server();

    server.post("/").form(&[("input_url", URL)]).await.assert_status_ok();
    let record = common::record_for(&store, URL).await.unwrap();

    for alias in [&record.human, &record.bot] {
        let response = server.get(&format!("/{}", alias)).await;

        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), URL);
    }
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/doesnotexist").await;

    assert_eq!(response.status_code(), 404);
    assert!(response.text().contains("Oops"));
}

#[tokio::test]
async fn test_unmatched_route_renders_oops() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/a/b/c").await;

    assert_eq!(response.status_code(), 404);
    assert!(response.text().contains("Oops"));
}
