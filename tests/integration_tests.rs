use serde_json::{json, Value};
use ultraverse_market::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn market_for(server: &MockServer) -> Market {
    let options = ClientOptions::default().with_base_url(&server.uri());
    Market::with_options(options).expect("client options")
}

#[tokio::test]
async fn explore_page_end_to_end() {
    let mock_server = MockServer::start().await;
    let payload: Vec<Value> = (0..16)
        .map(|index| json!({ "nftId": index, "title": format!("NFT {index}"), "price": index }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .expect(1)
        .mount(&mock_server)
        .await;

    let market = market_for(&mock_server).await;
    let explore = market.explore();

    assert_eq!(explore.skeleton_count(), 8);
    explore.refresh().await;

    // One mount, one request, eight cards, load-more live.
    assert_eq!(explore.visible_items().await.len(), 8);
    assert!(explore.has_more().await);
}

#[tokio::test]
async fn landing_page_sections_window_their_lists() {
    let mock_server = MockServer::start().await;
    let many: Vec<Value> = (0..20).map(|index| json!({ "id": index })).collect();
    for endpoint in ["newItems", "hotCollections", "topSellers"] {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(&many))
            .mount(&mock_server)
            .await;
    }

    let market = market_for(&mock_server).await;

    let new_items = market.new_items();
    new_items.refresh().await;
    assert_eq!(new_items.visible_items().await.len(), 6);
    assert_eq!(new_items.skeleton_count(), 4);

    let collections = market.hot_collections();
    collections.refresh().await;
    assert_eq!(collections.visible_items().await.len(), 6);

    let sellers = market.top_sellers();
    sellers.refresh().await;
    assert_eq!(sellers.visible_items().await.len(), 12);
}

#[tokio::test]
async fn author_page_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/authors"))
        .and(query_param("author", "55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": 55,
            "authorName": "Claude Banks",
            "authorImage": "https://cdn.example/claude.png",
            "address": "0x1f6d",
            "followers": 120,
            "nftCollection": [
                { "nftId": 1, "title": "One" },
                { "nftId": 2 },
                { "nftId": 3, "nftImage": "not-a-url" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let market = market_for(&mock_server).await;
    let author = market.author();
    author.load("55", None).await;

    let header = author.header().await;
    let profile = header.ready().expect("author header");
    assert_eq!(profile.name, "Claude Banks");
    assert_eq!(profile.wallet, "0x1f6d");
    assert_eq!(profile.followers, 120);
    assert!(profile.is_navigable());

    let items = author.items().items().await;
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].title, "Untitled");
    // invalid image resolves to the configured fallback at render time
    assert_eq!(
        items[2].image_url(&market.options.nft_image_fallback),
        "images/nftImage.jpg"
    );
}

#[tokio::test]
async fn top_sellers_without_ids_stay_non_navigable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topSellers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "authorName": "With Id", "authorId": 9 },
            { "authorName": "No Id", "priceEth": 3.2 }
        ])))
        .mount(&mock_server)
        .await;

    let market = market_for(&mock_server).await;
    let sellers = market.top_sellers();
    sellers.refresh().await;

    let list = sellers.visible_items().await;
    assert!(list[0].is_navigable());
    assert!(!list[1].is_navigable());
    assert_eq!(list[1].price_eth, 3.2);
}
