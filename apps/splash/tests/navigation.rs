//! Header, pages and navigation under each sharing strategy.

#![allow(clippy::unwrap_used)]

use splash::{
    configure_store, App, AppError, ButtonId, CountProvider, CounterEnvironment, LocalApp,
    LocalCounter, Route,
};
use splash_runtime::StoreConfig;
use splash_testing::test_clock;

fn env() -> CounterEnvironment {
    CounterEnvironment::new(test_clock())
}

#[tokio::test]
async fn home_page_offers_sign_in_and_link() {
    let app = App::new(CountProvider::new().use_count());

    let screen = app.render().await;

    assert!(screen.starts_with("Splash App </>"));
    assert!(screen.contains("[ Sign In ] [ Sign Up ]"));
    assert!(screen.contains("Counter App </counter-app>"));
}

#[tokio::test]
async fn store_header_tracks_page_clicks() {
    let store = configure_store(StoreConfig::default(), env());
    let mut app = App::new(store.clone());
    app.navigate("/counter-app").await.unwrap();

    app.click(ButtonId::Decrement).await.unwrap();
    assert!(app.render().await.contains("Current count : 0"));

    for _ in 0..10 {
        app.click(ButtonId::Increment).await.unwrap();
    }
    let screen = app.render().await;
    assert!(screen.contains("Current count : 10"));
    assert!(screen.contains("Current count: 10 You're on fire!"));
    assert!(!screen.contains("[ Sign In ]"));

    app.click(ButtonId::Decrement).await.unwrap();
    let screen = app.render().await;
    assert!(screen.contains("Current count : 9"));
    assert!(!screen.contains("You're on fire!"));
}

#[tokio::test]
async fn shared_count_survives_navigation() {
    let provider = CountProvider::new();
    let mut app = App::new(provider.use_count());

    app.navigate("/counter-app").await.unwrap();
    app.click(ButtonId::Increment).await.unwrap();
    app.navigate("/").await.unwrap();
    app.navigate("/counter-app").await.unwrap();

    assert!(app.render().await.contains("Current count : 1"));
    assert_eq!(provider.use_count().count(), 1);
}

#[tokio::test]
async fn local_count_resets_on_navigation() {
    let mut app: LocalApp = App::new(LocalCounter::new(env()));

    app.navigate("/counter-app").await.unwrap();
    app.click(ButtonId::Increment).await.unwrap();
    app.click(ButtonId::Increment).await.unwrap();
    assert!(app.render().await.contains("Current count: 2"));

    app.navigate("/").await.unwrap();
    app.navigate("/counter-app").await.unwrap();

    assert!(app.render().await.contains("Current count: 0 No clicks yet!"));
}

#[tokio::test]
async fn staying_on_counter_page_keeps_local_count() {
    let mut app: LocalApp = App::new(LocalCounter::new(env()));

    app.navigate("/counter-app").await.unwrap();
    app.click(ButtonId::Increment).await.unwrap();
    app.navigate("/counter-app/").await.unwrap();

    assert_eq!(app.binding().count(), 1);
}

#[tokio::test]
async fn unknown_route_is_rejected() {
    let mut app = App::new(CountProvider::new().use_count());

    let err = app.navigate("/missing").await.unwrap_err();

    assert!(matches!(err, AppError::Route(_)));
    assert_eq!(err.to_string(), "no page at /missing");
    assert_eq!(app.route(), Route::Home);
}

#[tokio::test]
async fn clicks_after_store_shutdown_fail() {
    let store = configure_store(StoreConfig::default(), env());
    let mut app = App::new(store.clone());
    app.navigate("/counter-app").await.unwrap();

    store.shutdown_default().await.unwrap();

    let err = app.click(ButtonId::Increment).await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
}
