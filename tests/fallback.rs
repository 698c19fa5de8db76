use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mockito::Matcher;
use techcard_import::{
    FallbackSource, GoogleSheetSource, SheetConfig, StaticCatalog, TechCardImporter,
};

fn sheet_source(base_url: &str) -> GoogleSheetSource {
    GoogleSheetSource::new(&SheetConfig {
        spreadsheet_id: "test-sheet".to_string(),
        sheet_gid: "0".to_string(),
        base_url: base_url.to_string(),
        timeout: 5,
    })
}

async fn mock_export(server: &mut mockito::ServerGuard, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/spreadsheets/d/test-sheet/export")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_failed_fetch_activates_catalog_and_notifies_once() {
    let _ = env_logger::try_init();

    let mut server = mockito::Server::new_async().await;
    let _mock = mock_export(&mut server, 500, "boom").await;

    let notices = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notices);
    let fallback = FallbackSource::new(Box::new(sheet_source(&server.url())))
        .with_notifier(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    let active = fallback.load().await;

    // The built-in catalog becomes the active dataset
    assert_eq!(active, StaticCatalog::cards());
    assert_eq!(notices.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_sheet_activates_catalog_without_notice() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_export(&mut server, 200, "Категория,Название,Ингредиенты,Приготовление").await;

    let notices = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notices);
    let fallback = FallbackSource::new(Box::new(sheet_source(&server.url())))
        .with_notifier(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    let active = fallback.load().await;

    assert_eq!(active, StaticCatalog::cards());
    assert_eq!(notices.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_healthy_sheet_wins_over_catalog() {
    let mut server = mockito::Server::new_async().await;
    let csv = "Категория,Название,Ингредиенты,Приготовление\n\
               сезонные,Глинтвейн,Вино;Специи,Прогреть;Процедить";
    let _mock = mock_export(&mut server, 200, csv).await;

    let fallback = FallbackSource::new(Box::new(sheet_source(&server.url())));
    let active = fallback.load().await;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Глинтвейн");
    assert_ne!(active, StaticCatalog::cards());
}

#[tokio::test]
async fn test_builder_fallback_never_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_export(&mut server, 404, "gone").await;

    let recipes = TechCardImporter::builder()
        .base_url(server.url())
        .spreadsheet_id("test-sheet")
        .with_fallback()
        .build()
        .await
        .unwrap();

    assert_eq!(recipes, StaticCatalog::cards());
}
