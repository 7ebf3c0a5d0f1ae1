//! HttpBackend tests against a throwaway actix server

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};

use shortlink_redirector::backend::{HttpBackend, LinkBackend, LinkRecord};
use shortlink_redirector::errors::RedirectorError;
use shortlink_redirector::page::DocumentPage;
use shortlink_redirector::redirector::{RedirectOutcome, Redirector, Trigger};

const TOKEN: &str = "test-token";

struct FakeState {
    clicks: AtomicUsize,
}

async fn get_link(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "known" => HttpResponse::Ok().json(vec![LinkRecord::new("https://example.com/known")]),
        "a b" => HttpResponse::Ok().json(vec![LinkRecord::new("https://example.com/space")]),
        "empty" => HttpResponse::Ok().json(Vec::<LinkRecord>::new()),
        "nullish" => HttpResponse::Ok()
            .content_type("application/json")
            .body("null"),
        "boom" => HttpResponse::InternalServerError().finish(),
        _ => HttpResponse::NotFound().finish(),
    }
}

async fn post_click(req: HttpRequest, state: web::Data<FakeState>) -> HttpResponse {
    let authorized = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        == Some("Bearer test-token");
    if !authorized {
        return HttpResponse::Unauthorized().finish();
    }
    state.clicks.fetch_add(1, Ordering::SeqCst);
    HttpResponse::NoContent().finish()
}

/// 启动假后端，返回 base_url 与共享状态
fn start_fake_backend() -> (String, web::Data<FakeState>, actix_web::dev::ServerHandle) {
    let state = web::Data::new(FakeState {
        clicks: AtomicUsize::new(0),
    });
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/api/links/{name}", web::get().to(get_link))
            .route("/api/links/{name}/clicks", web::post().to(post_click))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind fake backend");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);

    (format!("http://{}/api", addr), state, handle)
}

#[actix_rt::test]
async fn test_get_link_variants() {
    let (base_url, _state, handle) = start_fake_backend();
    let backend = HttpBackend::new(&base_url, None, 2).unwrap();

    assert_eq!(
        backend.get_link("known").await.unwrap(),
        Some(vec![LinkRecord::new("https://example.com/known")])
    );
    assert_eq!(
        backend.get_link("a b").await.unwrap(),
        Some(vec![LinkRecord::new("https://example.com/space")])
    );
    assert_eq!(backend.get_link("empty").await.unwrap(), Some(vec![]));
    assert_eq!(backend.get_link("unknown").await.unwrap(), Some(vec![]));
    assert_eq!(backend.get_link("nullish").await.unwrap(), None);

    let err = backend.get_link("boom").await.unwrap_err();
    assert!(matches!(err, RedirectorError::BackendResponse(_)));

    handle.stop(false).await;
}

#[actix_rt::test]
async fn test_increment_sends_bearer_token() {
    let (base_url, state, handle) = start_fake_backend();

    let anonymous = HttpBackend::new(&base_url, None, 2).unwrap();
    assert!(anonymous.increment_click_count("known").await.is_err());
    assert_eq!(state.clicks.load(Ordering::SeqCst), 0);

    let backend = HttpBackend::new(&base_url, Some(TOKEN.to_string()), 2).unwrap();
    backend.increment_click_count("known").await.unwrap();
    assert_eq!(state.clicks.load(Ordering::SeqCst), 1);

    handle.stop(false).await;
}

#[actix_rt::test]
async fn test_redirector_over_http_backend() {
    let (base_url, state, handle) = start_fake_backend();
    let backend = Arc::new(HttpBackend::new(&base_url, Some(TOKEN.to_string()), 2).unwrap());
    let redirector = Redirector::new(backend);

    let mut page = DocumentPage::new("/known");
    assert_eq!(
        redirector.redirect(&mut page, Trigger::Load).await,
        RedirectOutcome::Navigated {
            target_url: "https://example.com/known".to_string()
        }
    );

    for _ in 0..100 {
        if state.clicks.load(Ordering::SeqCst) == 1 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(state.clicks.load(Ordering::SeqCst), 1);

    let mut page = DocumentPage::new("/boom");
    assert_eq!(
        redirector.redirect(&mut page, Trigger::Load).await,
        RedirectOutcome::Failed
    );

    handle.stop(false).await;
}
