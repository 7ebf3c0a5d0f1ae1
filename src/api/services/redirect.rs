use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{error, trace};

use crate::page::{DocumentPage, Page};
use crate::redirector::{RedirectOutcome, Redirector, Trigger};

pub struct RedirectService {}

impl RedirectService {
    /// 页面加载（或手动重试）即一次完整的重定向流程
    pub async fn handle_redirect(
        req: HttpRequest,
        redirector: web::Data<Redirector>,
    ) -> impl Responder {
        let trigger = Self::trigger_from_query(req.query_string());
        let mut page = DocumentPage::new(req.path());

        match redirector.redirect(&mut page, trigger).await {
            RedirectOutcome::Navigated { target_url } => Self::finish_redirect(&target_url),
            RedirectOutcome::Failed => Self::invalid_link_response(&page),
        }
    }

    /// `?trigger=manual` 表示来自 `manual-redirect` 控件
    pub fn trigger_from_query(query: &str) -> Trigger {
        let manual = url::form_urlencoded::parse(query.as_bytes())
            .any(|(key, value)| key == "trigger" && value == "manual");
        if manual { Trigger::Manual } else { Trigger::Load }
    }

    #[inline]
    fn finish_redirect(target_url: &str) -> HttpResponse {
        HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header(("Location", target_url))
            .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
            .finish()
    }

    fn invalid_link_response(page: &DocumentPage) -> HttpResponse {
        match page.render() {
            Ok(html) => {
                trace!("Rendered invalid link page for {}", page.pathname());
                HttpResponse::build(StatusCode::NOT_FOUND)
                    .insert_header(("Content-Type", "text/html; charset=utf-8"))
                    .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
                    .body(html)
            }
            Err(e) => {
                error!("Failed to render page: {}", e);
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .insert_header(("Content-Type", "text/html; charset=utf-8"))
                    .body("Internal Server Error")
            }
        }
    }
}

/// Redirect 路由配置（兜底路由，需最后注册）
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{path:.*}", web::get().to(RedirectService::handle_redirect))
        .route("/{path:.*}", web::head().to(RedirectService::handle_redirect))
}
