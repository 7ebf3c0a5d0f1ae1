//! 重定向器
//!
//! 每次触发（页面加载或手动重试）都会完整执行一遍：
//! 1. 从路径末段取出 short name
//! 2. 向后端查询目标地址
//! 3. 成功：异步通知点击计数（不等待结果），设置跳转目标
//! 4. 失败或为空：在 `message` 元素中显示固定错误信息
//!
//! 同一页面的多次触发之间不做去重或取消。

use std::sync::Arc;

use actix_web::http::header::HeaderValue;
use tracing::{debug, error, instrument, warn};

use crate::backend::{LinkBackend, LinkRecord};
use crate::page::{INVALID_LINK_HTML, MESSAGE_ELEMENT_ID, Page};

/// 触发来源，仅用于日志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    #[default]
    Load,
    Manual,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Load => "load",
            Trigger::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次重定向的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    Navigated { target_url: String },
    /// 未找到、后端错误在用户侧表现一致
    Failed,
}

#[derive(Clone)]
pub struct Redirector {
    backend: Arc<dyn LinkBackend>,
}

impl Redirector {
    pub fn new(backend: Arc<dyn LinkBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn LinkBackend> {
        &self.backend
    }

    /// 路径最后一个 `/` 之后的部分，不做任何校验，可能为空
    pub fn extract_short_name(pathname: &str) -> String {
        pathname
            .rsplit_once('/')
            .map_or(pathname, |(_, last)| last)
            .to_string()
    }

    /// 查询短链；任何错误都只记录日志并返回 `None`
    pub async fn resolve(&self, short_name: &str) -> Option<Vec<LinkRecord>> {
        match self.backend.get_link(short_name).await {
            Ok(Some(records)) => Some(records),
            Ok(None) => {
                error!(
                    "Link lookup for '{}' failed: empty response from {} backend",
                    short_name,
                    self.backend.name()
                );
                None
            }
            Err(e) => {
                error!("Link lookup for '{}' failed: {}", short_name, e);
                None
            }
        }
    }

    /// 目标能否作为跳转地址（`Location` 头）使用，控制字符等会被拒绝
    pub fn is_navigable(target_url: &str) -> bool {
        HeaderValue::from_str(target_url).is_ok()
    }

    /// 通知点击计数，不等待结果
    pub fn notify_click(&self, short_name: &str) {
        let backend = Arc::clone(&self.backend);
        let short_name = short_name.to_string();

        tokio::spawn(async move {
            if let Err(e) = backend.increment_click_count(&short_name).await {
                debug!("Click increment for '{}' failed: {}", short_name, e);
            }
        });
    }

    #[instrument(
        skip(self, page, trigger),
        fields(path = %page.pathname(), trigger = %trigger)
    )]
    pub async fn redirect<P: Page + ?Sized>(
        &self,
        page: &mut P,
        trigger: Trigger,
    ) -> RedirectOutcome {
        let short_name = Self::extract_short_name(page.pathname());
        debug!("Short name: {}", short_name);

        let first = self
            .resolve(&short_name)
            .await
            .and_then(|records| records.into_iter().next())
            .filter(|record| {
                let navigable = Self::is_navigable(&record.target_url);
                if !navigable {
                    warn!(
                        "Target URL for '{}' is not navigable: {:?}",
                        short_name, record.target_url
                    );
                }
                navigable
            });

        match first {
            Some(record) => {
                self.notify_click(&short_name);
                debug!("Target URL: {}", record.target_url);
                page.set_location_href(&record.target_url);
                RedirectOutcome::Navigated {
                    target_url: record.target_url,
                }
            }
            None => {
                page.set_inner_html(MESSAGE_ELEMENT_ID, INVALID_LINK_HTML);
                RedirectOutcome::Failed
            }
        }
    }
}
