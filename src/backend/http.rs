//! HTTP 后端
//!
//! 通过 REST 接口访问短链服务：
//! - `GET  {base}/links/{name}`        → `[{"targetUrl": "..."}]`
//! - `POST {base}/links/{name}/clicks` → 点击计数 +1
//!
//! ureq 是同步客户端，所有请求都放在 `spawn_blocking` 中执行。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{trace, warn};
use ureq::Agent;
use url::Url;

use super::{LinkBackend, LinkRecord};
use crate::errors::{RedirectorError, Result};

pub struct HttpBackend {
    base_url: String,
    api_token: Option<String>,
    agent: Agent,
}

impl HttpBackend {
    /// `base_url` 必须是合法的 http(s) 地址
    pub fn new(base_url: &str, api_token: Option<String>, timeout_secs: u64) -> Result<Self> {
        let parsed = Url::parse(base_url.trim()).map_err(|e| {
            RedirectorError::backend_config(format!("invalid backend.base_url '{}': {}", base_url, e))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(RedirectorError::backend_config(format!(
                "backend.base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs.max(1))))
            .build()
            .into();

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_token: api_token.filter(|t| !t.is_empty()),
            agent,
        })
    }

    /// 查询地址
    pub fn link_url(&self, short_name: &str) -> String {
        format!("{}/links/{}", self.base_url, urlencoding::encode(short_name))
    }

    /// 点击计数地址
    pub fn clicks_url(&self, short_name: &str) -> String {
        format!("{}/clicks", self.link_url(short_name))
    }

    fn bearer(&self) -> Option<String> {
        self.api_token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn fetch_link_sync(
        agent: Agent,
        url: String,
        bearer: Option<String>,
    ) -> Result<Option<Vec<LinkRecord>>> {
        let mut request = agent.get(&url).header("Accept", "application/json");
        if let Some(bearer) = bearer {
            request = request.header("Authorization", bearer);
        }

        match request.call() {
            Ok(resp) => {
                let records: Option<Vec<LinkRecord>> = resp.into_body().read_json()?;
                trace!(
                    "Backend lookup {} returned {:?} record(s)",
                    url,
                    records.as_ref().map(Vec::len)
                );
                Ok(records)
            }
            // 404 视为"不存在"，而不是错误
            Err(ureq::Error::StatusCode(404)) => {
                trace!("Backend lookup {} returned 404", url);
                Ok(Some(Vec::new()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn post_click_sync(agent: Agent, url: String, bearer: Option<String>) -> Result<()> {
        let mut request = agent.post(&url);
        if let Some(bearer) = bearer {
            request = request.header("Authorization", bearer);
        }
        request.send_empty()?;
        Ok(())
    }
}

#[async_trait]
impl LinkBackend for HttpBackend {
    async fn get_link(&self, short_name: &str) -> Result<Option<Vec<LinkRecord>>> {
        let agent = self.agent.clone();
        let url = self.link_url(short_name);
        let bearer = self.bearer();

        tokio::task::spawn_blocking(move || Self::fetch_link_sync(agent, url, bearer))
            .await
            .map_err(|e| {
                warn!("Backend lookup task failed: {}", e);
                RedirectorError::backend_transport(e.to_string())
            })?
    }

    async fn increment_click_count(&self, short_name: &str) -> Result<()> {
        let agent = self.agent.clone();
        let url = self.clicks_url(short_name);
        let bearer = self.bearer();

        tokio::task::spawn_blocking(move || Self::post_click_sync(agent, url, bearer))
            .await
            .map_err(|e| RedirectorError::backend_transport(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
