//! 短链后端
//!
//! 后端保存 short name → target URL 的映射和点击计数。
//! 重定向器只通过 [`LinkBackend`] 访问它，传输方式对上层透明。

pub mod http;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{BackendConfig, BackendKind};
use crate::errors::{RedirectorError, Result};

pub use http::HttpBackend;
pub use memory::MemoryBackend;

/// 后端返回的一条短链记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub target_url: String,
}

impl LinkRecord {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
        }
    }
}

#[async_trait]
pub trait LinkBackend: Send + Sync {
    /// 查询短链
    ///
    /// - `Ok(Some(records))`: 后端正常应答，空序列表示未找到
    /// - `Ok(None)`: 后端应答为空值
    /// - `Err(_)`: 传输或后端错误
    async fn get_link(&self, short_name: &str) -> Result<Option<Vec<LinkRecord>>>;

    /// 点击计数 +1
    async fn increment_click_count(&self, short_name: &str) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// 根据配置创建后端
pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn LinkBackend>> {
    let backend: Arc<dyn LinkBackend> = match config.kind {
        BackendKind::Http => {
            let base_url = config
                .base_url
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| {
                    RedirectorError::backend_config("backend.base_url is required for http backend")
                })?;
            Arc::new(HttpBackend::new(
                base_url,
                config.api_token.clone(),
                config.timeout_secs,
            )?)
        }
        BackendKind::Memory => Arc::new(MemoryBackend::from_seed(&config.links)),
    };

    info!("Using link backend: {}", backend.name());
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedLink;

    #[test]
    fn test_link_record_uses_camel_case() {
        let json = serde_json::to_string(&LinkRecord::new("https://example.com")).unwrap();
        assert_eq!(json, r#"{"targetUrl":"https://example.com"}"#);
    }

    #[test]
    fn test_create_http_backend_requires_base_url() {
        let config = BackendConfig::default();
        let err = create_backend(&config).err().expect("must fail without base_url");
        assert!(matches!(err, RedirectorError::BackendConfig(_)));
    }

    #[test]
    fn test_create_memory_backend() {
        let config = BackendConfig {
            kind: BackendKind::Memory,
            links: vec![SeedLink {
                short_name: "docs".to_string(),
                target_url: "https://docs.example.com".to_string(),
            }],
            ..Default::default()
        };
        let backend = create_backend(&config).unwrap();
        assert_eq!(backend.name(), "memory");
    }
}
