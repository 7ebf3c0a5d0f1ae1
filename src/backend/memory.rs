//! 内存后端
//!
//! 用于本地运行和测试，映射与点击计数都保存在 DashMap 中。

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;

use super::{LinkBackend, LinkRecord};
use crate::config::SeedLink;
use crate::errors::Result;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    links: DashMap<String, String>,
    clicks: DashMap<String, u64>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: &[SeedLink]) -> Self {
        let backend = Self::new();
        for link in seed {
            backend.insert(&link.short_name, &link.target_url);
        }
        backend
    }

    pub fn insert(&self, short_name: &str, target_url: &str) {
        self.links
            .insert(short_name.to_string(), target_url.to_string());
    }

    pub fn remove(&self, short_name: &str) -> Option<String> {
        self.links.remove(short_name).map(|(_, target)| target)
    }

    /// 当前点击数（未点击过为 0）
    pub fn click_count(&self, short_name: &str) -> u64 {
        self.clicks.get(short_name).map(|c| *c).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkBackend for MemoryBackend {
    async fn get_link(&self, short_name: &str) -> Result<Option<Vec<LinkRecord>>> {
        let records = self
            .links
            .get(short_name)
            .map(|target| vec![LinkRecord::new(target.value().clone())])
            .unwrap_or_default();
        trace!("Memory lookup for '{}': {} record(s)", short_name, records.len());
        Ok(Some(records))
    }

    async fn increment_click_count(&self, short_name: &str) -> Result<()> {
        *self.clicks.entry(short_name.to_string()).or_insert(0) += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
