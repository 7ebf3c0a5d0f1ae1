use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::backend::{LinkBackend, create_backend};
use crate::config::get_config;
use crate::redirector::Redirector;

pub struct StartupContext {
    pub backend: Arc<dyn LinkBackend>,
    pub redirector: Redirector,
}

/// 准备启动上下文（后端与重定向器），server 与 CLI 共用
pub fn prepare_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();
    let backend = create_backend(&config.backend).context("Failed to create link backend")?;
    let redirector = Redirector::new(Arc::clone(&backend));

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        backend,
        redirector,
    })
}
