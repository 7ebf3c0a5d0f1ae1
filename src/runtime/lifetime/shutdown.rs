use tokio::signal;
use tracing::{info, warn};

/// 关闭时等待进行中请求的宽限时间（秒）
pub const SHUTDOWN_GRACE_SECS: u64 = 5;

/// 等待 Ctrl+C
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}
