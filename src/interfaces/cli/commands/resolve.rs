//! One-shot resolve command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::page::{DocumentPage, MESSAGE_ELEMENT_ID};
use crate::redirector::{RedirectOutcome, Trigger};
use crate::runtime::lifetime::startup;

/// 对给定路径执行一次完整的重定向流程并打印结果
pub async fn resolve_path(path: &str) -> Result<(), CliError> {
    let ctx = startup::prepare_startup().map_err(|e| CliError::StartupError(format!("{:#}", e)))?;

    let mut page = DocumentPage::new(path);
    match ctx.redirector.redirect(&mut page, Trigger::Manual).await {
        RedirectOutcome::Navigated { target_url } => {
            println!("{} {}", "→".green().bold(), target_url);
            // 给后台点击通知一点时间，进程即将退出
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            Ok(())
        }
        RedirectOutcome::Failed => {
            if let Some(message) = page.inner_html(MESSAGE_ELEMENT_ID) {
                println!("{}", message.dimmed());
            }
            Err(CliError::LinkUnavailable(path.to_string()))
        }
    }
}
