//! 页面边界
//!
//! 重定向器只通过 [`Page`] 与宿主页面交互：读取路径、设置跳转目标、
//! 写入某个元素的内容。HTTP 服务和 CLI 都使用 [`DocumentPage`]。

mod document;

pub use document::DocumentPage;

/// 错误信息所在元素
pub const MESSAGE_ELEMENT_ID: &str = "message";

/// 手动重试控件
pub const MANUAL_REDIRECT_ELEMENT_ID: &str = "manual-redirect";

/// 解析失败时展示的固定内容
pub const INVALID_LINK_HTML: &str = "<h1>Error</h1><p>Invalid or expired link.</p>";

pub trait Page: Send {
    /// 当前路径（对应 `location.pathname`）
    fn pathname(&self) -> &str;

    /// 设置跳转目标（对应 `location.href = ...`）
    fn set_location_href(&mut self, href: &str);

    /// 写入元素内容（对应 `element.innerHTML = ...`）
    fn set_inner_html(&mut self, element_id: &str, html: &str);
}
