use std::collections::BTreeMap;

use rust_embed::Embed;

use super::{MANUAL_REDIRECT_ELEMENT_ID, MESSAGE_ELEMENT_ID, Page};
use crate::errors::{RedirectorError, Result};

// 宿主页面模板
#[derive(Embed)]
#[folder = "assets/"]
struct PageAssets;

const TEMPLATE_NAME: &str = "redirect.html";

const MANUAL_REDIRECT_HREF: &str = "?trigger=manual";

/// 记录重定向器对页面做过的所有修改，最后渲染成 HTML
#[derive(Debug, Clone, Default)]
pub struct DocumentPage {
    pathname: String,
    location_href: Option<String>,
    elements: BTreeMap<String, String>,
}

impl DocumentPage {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Default::default()
        }
    }

    /// 跳转目标（未设置表示没有发生跳转）
    pub fn location_href(&self) -> Option<&str> {
        self.location_href.as_deref()
    }

    pub fn inner_html(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).map(String::as_str)
    }

    /// `manual-redirect` 控件的目标
    ///
    /// 只含查询串的相对引用，浏览器保留当前路径，不会被路径带到其他站点
    pub fn manual_redirect_href(&self) -> &'static str {
        MANUAL_REDIRECT_HREF
    }

    /// 渲染为完整 HTML 文档
    pub fn render(&self) -> Result<String> {
        let template = PageAssets::get(TEMPLATE_NAME).ok_or_else(|| {
            RedirectorError::template(format!("embedded template '{}' missing", TEMPLATE_NAME))
        })?;
        let html = String::from_utf8_lossy(&template.data);

        Ok(fill_placeholders(
            &html,
            &[
                ("MESSAGE_ID", MESSAGE_ELEMENT_ID),
                ("MANUAL_REDIRECT_ID", MANUAL_REDIRECT_ELEMENT_ID),
                ("MESSAGE", self.inner_html(MESSAGE_ELEMENT_ID).unwrap_or("")),
                ("MANUAL_REDIRECT_HREF", self.manual_redirect_href()),
                ("REDIRECTOR_VERSION", env!("CARGO_PKG_VERSION")),
            ],
        ))
    }
}

/// 单遍替换 `%NAME%` 占位符，替换进来的内容不会再被扫描；未知名称原样保留
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replacement = after.find('%').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match replacement {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

impl Page for DocumentPage {
    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn set_location_href(&mut self, href: &str) {
        self.location_href = Some(href.to_string());
    }

    fn set_inner_html(&mut self, element_id: &str, html: &str) {
        self.elements
            .insert(element_id.to_string(), html.to_string());
    }
}
