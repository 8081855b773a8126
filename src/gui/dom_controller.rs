//! DOM制御モジュール
//!
//! チャット表示のスクロール操作を `document::eval` 経由で行う。

/// DOM制御クラス
#[derive(Debug, Clone, PartialEq)]
pub struct DomController {
    /// 制御対象コンテナID
    container_id: String,
}

impl DomController {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// 最新メッセージまでスクロールするスクリプト
    pub fn scroll_script(&self) -> String {
        format!(
            r#"
            (function() {{
                const container = document.getElementById('{}');
                if (!container) {{
                    return false;
                }}
                const last = container.lastElementChild;
                if (last) {{
                    last.scrollIntoView({{ behavior: 'smooth', block: 'end' }});
                }} else {{
                    container.scrollTop = container.scrollHeight;
                }}
                return true;
            }})()
            "#,
            self.container_id
        )
    }

    /// 最新メッセージまでスクロール
    pub async fn scroll_to_bottom(&self) -> Result<(), String> {
        match dioxus::document::eval(&self.scroll_script()).await {
            Ok(_) => {
                tracing::trace!("📜 [DOM] Scrolled {} to bottom", self.container_id);
                Ok(())
            }
            Err(e) => Err(format!("Scroll failed: {:?}", e)),
        }
    }
}
