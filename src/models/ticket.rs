//! サポートチケットのデータ構造
//!
//! チケットはバックエンドが所有し、クライアントは取得した読み取り専用コピーのみを保持する。

use serde::{Deserialize, Serialize};
use std::fmt;

/// チケットの状態
///
/// 未知の値はデコード時に失敗させず `Other` に保持し、表示側でデフォルトスタイルを適用する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    Other(String),
}

impl TicketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
            TicketStatus::Other(raw) => raw,
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Open
    }
}

impl From<String> for TicketStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPEN" => TicketStatus::Open,
            "IN_PROGRESS" => TicketStatus::InProgress,
            "RESOLVED" => TicketStatus::Resolved,
            "CLOSED" => TicketStatus::Closed,
            _ => TicketStatus::Other(value),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(value: TicketStatus) -> Self {
        match value {
            TicketStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// チケットの優先度
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl TicketPriority {
    pub fn as_str(&self) -> &str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
            TicketPriority::Critical => "CRITICAL",
            TicketPriority::Other(raw) => raw,
        }
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Medium
    }
}

impl From<String> for TicketPriority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LOW" => TicketPriority::Low,
            "MEDIUM" => TicketPriority::Medium,
            "HIGH" => TicketPriority::High,
            "CRITICAL" => TicketPriority::Critical,
            _ => TicketPriority::Other(value),
        }
    }
}

impl From<TicketPriority> for String {
    fn from(value: TicketPriority) -> Self {
        match value {
            TicketPriority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// バックエンドから取得したチケット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub customer_name: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// ISO 8601（受信したまま保持）
    pub created_at: String,
    pub updated_at: String,
}

/// チケット作成リクエスト
///
/// id とタイムスタンプはサーバー側で採番される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub customer_name: String,
    pub description: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: TicketPriority,
}

impl NewTicket {
    pub fn new(customer_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    /// 必須項目が空でないか確認
    pub fn is_complete(&self) -> bool {
        !self.customer_name.trim().is_empty() && !self.description.trim().is_empty()
    }
}
