// Core modules
pub mod app_context; // サービスのコンテキスト共有
pub mod config_manager; // 設定管理モジュール
pub mod dom_controller; // スクロール制御
pub mod state; // 画面ごとの状態機械
pub mod utils; // ユーティリティ関数

// Dioxus UI components
pub mod components;
pub mod pages;
pub mod router;
pub mod styles;

pub use app_context::AppServices;
pub use router::{App, Route};
