//! ページコンポーネント
//!
//! 各ルートに対応する画面。状態はページのロード毎に独立している。

pub mod dashboard;
pub mod home;
pub mod login;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
