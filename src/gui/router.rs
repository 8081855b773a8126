//! ルーティングとルートコンポーネント

use crate::gui::pages::{Dashboard, Home, Login};
use crate::gui::styles::theme::get_embedded_css;
use dioxus::prelude::*;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/login")]
    Login {},
    #[route("/admin/dashboard")]
    Dashboard {},
}

/// アプリケーションのルート
///
/// `AppServices` は起動時にルートコンテキストとして渡されている前提。
#[component]
pub fn App() -> Element {
    rsx! {
        // CSSスタイルをdocument headに注入
        document::Style {
            {get_embedded_css()}
        }

        Router::<Route> {}
    }
}
