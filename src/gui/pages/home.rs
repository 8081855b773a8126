use crate::gui::components::ChatInterface;
use crate::gui::styles::theme::CssClasses;
use crate::gui::utils::current_year;
use dioxus::prelude::*;

/// トップページ
///
/// 固定の紹介文とチャットウィンドウのみ。独自の通信は行わない。
#[component]
pub fn Home() -> Element {
    let year = current_year();

    rsx! {
        document::Title { "Nexus AI - Suporte Inteligente" }

        div {
            class: CssClasses::PAGE_CENTERED,

            main {
                style: "width: 100%; max-width: 56rem; display: flex; flex-direction: column; align-items: center;",

                h1 { class: "home-title", "Nexus AI" }
                p {
                    class: "home-tagline",
                    "Suporte técnico instantâneo powered by Google Vertex AI & Dialogflow"
                }

                ChatInterface {}

                footer {
                    class: "home-footer",
                    "© {year} Nexus Tecnologia - Rodando no Google Cloud Run"
                }
            }
        }
    }
}
