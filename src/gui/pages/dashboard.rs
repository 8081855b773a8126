//! 管理ダッシュボード
//!
//! 認証ガードの内側でチケット一覧を表示し、手動更新とログアウトを提供する。

use crate::gui::app_context::AppServices;
use crate::gui::components::{AuthGuard, TicketForm, TicketTable};
use crate::gui::router::Route;
use crate::gui::state::{load_tickets, perform_logout, DashboardState};
use crate::gui::styles::theme::CssClasses;
use crate::models::Ticket;
use dioxus::prelude::*;

/// `/admin/dashboard` ルート（ガード付き）
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AuthGuard {
            DashboardPage {}
        }
    }
}

#[component]
fn DashboardPage() -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();
    let mut dashboard = use_signal(DashboardState::default);
    let auth = services.auth.clone();

    let reload = use_callback(move |()| {
        dashboard.set(DashboardState::Loading);

        let tickets = services.tickets.clone();
        spawn(async move {
            let result = load_tickets(tickets.as_ref()).await;
            dashboard.set(result.state);

            if result.unauthorized {
                navigator.push(Route::Login {});
            }
        });
    });

    // 初回マウント時に読み込み
    use_effect(move || reload.call(()));

    // ログアウトAPIの成否に関わらずログイン画面へ
    let on_logout = move |_: MouseEvent| {
        let auth = auth.clone();
        spawn(async move {
            perform_logout(auth.as_ref()).await;
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        document::Title { "Dashboard de Atendimentos - Nexus AI" }

        div {
            class: CssClasses::PAGE,

            div {
                class: CssClasses::CONTAINER,

                div {
                    class: "page-header",
                    h1 { "Dashboard de Atendimentos" }
                    div {
                        class: "page-actions",
                        button {
                            class: CssClasses::BTN_PRIMARY,
                            disabled: dashboard.read().is_loading(),
                            onclick: move |_| reload.call(()),
                            "Atualizar"
                        }
                        button {
                            class: CssClasses::BTN_SECONDARY,
                            onclick: on_logout,
                            "Sair"
                        }
                    }
                }

                TicketForm {
                    on_created: move |ticket: Ticket| {
                        tracing::debug!(id = ticket.id, "🎫 Reloading after ticket creation");
                        reload.call(());
                    }
                }

                {match &*dashboard.read() {
                    DashboardState::Loading => rsx! {
                        div {
                            class: "loading",
                            div { class: CssClasses::SPINNER }
                            p { "Carregando tickets..." }
                        }
                    },
                    DashboardState::Error(message) => rsx! {
                        div {
                            class: CssClasses::ALERT_ERROR,
                            role: "alert",
                            strong { "Erro! " }
                            span { "{message}" }
                        }
                    },
                    DashboardState::Loaded(tickets) => rsx! {
                        TicketTable { tickets: tickets.clone() }
                    },
                }}
            }
        }
    }
}
