//! 認証ガードコンポーネント
//!
//! 子要素をサーバー確認済みのセッションの背後に置く。
//! 確認はマウントごとに1回だけで、ポーリングはしない。

use crate::gui::app_context::AppServices;
use crate::gui::router::Route;
use crate::gui::state::{check_session, GuardState};
use crate::gui::styles::theme::CssClasses;
use dioxus::prelude::*;

#[component]
pub fn AuthGuard(children: Element) -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();
    let mut guard = use_signal(GuardState::default);

    use_effect(move || {
        let auth = services.auth.clone();
        spawn(async move {
            let state = check_session(auth.as_ref()).await;
            guard.set(state);

            if state == GuardState::Redirecting {
                tracing::info!("🔒 Session missing, redirecting to login");
                navigator.push(Route::Login {});
            }
        });
    });

    rsx! {
        GuardedContent {
            state: guard(),
            {children}
        }
    }
}

/// ガード状態に応じた表示
///
/// 子要素は `Authenticated` の時だけ描画する。確認中はスピナー、リダイレクト中は何も出さない。
#[component]
pub fn GuardedContent(state: GuardState, children: Element) -> Element {
    if state.renders_children() {
        return children;
    }

    match state {
        GuardState::Pending => rsx! {
            div {
                class: CssClasses::PAGE_CENTERED,
                div { class: CssClasses::SPINNER }
            }
        },
        _ => rsx! {},
    }
}
