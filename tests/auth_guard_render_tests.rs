//! 認証ガードのSSR描画テスト
//!
//! セッション確認の結果ごとに、保護された子要素が出るかどうかを確認する。

use async_trait::async_trait;
use dioxus::prelude::*;
use nexus_support::api::{ApiError, ApiResult, AuthService, Credentials, CurrentUser, LoginResponse};
use nexus_support::gui::components::GuardedContent;
use nexus_support::gui::state::{check_session, GuardState};
use reqwest::StatusCode;

const PROTECTED_TEXT: &str = "Conteúdo protegido";

/// セッション確認の結果だけを差し替えるテスト用サービス
struct StubAuth {
    logged_in: bool,
}

#[async_trait]
impl AuthService for StubAuth {
    async fn current_user(&self) -> ApiResult<CurrentUser> {
        if self.logged_in {
            Ok(CurrentUser {
                username: Some("admin".to_string()),
            })
        } else {
            Err(ApiError::Unauthorized(StatusCode::FORBIDDEN))
        }
    }

    async fn fetch_csrf(&self) -> ApiResult<()> {
        Ok(())
    }

    async fn login(&self, _credentials: &Credentials) -> ApiResult<LoginResponse> {
        Ok(LoginResponse::default())
    }

    async fn logout(&self) -> ApiResult<()> {
        Ok(())
    }
}

#[component]
fn ProtectedPage(state: GuardState) -> Element {
    rsx! {
        GuardedContent {
            state,
            p { class: "protected", "{PROTECTED_TEXT}" }
        }
    }
}

fn render_guard(state: GuardState) -> String {
    let mut dom = VirtualDom::new_with_props(
        ProtectedPage,
        ProtectedPageProps::builder().state(state).build(),
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_pending_shows_spinner_only() {
    let html = render_guard(GuardState::default());

    assert!(html.contains(r#"class="spinner""#), "{}", html);
    assert!(!html.contains(PROTECTED_TEXT));
}

#[tokio::test]
async fn test_valid_session_renders_children() {
    let state = check_session(&StubAuth { logged_in: true }).await;
    assert_eq!(state, GuardState::Authenticated);

    let html = render_guard(state);
    assert!(html.contains(PROTECTED_TEXT), "{}", html);
    assert!(!html.contains("spinner"));
}

#[tokio::test]
async fn test_failed_session_renders_nothing() {
    let state = check_session(&StubAuth { logged_in: false }).await;
    assert_eq!(state, GuardState::Redirecting);

    let html = render_guard(state);
    assert!(!html.contains(PROTECTED_TEXT), "{}", html);
    assert!(!html.contains("spinner"));
}
