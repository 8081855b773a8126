//! 管理画面ログインページ

use crate::api::Credentials;
use crate::gui::app_context::AppServices;
use crate::gui::router::Route;
use crate::gui::state::{perform_login, LoginOutcome, LoginState};
use crate::gui::styles::theme::CssClasses;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut login_state = use_signal(LoginState::default);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        // 送信中の二重送信を防ぐ
        if login_state.read().is_submitting() {
            return;
        }
        login_state.set(LoginState::Submitting);

        let credentials = Credentials::new(username(), password());
        let auth = services.auth.clone();

        spawn(async move {
            let outcome = perform_login(auth.as_ref(), &credentials).await;
            let authenticated = outcome == LoginOutcome::Authenticated;
            login_state.set(outcome.into());

            if authenticated {
                navigator.push(Route::Dashboard {});
            }
        });
    };

    let submitting = login_state.read().is_submitting();
    let error_message = login_state.read().error_message().map(str::to_owned);

    rsx! {
        document::Title { "Login Administrativo - Nexus AI" }

        div {
            class: CssClasses::PAGE_CENTERED,

            div {
                class: CssClasses::CARD,

                h1 {
                    style: "font-size: 1.5rem; font-weight: 700; margin: 0 0 24px; text-align: center; color: #1f2937;",
                    "Nexus Admin"
                }

                if let Some(message) = error_message {
                    div {
                        class: CssClasses::ALERT_ERROR,
                        role: "alert",
                        p { style: "margin: 0; font-size: 14px;", "{message}" }
                    }
                }

                form {
                    onsubmit: on_submit,

                    div {
                        class: CssClasses::FORM_GROUP,
                        label { class: CssClasses::FORM_LABEL, "Usuário" }
                        input {
                            id: "username",
                            class: CssClasses::FORM_INPUT,
                            r#type: "text",
                            placeholder: "Digite seu usuário",
                            value: "{username}",
                            required: true,
                            oninput: move |event| username.set(event.value()),
                        }
                    }

                    div {
                        class: CssClasses::FORM_GROUP,
                        label { class: CssClasses::FORM_LABEL, "Senha" }
                        input {
                            id: "password",
                            class: CssClasses::FORM_INPUT,
                            r#type: "password",
                            placeholder: "Digite sua senha",
                            value: "{password}",
                            required: true,
                            oninput: move |event| password.set(event.value()),
                        }
                    }

                    button {
                        class: CssClasses::BTN_BLOCK,
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Entrando..." } else { "Entrar" }
                    }
                }
            }
        }
    }
}
