//! チャットウィンドウコンポーネント
//!
//! 入力を受け取って会話エンドポイントへ送り、返信をログへ追加する。

use crate::gui::app_context::AppServices;
use crate::gui::dom_controller::DomController;
use crate::gui::state::{exchange, ChatSession};
use crate::gui::styles::theme::CssClasses;
use crate::models::ChatMessage;
use dioxus::prelude::*;

/// メッセージ領域のDOM ID（自動スクロール対象）
pub const MESSAGES_CONTAINER_ID: &str = "chat-messages";

fn row_class(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        "chat-row chat-row-user"
    } else {
        "chat-row chat-row-bot"
    }
}

fn bubble_class(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        CssClasses::BUBBLE_USER
    } else {
        CssClasses::BUBBLE_BOT
    }
}

#[component]
pub fn ChatInterface() -> Element {
    let services = use_context::<AppServices>();
    let mut session = use_signal(ChatSession::new);

    // 入力中の再描画ではスクロールさせない
    let message_count = use_memo(move || session.read().messages.len());

    use_effect(move || {
        let count = message_count();
        spawn(async move {
            let controller = DomController::new(MESSAGES_CONTAINER_ID);
            if let Err(e) = controller.scroll_to_bottom().await {
                tracing::debug!("📜 [DOM] Auto-scroll skipped ({} messages): {}", count, e);
            }
        });
    });

    let send_message = use_callback(move |()| {
        let Some(text) = session.write().begin_submit() else {
            return;
        };

        let chat = services.chat.clone();
        spawn(async move {
            let outcome = exchange(chat.as_ref(), &text).await;
            session.write().finish(outcome);
        });
    });

    let busy = session.read().busy;
    let can_submit = session.read().can_submit();
    let messages = session.read().messages.clone();
    let input = session.read().input.clone();

    rsx! {
        div {
            class: CssClasses::CHAT_WINDOW,

            // ヘッダー
            div {
                class: CssClasses::CHAT_HEADER,
                div { class: "chat-status-dot" }
                "Nexus AI Suporte"
            }

            // メッセージ領域
            div {
                id: MESSAGES_CONTAINER_ID,
                class: CssClasses::CHAT_MESSAGES,

                if messages.is_empty() {
                    div {
                        class: CssClasses::CHAT_GREETING,
                        p { "Olá! Sou o Nexus AI." }
                        p { "Como posso ajudar com seus servidores hoje?" }
                    }
                }

                for message in messages.iter() {
                    div {
                        key: "{message.id}",
                        class: row_class(message),
                        div {
                            class: bubble_class(message),
                            "{message.text}"
                        }
                    }
                }

                // 入力中インジケーター
                if busy {
                    div {
                        class: "chat-row chat-row-bot",
                        div {
                            class: CssClasses::CHAT_TYPING,
                            "Nexus AI está digitando..."
                        }
                    }
                }
            }

            // 入力エリア
            div {
                class: CssClasses::CHAT_INPUT_ROW,
                input {
                    class: CssClasses::FORM_INPUT,
                    r#type: "text",
                    placeholder: "Digite sua dúvida...",
                    value: "{input}",
                    disabled: busy,
                    oninput: move |event| session.write().input = event.value(),
                    onkeydown: move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            send_message.call(());
                        }
                    },
                }
                button {
                    class: CssClasses::BTN_PRIMARY,
                    disabled: !can_submit,
                    onclick: move |_| send_message.call(()),
                    "Enviar"
                }
            }
        }
    }
}
