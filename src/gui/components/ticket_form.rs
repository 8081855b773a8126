//! 新規チケット作成フォーム

use crate::gui::app_context::AppServices;
use crate::gui::state::submit_ticket;
use crate::gui::styles::theme::CssClasses;
use crate::models::{NewTicket, Ticket, TicketPriority};
use dioxus::prelude::*;

pub const PRIORITY_OPTIONS: [TicketPriority; 4] = [
    TicketPriority::Low,
    TicketPriority::Medium,
    TicketPriority::High,
    TicketPriority::Critical,
];

/// 作成に成功すると `on_created` を呼ぶ
#[component]
pub fn TicketForm(on_created: EventHandler<Ticket>) -> Element {
    let services = use_context::<AppServices>();
    let mut customer_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut priority = use_signal(|| TicketPriority::Medium);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        if submitting() {
            return;
        }

        let ticket = NewTicket::new(customer_name(), description()).with_priority(priority());
        let tickets = services.tickets.clone();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match submit_ticket(tickets.as_ref(), &ticket).await {
                Ok(created) => {
                    customer_name.set(String::new());
                    description.set(String::new());
                    on_created.call(created);
                }
                Err(message) => error.set(Some(message)),
            }

            submitting.set(false);
        });
    };

    rsx! {
        if let Some(message) = error() {
            div {
                class: CssClasses::ALERT_ERROR,
                role: "alert",
                "{message}"
            }
        }

        form {
            class: "ticket-form",
            onsubmit: on_submit,

            div {
                label { class: CssClasses::FORM_LABEL, "Cliente" }
                input {
                    id: "customer_name",
                    class: CssClasses::FORM_INPUT,
                    r#type: "text",
                    value: "{customer_name}",
                    required: true,
                    oninput: move |event| customer_name.set(event.value()),
                }
            }
            div {
                label { class: CssClasses::FORM_LABEL, "Descrição" }
                input {
                    id: "description",
                    class: CssClasses::FORM_INPUT,
                    r#type: "text",
                    value: "{description}",
                    required: true,
                    oninput: move |event| description.set(event.value()),
                }
            }
            div {
                label { class: CssClasses::FORM_LABEL, "Prioridade" }
                select {
                    id: "priority",
                    class: CssClasses::FORM_INPUT,
                    value: "{priority}",
                    onchange: move |event| priority.set(TicketPriority::from(event.value())),
                    for level in PRIORITY_OPTIONS {
                        option {
                            value: "{level}",
                            selected: level == priority(),
                            "{level}"
                        }
                    }
                }
            }
            button {
                class: CssClasses::BTN_PRIMARY,
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Criando..." } else { "Novo ticket" }
            }
        }
    }
}
