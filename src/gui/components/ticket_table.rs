//! チケット一覧テーブル
//!
//! 受け取った順のまま描画する。並び替え・絞り込み・ページングは行わない。

use crate::gui::styles::theme::{priority_text_class, status_badge_class, CssClasses};
use crate::gui::utils::format_date_pt_br;
use crate::models::Ticket;
use dioxus::prelude::*;

pub const TABLE_HEADERS: [&str; 6] = ["ID", "Cliente", "Descrição", "Status", "Prioridade", "Data"];
pub const EMPTY_MESSAGE: &str = "Nenhum ticket encontrado.";

#[component]
pub fn TicketTable(tickets: Vec<Ticket>) -> Element {
    rsx! {
        div {
            class: CssClasses::TABLE_WRAPPER,

            table {
                class: CssClasses::TABLE,

                thead {
                    tr {
                        for header in TABLE_HEADERS {
                            th { scope: "col", "{header}" }
                        }
                    }
                }

                tbody {
                    for ticket in tickets.iter().cloned() {
                        TicketRow { key: "{ticket.id}", ticket }
                    }

                    if tickets.is_empty() {
                        tr {
                            class: CssClasses::TABLE_EMPTY,
                            td {
                                colspan: "6",
                                "{EMPTY_MESSAGE}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// テーブルの1行
#[component]
fn TicketRow(ticket: Ticket) -> Element {
    let badge_class = format!(
        "{} {}",
        CssClasses::BADGE,
        status_badge_class(&ticket.status)
    );
    let priority_class = priority_text_class(&ticket.priority);
    let created = format_date_pt_br(&ticket.created_at);

    rsx! {
        tr {
            class: CssClasses::TABLE_ROW,

            td { class: CssClasses::CELL_ID, "#{ticket.id}" }
            td { "{ticket.customer_name}" }
            // 省略表示、全文はホバーで確認
            td {
                class: CssClasses::CELL_DESCRIPTION,
                title: "{ticket.description}",
                "{ticket.description}"
            }
            td {
                span { class: "{badge_class}", "{ticket.status}" }
            }
            td {
                span { class: priority_class, "{ticket.priority}" }
            }
            td { "{created}" }
        }
    }
}
