//! Task Table Component
//!
//! Full rebuild of the checklist table from the board's current `TableView`.

use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::controller::EditSession;
use crate::render::RowView;

#[component]
pub fn TaskTable(editing: RwSignal<Option<EditSession>>) -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;

    view! {
        <div id="table-container">
            {move || {
                let Some(table) = board.with(|b| b.view().cloned()) else {
                    return view! { <p class="table-placeholder">"読み込み中..."</p> }.into_any();
                };
                let headers = table
                    .headers
                    .into_iter()
                    .map(|header| view! { <th>{header}</th> })
                    .collect_view();
                let rows = table
                    .rows
                    .into_iter()
                    .map(|row| task_row(row, ctx.clone(), editing))
                    .collect_view();

                view! {
                    <table class="striped">
                        <thead>
                            <tr>{headers}</tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}

fn task_row(row: RowView, ctx: AppContext, editing: RwSignal<Option<EditSession>>) -> impl IntoView {
    let board = ctx.board;
    let busy = {
        let key = row.key.clone();
        move || board.with(|b| b.is_busy(&key))
    };

    let edit_key = row.key.clone();
    let current_note = row.note.clone();
    let open_editor = move |_| {
        editing.set(Some(EditSession::open(edit_key.clone(), current_note.clone())));
    };

    let toggle_key = row.key.clone();
    let target_status = row.toggle.target_status;
    let on_toggle = move |_| ctx.toggle(toggle_key.clone(), target_status);

    view! {
        <tr class=row.row_class>
            <td>{row.task}</td>
            <td>{row.status}</td>
            <td>{row.completion_time}</td>
            <td>
                <div class="note-content">
                    <span class="note-text">{row.note}</span>
                    <button
                        class="btn-floating btn-small blue edit-note"
                        title="メモを編集"
                        disabled=busy.clone()
                        on:click=open_editor
                    >
                        <i class="material-icons">"edit"</i>
                    </button>
                </div>
            </td>
            <td>
                <button
                    class=format!("btn-small {}", row.toggle.color)
                    disabled=busy
                    on:click=on_toggle
                >
                    {row.toggle.label}
                </button>
            </td>
        </tr>
    }
}
