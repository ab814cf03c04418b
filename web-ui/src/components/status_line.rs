// Editor status line

use crate::messages::{get_message_class, status_text};
use signage_editor_core::EditorStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub status: Option<EditorStatus>,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    match &props.status {
        Some(status) => html! {
            <div class="message-area">
                <div class={get_message_class(status.level.into())}>{ status_text(status) }</div>
            </div>
        },
        None => html! { <div class="message-area"></div> },
    }
}
