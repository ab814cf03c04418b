// Editor action buttons

use signage_editor_core::EditorControlState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub controls: EditorControlState,
    pub on_new: Callback<()>,
    pub on_save: Callback<()>,
    pub on_remove: Callback<()>,
    pub on_preview: Callback<()>,
}

#[function_component(ActionButtons)]
pub fn action_buttons(props: &ActionButtonsProps) -> Html {
    let click = |cb: &Callback<()>| cb.reform(|_: MouseEvent| ());

    html! {
        <div class="editor-actions">
            <button class="btn new-btn" onclick={click(&props.on_new)}>
                {"New"}
            </button>
            <button
                class="btn save-btn"
                disabled={!props.controls.save_enabled()}
                onclick={click(&props.on_save)}
            >
                {"Save"}
            </button>
            <button
                class="btn remove-btn"
                disabled={!props.controls.remove_enabled()}
                onclick={click(&props.on_remove)}
            >
                {"Remove"}
            </button>
            <button
                class="btn preview-btn"
                disabled={!props.controls.inputs_enabled()}
                onclick={click(&props.on_preview)}
            >
                {"Preview"}
            </button>
        </div>
    }
}
