// Slide markup text area

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkupEditorProps {
    pub value: String,
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(MarkupEditor)]
pub fn markup_editor(props: &MarkupEditorProps) -> Html {
    // Every keystroke goes straight to the controller so dirtiness is never stale.
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <textarea
            class="editor-textarea"
            placeholder="Slide markup"
            disabled={props.disabled}
            oninput={on_input}
            value={props.value.clone()}
        />
    }
}
