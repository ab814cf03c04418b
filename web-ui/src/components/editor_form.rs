// Slide editor form

use super::MarkupEditor;
use signage_editor_core::{EditorSnapshot, FieldKind, FormEdit};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditorFormProps {
    pub snapshot: EditorSnapshot,
    pub on_edit: Callback<FormEdit>,
}

fn field_group(label: &'static str, input: Html, error: Option<String>) -> Html {
    html! {
        <div class={classes!("form-group", error.is_some().then_some("invalid"))}>
            <label>{ label }</label>
            { input }
            { for error.map(|msg| html! { <div class="invalid-feedback">{ msg }</div> }) }
        </div>
    }
}

#[function_component(EditorForm)]
pub fn editor_form(props: &EditorFormProps) -> Html {
    let form = &props.snapshot.form;
    let disabled = !props.snapshot.controls.inputs_enabled();

    let error_for = |field: FieldKind| {
        props
            .snapshot
            .errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    };

    let text_input = |edit: fn(String) -> FormEdit| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(edit(input.value()));
        })
    };

    let on_enabled = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FormEdit::Enabled(input.checked()));
        })
    };

    html! {
        <div class="editor-form">
            { field_group("Name", html! {
                <input type="text" class="slide-name" disabled={disabled}
                    value={form.name.clone()} oninput={text_input(FormEdit::Name)} />
            }, error_for(FieldKind::Name)) }
            { field_group("Owner", html! {
                <input type="text" class="slide-owner" readonly={true} disabled={true} value={form.owner.clone()} />
            }, None) }
            { field_group("Time (s)", html! {
                <input type="number" class="slide-time" disabled={disabled}
                    value={form.time.clone()} oninput={text_input(FormEdit::Time)} />
            }, error_for(FieldKind::Time)) }
            { field_group("Index", html! {
                <input type="number" class="slide-index" disabled={disabled}
                    value={form.index.clone()} oninput={text_input(FormEdit::Index)} />
            }, error_for(FieldKind::Index)) }
            <div class="form-check">
                <input type="checkbox" class="slide-enabled" disabled={disabled}
                    checked={form.enabled} onchange={on_enabled} />
                <label>{ "Enabled" }</label>
            </div>
            <MarkupEditor
                value={form.markup.clone()}
                disabled={disabled}
                on_change={props.on_edit.reform(FormEdit::Markup)}
            />
        </div>
    }
}
