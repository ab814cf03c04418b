// Browser-backed collaborators for the editor controller

use crate::errors::UiError;
use crate::messages::dialog_text;
use signage_editor_core::{Dialogs, EditorHost, SlideId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

pub fn window() -> Result<web_sys::Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::BrowserError("no window object".to_string()))
}

/// Origin of the current page, used as the API base URL
pub fn page_origin() -> Result<String, UiError> {
    window()?
        .location()
        .origin()
        .map_err(|_| UiError::BrowserError("page origin unavailable".to_string()))
}

/// Native `window.confirm` / `window.alert` dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    async fn confirm(&self, title: &str, body: &str) -> bool {
        match window() {
            Ok(window) => window
                .confirm_with_message(&dialog_text(title, body))
                .unwrap_or(false),
            Err(e) => {
                tracing::warn!(error = %e, "confirm dialog unavailable");
                false
            }
        }
    }

    async fn alert(&self, title: &str, body: &str) {
        if let Ok(window) = window() {
            let _ = window.alert_with_message(&dialog_text(title, body));
        }
    }
}

/// Page side effects; list removals are forwarded to the slide list state
pub struct BrowserHost {
    on_removed: Callback<SlideId>,
}

impl BrowserHost {
    pub fn new(on_removed: Callback<SlideId>) -> Self {
        Self { on_removed }
    }
}

impl EditorHost for BrowserHost {
    fn clear_text_selection(&self) {
        let selection = window().ok().and_then(|w| w.get_selection().ok().flatten());
        if let Some(selection) = selection {
            let _ = selection.remove_all_ranges();
        }
    }

    fn remove_list_entry(&self, id: &SlideId) {
        self.on_removed.emit(id.clone());
    }

    fn open_preview(&self, url: &str) {
        let opened = window().map(|w| w.open_with_url_and_target(url, "_blank"));
        if !matches!(opened, Ok(Ok(_))) {
            tracing::warn!(url, "failed to open slide preview");
        }
    }
}

/// Ask for confirmation before leaving the page while `warning` yields a message
pub fn install_unload_guard<F>(warning: F) -> Result<(), UiError>
where
    F: Fn() -> Option<&'static str> + 'static,
{
    let handler = Closure::<dyn FnMut(web_sys::BeforeUnloadEvent)>::new(
        move |event: web_sys::BeforeUnloadEvent| {
            if let Some(message) = warning() {
                event.prevent_default();
                event.set_return_value(message);
            }
        },
    );
    window()?.set_onbeforeunload(Some(handler.as_ref().unchecked_ref::<js_sys::Function>()));
    // The handler lives as long as the page.
    handler.forget();
    Ok(())
}
