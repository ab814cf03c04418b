// Web UI library for the slide editor
//
// This crate provides the Yew components and browser glue for the
// signage slide editor frontend.

use signage_editor_api_client::SlideApiClient;
use signage_editor_core::{
    ActionOutcome, EditorConfig, EditorError, EditorSnapshot, FormEdit, ListRefreshSignal,
    PeriodicRefreshScheduler, ServerLimits, SlideEditorController, SlideId,
};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub mod browser;
pub mod components;
pub mod errors;
pub mod messages;
pub mod slide_list_state;
pub mod ticker;

// Re-export components
pub use components::*;

use browser::{BrowserDialogs, BrowserHost};
use errors::UiError;
use slide_list_state::{ListAction, SlideListState};
use ticker::TimeoutTicker;

/// Editor controller wired to the browser
pub type BrowserEditor = SlideEditorController<SlideApiClient, BrowserDialogs, BrowserHost>;

type ActionFuture = Pin<Box<dyn Future<Output = Result<ActionOutcome, EditorError>>>>;

/// Build the controller and start the background tasks
///
/// Server limits fall back to the defaults when they can't be fetched.
async fn setup(list: UseReducerDispatcher<SlideListState>) -> Result<Rc<BrowserEditor>, UiError> {
    let client = SlideApiClient::new(browser::page_origin()?);
    let limits = match client.fetch_limits().await {
        Ok(limits) => limits,
        Err(e) => {
            tracing::warn!(error = %e, "using default server limits");
            ServerLimits::default()
        }
    };
    let config = EditorConfig::new(limits);
    let signal = ListRefreshSignal::new();

    let host = {
        let list = list.clone();
        BrowserHost::new(Callback::from(move |id: SlideId| {
            list.dispatch(ListAction::Remove(id));
        }))
    };
    let editor = Rc::new(SlideEditorController::new(
        client,
        BrowserDialogs,
        host,
        config.clone(),
        signal.clone(),
    ));

    {
        let editor = Rc::clone(&editor);
        browser::install_unload_guard(move || editor.unload_warning())?;
    }
    spawn_local(watch_slide_list(Rc::clone(&editor), list));
    spawn_local(
        PeriodicRefreshScheduler::new(TimeoutTicker::new(config.refresh_interval), signal).run(),
    );
    Ok(editor)
}

/// Reload the slide list whenever a refresh is requested
async fn watch_slide_list(editor: Rc<BrowserEditor>, list: UseReducerDispatcher<SlideListState>) {
    loop {
        editor.refresh_signal().requested().await;
        match editor.api().list_slides().await {
            Ok(slides) => list.dispatch(ListAction::Replace(slides)),
            Err(e) => tracing::warn!(error = %e, "failed to refresh the slide list"),
        }
    }
}

/// Run a controller action, re-rendering at its first suspension and once it settles
///
/// The controller has already shown any dialog or status by the time an
/// error comes back, so errors are only logged.
fn run_action<F, Fut>(editor: Rc<BrowserEditor>, view: UseStateHandle<Option<EditorSnapshot>>, action: F)
where
    F: FnOnce(Rc<BrowserEditor>) -> Fut,
    Fut: Future<Output = Result<ActionOutcome, EditorError>> + 'static,
{
    let pending = action(Rc::clone(&editor));
    {
        let editor = Rc::clone(&editor);
        let view = view.clone();
        spawn_local(async move {
            match pending.await {
                Ok(outcome) => tracing::debug!(?outcome, "editor action finished"),
                Err(e) => tracing::info!(error = %e, "editor action failed"),
            }
            view.set(Some(editor.snapshot()));
        });
    }
    // Local tasks run in spawn order, so this one sees the in-flight
    // status ("Saving...", "Deleting slide...") set before the first await.
    spawn_local(async move {
        view.set(Some(editor.snapshot()));
    });
}

/// Main application component
#[function_component(App)]
pub fn app() -> Html {
    let editor = use_state(|| None::<Rc<BrowserEditor>>);
    let view = use_state(|| None::<EditorSnapshot>);
    let slides = use_reducer(SlideListState::default);
    let setup_error = use_state(|| None::<String>);

    {
        let editor = editor.clone();
        let view = view.clone();
        let list = slides.dispatcher();
        let setup_error = setup_error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match setup(list).await {
                    Ok(ready) => {
                        view.set(Some(ready.snapshot()));
                        editor.set(Some(ready));
                    }
                    Err(e) => setup_error.set(Some(e.to_string())),
                }
            });
            || ()
        });
    }

    let action = |op: fn(Rc<BrowserEditor>) -> ActionFuture| {
        let editor = editor.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            if let Some(ready) = (*editor).clone() {
                run_action(ready, view.clone(), op);
            }
        })
    };

    let on_new = action(|ed| Box::pin(async move { ed.new_slide().await }));
    let on_save = action(|ed| Box::pin(async move { ed.save().await }));
    let on_remove = action(|ed| Box::pin(async move { ed.remove().await }));
    let on_preview = action(|ed| Box::pin(async move { ed.preview().await }));

    let on_select = {
        let editor = editor.clone();
        let view = view.clone();
        Callback::from(move |id: SlideId| {
            if let Some(ready) = (*editor).clone() {
                run_action(ready, view.clone(), move |ed| async move { ed.show(id).await });
            }
        })
    };

    let on_edit = {
        let editor = editor.clone();
        let view = view.clone();
        Callback::from(move |edit: FormEdit| {
            if let Some(ready) = &*editor {
                if ready.input(edit) {
                    view.set(Some(ready.snapshot()));
                }
            }
        })
    };

    if let Some(error) = &*setup_error {
        return html! {
            <div class="app-container">
                <div class="message-text error">{ format!("Failed to start the editor: {}", error) }</div>
            </div>
        };
    }

    let Some(snapshot) = (*view).clone() else {
        return html! {
            <div class="app-container">
                <div class="message-text">{ "Loading..." }</div>
            </div>
        };
    };

    html! {
        <div class="app-container">
            <div class="sidebar">
                <div class="sidebar-header">
                    <h3>{ "Slides" }</h3>
                </div>
                <div class="sidebar-content">
                    <SlideList
                        slides={slides.slides.clone()}
                        selected={snapshot.selected_id.clone()}
                        on_select={on_select}
                    />
                </div>
            </div>

            <div class="main-content">
                <StatusLine status={snapshot.status.clone()} />
                <div class="editor-area">
                    <EditorForm snapshot={snapshot.clone()} on_edit={on_edit} />
                    <ActionButtons
                        controls={snapshot.controls}
                        on_new={on_new}
                        on_save={on_save}
                        on_remove={on_remove}
                        on_preview={on_preview}
                    />
                </div>
            </div>
        </div>
    }
}
