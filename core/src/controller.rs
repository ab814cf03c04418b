// Slide editor controller
//
// Sequences show/new/save/remove/preview against the remote API. All
// state lives in one RefCell that is never borrowed across an await; every
// resume re-checks the selection epoch before applying its result.

use crate::controls::EditorControlState;
use crate::dirty::{is_dirty, SlideForm};
use crate::error::{EditorError, Precondition, RemoteOp};
use crate::interfaces::{Dialogs, EditorHost, SlideApi};
use crate::messages::{self, DialogText, UNLOAD_WARNING};
use crate::models::{EditorConfig, EditorStatus, Slide, SlideId, StatusCode};
use crate::refresh::ListRefreshSignal;
use crate::validation::{FieldKind, ValidationError, ValidationGate};
use std::cell::RefCell;

/// How an action that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The user declined a confirm dialog
    Declined,
    /// The selection changed while the action was suspended; its result was dropped
    Superseded,
}

/// Single edit to the live form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Markup(String),
    Name(String),
    Time(String),
    Index(String),
    Enabled(bool),
}

/// Everything the form needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub selected_id: Option<SlideId>,
    pub form: SlideForm,
    pub controls: EditorControlState,
    pub status: Option<EditorStatus>,
    pub errors: Vec<ValidationError>,
    pub dirty: bool,
}

#[derive(Debug)]
struct EditorState {
    /// Last loaded, created or saved record
    selected: Option<Slide>,
    form: SlideForm,
    controls: EditorControlState,
    gate: ValidationGate,
    status: Option<EditorStatus>,
    /// Bumped when a navigation starts and whenever the selection changes
    epoch: u64,
}

impl EditorState {
    fn new(gate: ValidationGate) -> Self {
        let mut state = Self {
            selected: None,
            form: SlideForm::empty(),
            controls: EditorControlState::Disabled,
            gate,
            status: None,
            epoch: 0,
        };
        state.gate.set_enabled(false);
        state
    }

    fn select(&mut self, slide: Slide) {
        self.form = SlideForm::from_slide(&slide);
        self.gate.set_enabled(true);
        let valid = self.gate.revalidate(self.form.validated_values());
        self.controls.enable(valid, slide.is_persisted());
        self.selected = Some(slide);
        self.epoch += 1;
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.form = SlideForm::empty();
        self.gate.set_enabled(false);
        self.controls.disable();
        self.epoch += 1;
    }

    fn set_status(&mut self, code: StatusCode) {
        self.status = Some(EditorStatus::new(code));
    }

    fn is_dirty(&self) -> bool {
        is_dirty(self.selected.as_ref(), &self.form)
    }
}

/// Editing controller for a single selected slide
pub struct SlideEditorController<A, D, H> {
    api: A,
    dialogs: D,
    host: H,
    config: EditorConfig,
    refresh: ListRefreshSignal,
    state: RefCell<EditorState>,
}

impl<A, D, H> SlideEditorController<A, D, H>
where
    A: SlideApi,
    D: Dialogs,
    H: EditorHost,
{
    pub fn new(api: A, dialogs: D, host: H, config: EditorConfig, refresh: ListRefreshSignal) -> Self {
        let gate = ValidationGate::for_limits(&config.limits);
        Self {
            api,
            dialogs,
            host,
            config,
            refresh,
            state: RefCell::new(EditorState::new(gate)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn refresh_signal(&self) -> &ListRefreshSignal {
        &self.refresh
    }

    pub fn selected(&self) -> Option<Slide> {
        self.state.borrow().selected.clone()
    }

    pub fn form(&self) -> SlideForm {
        self.state.borrow().form.clone()
    }

    pub fn controls(&self) -> EditorControlState {
        self.state.borrow().controls
    }

    pub fn status(&self) -> Option<EditorStatus> {
        self.state.borrow().status.clone()
    }

    pub fn field_error(&self, field: FieldKind) -> Option<ValidationError> {
        self.state.borrow().gate.error(field).cloned()
    }

    /// True when the selected slide has unsaved form edits
    pub fn is_dirty(&self) -> bool {
        self.state.borrow().is_dirty()
    }

    /// Message for the page-exit guard, present only while dirty
    pub fn unload_warning(&self) -> Option<&'static str> {
        self.is_dirty().then_some(UNLOAD_WARNING)
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        let state = self.state.borrow();
        let errors = [FieldKind::Name, FieldKind::Time, FieldKind::Index]
            .into_iter()
            .filter_map(|field| state.gate.error(field).cloned())
            .collect();
        EditorSnapshot {
            selected_id: state.selected.as_ref().map(|s| s.id.clone()),
            form: state.form.clone(),
            controls: state.controls,
            status: state.status.clone(),
            errors,
            dirty: state.is_dirty(),
        }
    }

    /// Apply a form edit; ignored while the controls are disabled
    ///
    /// Returns whether the edit was applied.
    pub fn input(&self, edit: FormEdit) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.controls.inputs_enabled() {
            return false;
        }

        let revalidate = match edit {
            FormEdit::Markup(markup) => {
                state.form.markup = markup;
                None
            }
            FormEdit::Enabled(enabled) => {
                state.form.enabled = enabled;
                None
            }
            FormEdit::Name(name) => {
                state.form.name = name;
                Some(FieldKind::Name)
            }
            FormEdit::Time(time) => {
                state.form.time = time;
                Some(FieldKind::Time)
            }
            FormEdit::Index(index) => {
                state.form.index = index;
                Some(FieldKind::Index)
            }
        };

        if let Some(field) = revalidate {
            let EditorState { form, gate, controls, .. } = &mut *state;
            let value = match field {
                FieldKind::Name => form.name.as_str(),
                FieldKind::Time => form.time.as_str(),
                FieldKind::Index => form.index.as_str(),
            };
            if let Some(valid) = gate.input(field, value) {
                controls.set_save_permitted(valid);
            }
        }
        true
    }

    /// Load and select slide `id`
    pub async fn show(&self, id: SlideId) -> Result<ActionOutcome, EditorError> {
        if !self.confirm_discard().await {
            return Ok(ActionOutcome::Declined);
        }

        let token = self.begin_navigation();
        tracing::info!(slide = %id, "show slide");
        let result = self.api.fetch(&id).await;

        let mut state = self.state.borrow_mut();
        if state.epoch != token {
            tracing::debug!(slide = %id, "selection changed while loading, dropping result");
            return Ok(ActionOutcome::Superseded);
        }

        match result {
            Ok(slide) => {
                state.select(slide);
                drop(state);
                self.host.clear_text_selection();
                Ok(ActionOutcome::Completed)
            }
            Err(e) => {
                tracing::warn!(slide = %id, error = %e, "failed to load slide");
                state.clear_selection();
                state.set_status(StatusCode::LoadFailed);
                Err(EditorError::remote(RemoteOp::Load, e))
            }
        }
    }

    /// Select a new in-memory slide built from the default template
    ///
    /// Nothing is persisted until the user saves.
    pub async fn new_slide(&self) -> Result<ActionOutcome, EditorError> {
        if !self.confirm_discard().await {
            return Ok(ActionOutcome::Declined);
        }

        tracing::info!("create slide");
        {
            let mut state = self.state.borrow_mut();
            state.select(Slide::new_default());
            state.set_status(StatusCode::Created);
        }
        self.host.clear_text_selection();
        Ok(ActionOutcome::Completed)
    }

    /// Persist the live form values into the selected slide
    pub async fn save(&self) -> Result<ActionOutcome, EditorError> {
        let (candidate, epoch) = match self.prepare_save() {
            Ok(prepared) => prepared,
            Err((err, dialog)) => {
                if let Some(text) = dialog {
                    self.show_alert(&text).await;
                }
                return Err(err);
            }
        };

        tracing::info!(slide = %candidate.id, "save slide");
        let result = self.api.save(&candidate).await;

        let mut state = self.state.borrow_mut();
        match result {
            Ok(id) => {
                tracing::info!(slide = %id, "saved slide");
                if state.epoch == epoch {
                    let mut saved = candidate;
                    saved.id = id;
                    state.selected = Some(saved);
                    // A first save makes the record removable.
                    state.controls.set_remove_permitted(true);
                } else {
                    tracing::debug!(slide = %id, "selection changed while saving");
                }
                state.set_status(StatusCode::Saved);
                drop(state);
                self.refresh.trigger();
                Ok(ActionOutcome::Completed)
            }
            Err(e) => {
                tracing::warn!(slide = %candidate.id, error = %e, "failed to save slide");
                state.set_status(StatusCode::SaveFailed);
                Err(EditorError::remote(RemoteOp::Save, e))
            }
        }
    }

    /// Remove the selected slide after confirmation
    pub async fn remove(&self) -> Result<ActionOutcome, EditorError> {
        let target = {
            let state = self.state.borrow();
            state
                .selected
                .as_ref()
                .map(|s| (s.id.clone(), s.name.clone(), state.epoch))
        };
        let Some((id, name, epoch)) = target else {
            self.show_alert(&messages::remove_without_selection()).await;
            return Err(Precondition::NoSelection.into());
        };
        if !id.is_persisted() {
            self.show_alert(&messages::remove_unsaved()).await;
            return Err(Precondition::NotPersisted.into());
        }

        let previous = {
            let mut state = self.state.borrow_mut();
            let previous = state.status.clone();
            state.set_status(StatusCode::Deleting);
            previous
        };
        let text = messages::confirm_remove(&name);
        let accepted = self.dialogs.confirm(&text.title, &text.body).await;
        {
            let mut state = self.state.borrow_mut();
            let outcome = if !accepted {
                Some(ActionOutcome::Declined)
            } else if state.epoch != epoch {
                tracing::debug!(slide = %id, "selection changed during remove confirm");
                Some(ActionOutcome::Superseded)
            } else {
                None
            };
            if let Some(outcome) = outcome {
                // Keep any status another action set meanwhile.
                if state.status.as_ref().map(|s| s.code) == Some(StatusCode::Deleting) {
                    state.status = previous;
                }
                return Ok(outcome);
            }
        }

        let result = self.api.remove(&id).await;
        match result {
            Ok(()) => {
                tracing::info!(slide = %id, "deleted slide");
                self.host.remove_list_entry(&id);
                {
                    let mut state = self.state.borrow_mut();
                    if state.epoch == epoch {
                        state.clear_selection();
                    }
                    state.set_status(StatusCode::Deleted);
                }
                self.refresh.trigger();
                Ok(ActionOutcome::Completed)
            }
            Err(e) => {
                tracing::warn!(slide = %id, error = %e, "failed to remove slide");
                self.state.borrow_mut().set_status(StatusCode::RemoveFailed);
                Err(EditorError::remote(RemoteOp::Remove, e))
            }
        }
    }

    /// Open the saved version of the selected slide in a new view
    pub async fn preview(&self) -> Result<ActionOutcome, EditorError> {
        let id = self.state.borrow().selected.as_ref().map(|s| s.id.clone());
        match id {
            None => {
                self.show_alert(&messages::preview_without_selection()).await;
                Err(Precondition::NoSelection.into())
            }
            Some(id) if !id.is_persisted() => {
                self.show_alert(&messages::preview_unsaved()).await;
                Err(Precondition::NotPersisted.into())
            }
            Some(id) => {
                self.host.open_preview(&self.config.preview_url(&id));
                Ok(ActionOutcome::Completed)
            }
        }
    }

    /// Drop the current selection and disable the form
    pub async fn deselect(&self) -> Result<ActionOutcome, EditorError> {
        if !self.confirm_discard().await {
            return Ok(ActionOutcome::Declined);
        }
        self.state.borrow_mut().clear_selection();
        Ok(ActionOutcome::Completed)
    }

    /// Ask before discarding unsaved edits
    ///
    /// Dirtiness is read before the first suspension point.
    async fn confirm_discard(&self) -> bool {
        if !self.is_dirty() {
            return true;
        }
        let text = messages::slide_not_saved();
        self.dialogs.confirm(&text.title, &text.body).await
    }

    fn begin_navigation(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.epoch += 1;
        state.epoch
    }

    /// Local checks before a save goes out; the error carries the dialog to show
    fn prepare_save(&self) -> Result<(Slide, u64), (EditorError, Option<DialogText>)> {
        let mut state = self.state.borrow_mut();
        let Some(selected) = state.selected.clone() else {
            return Err((
                Precondition::NoSelection.into(),
                Some(messages::save_without_selection()),
            ));
        };
        state.set_status(StatusCode::Saving);

        let max = self.config.limits.slide_markup_max_len;
        let length = state.form.markup.chars().count();
        if length > max {
            state.set_status(StatusCode::SaveFailed);
            return Err((
                EditorError::MarkupTooLong { length, max },
                Some(messages::markup_too_long(max)),
            ));
        }

        if let Some(err) = state.gate.first_error().cloned() {
            state.set_status(StatusCode::SaveFailed);
            return Err((err.into(), None));
        }

        match state.form.to_slide(&selected) {
            Ok(candidate) => Ok((candidate, state.epoch)),
            Err(err) => {
                state.set_status(StatusCode::SaveFailed);
                Err((err.into(), None))
            }
        }
    }

    async fn show_alert(&self, text: &DialogText) {
        self.dialogs.alert(&text.title, &text.body).await;
    }
}
