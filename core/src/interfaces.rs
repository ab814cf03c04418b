// Collaborators the editor controller drives

use crate::models::{Slide, SlideId};
use std::fmt;

/// Remote slide persistence
#[allow(async_fn_in_trait)]
pub trait SlideApi {
    type Error: fmt::Display;

    async fn fetch(&self, id: &SlideId) -> Result<Slide, Self::Error>;

    /// Persist `slide`; returns the id the server assigned or kept
    async fn save(&self, slide: &Slide) -> Result<SlideId, Self::Error>;

    async fn remove(&self, id: &SlideId) -> Result<(), Self::Error>;
}

/// Confirm and alert dialogs
#[allow(async_fn_in_trait)]
pub trait Dialogs {
    /// Resolves to `true` when the user accepts
    async fn confirm(&self, title: &str, body: &str) -> bool;

    async fn alert(&self, title: &str, body: &str);
}

/// Page-level side effects outside the form
pub trait EditorHost {
    /// Drop the text widget's selection highlight after new content is shown
    fn clear_text_selection(&self);

    /// Remove a deleted slide from the slide list
    fn remove_list_entry(&self, id: &SlideId);

    /// Open the slide preview in a new viewing context
    fn open_preview(&self, url: &str);
}
