// Dialog texts shown by the editor

/// Title and body of a confirm or alert dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub title: String,
    pub body: String,
}

impl DialogText {
    fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
        }
    }
}

/// Shown before discarding unsaved changes
pub fn slide_not_saved() -> DialogText {
    DialogText::new(
        "Slide not saved",
        "The current slide is not saved yet. All changes will be lost if you \
         continue. Are you sure you want to continue?",
    )
}

pub fn markup_too_long(max: usize) -> DialogText {
    DialogText::new(
        "Too long slide markup",
        format!("The slide markup is too long. The maximum length is {max} characters."),
    )
}

pub fn confirm_remove(name: &str) -> DialogText {
    DialogText::new(
        "Delete slide?",
        format!("Are you sure you want to delete slide '{name}'."),
    )
}

pub fn remove_without_selection() -> DialogText {
    DialogText::new("Please select a slide", "Please select a slide to remove first.")
}

pub fn remove_unsaved() -> DialogText {
    DialogText::new(
        "Slide not saved",
        "Slides can't be removed before they are saved.",
    )
}

pub fn save_without_selection() -> DialogText {
    DialogText::new(
        "Please select a slide",
        "Please select or create a slide to save first.",
    )
}

pub fn preview_without_selection() -> DialogText {
    DialogText::new(
        "No slide selected",
        "Please select a slide to preview or save the current slide first.",
    )
}

pub fn preview_unsaved() -> DialogText {
    DialogText::new(
        "Please save the slide first",
        "Slides can't be previewed before they are saved.",
    )
}

/// Page-exit warning while the selected slide has unsaved changes
pub const UNLOAD_WARNING: &str = "The selected slide is not saved. Any changes will be lost \
                                  if you exit the page. Are you sure you want to continue?";
