// Components module

pub mod action_buttons;
pub mod editor_form;
pub mod markup_editor;
pub mod slide_list;
pub mod status_line;

pub use action_buttons::ActionButtons;
pub use editor_form::EditorForm;
pub use markup_editor::MarkupEditor;
pub use slide_list::SlideList;
pub use status_line::StatusLine;
