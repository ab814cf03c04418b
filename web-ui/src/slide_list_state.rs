// Slide list state shared by the list view and the editor host

use signage_editor_core::{SlideId, SlideSummary};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideListState {
    pub slides: Vec<SlideSummary>,
}

pub enum ListAction {
    /// Fresh list from the server
    Replace(Vec<SlideSummary>),
    /// Drop a deleted slide before the next refresh arrives
    Remove(SlideId),
}

impl Reducible for SlideListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ListAction::Replace(slides) => Rc::new(Self { slides }),
            ListAction::Remove(id) => {
                if !self.slides.iter().any(|s| s.id == id) {
                    return self;
                }
                let slides = self.slides.iter().filter(|s| s.id != id).cloned().collect();
                Rc::new(Self { slides })
            }
        }
    }
}
