// Slide list sidebar

use signage_editor_core::{SlideId, SlideSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SlideListProps {
    pub slides: Vec<SlideSummary>,
    pub selected: Option<SlideId>,
    pub on_select: Callback<SlideId>,
}

#[function_component(SlideList)]
pub fn slide_list(props: &SlideListProps) -> Html {
    if props.slides.is_empty() {
        return html! {
            <div class="slide-list">
                <div class="slide-entry empty">{"No slides"}</div>
            </div>
        };
    }

    let render_slide = |slide: &SlideSummary| {
        let selected = props.selected.as_ref() == Some(&slide.id);
        let on_click = {
            let on_select = props.on_select.clone();
            let id = slide.id.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
        };

        html! {
            <div
                class={classes!(
                    "slide-entry",
                    selected.then_some("selected"),
                    (!slide.enabled).then_some("disabled"),
                )}
                key={slide.id.to_string()}
                onclick={on_click}
            >
                <span class="slide-index">{ slide.index }</span>
                <span class="slide-name">{ &slide.name }</span>
            </div>
        }
    };

    html! {
        <div class="slide-list">
            { for props.slides.iter().map(render_slide) }
        </div>
    }
}
