// Entry point for the signage slide editor page

use signage_editor_web_ui::App;
use wasm_bindgen::prelude::*;

/// Mount the editor on the document body
#[wasm_bindgen(start)]
pub fn start_editor() {
    yew::Renderer::<App>::new().render();
}

fn main() {
    start_editor();
}
