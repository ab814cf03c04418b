// Browser tests; run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use signage_editor_core::{EditorHost, SlideId, Ticker};
use signage_editor_web_ui::browser::{page_origin, BrowserHost};
use signage_editor_web_ui::ticker::TimeoutTicker;
use std::time::Duration;
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_page_origin_is_available() {
    let origin = page_origin().unwrap();
    assert!(origin.starts_with("http"));
}

#[wasm_bindgen_test]
fn test_clear_text_selection_without_selection() {
    let host = BrowserHost::new(Callback::from(|_: SlideId| ()));
    host.clear_text_selection();
}

#[wasm_bindgen_test]
async fn test_first_tick_is_immediate() {
    let mut ticker = TimeoutTicker::new(Duration::from_millis(10));
    ticker.tick().await;
    ticker.tick().await;
}
