// Shared fakes for controller tests

#![allow(dead_code)]

use signage_editor_core::*;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use tokio::sync::oneshot;

pub type TestController = SlideEditorController<FakeApi, FakeDialogs, FakeHost>;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("signage_editor_core=debug")
        .with_test_writer()
        .try_init();
}

pub fn slide(id: &str, name: &str) -> Slide {
    Slide {
        id: SlideId::new(id),
        name: name.to_string(),
        owner: Some("admin".to_string()),
        time: 5000,
        markup: "[h1]Hello[/h1]".to_string(),
        index: 1,
        enabled: true,
    }
}

pub fn controller_with(limits: ServerLimits, slides: Vec<Slide>) -> TestController {
    init_tracing();
    SlideEditorController::new(
        FakeApi::with_slides(slides),
        FakeDialogs::default(),
        FakeHost::default(),
        EditorConfig::new(limits),
        ListRefreshSignal::new(),
    )
}

pub fn controller(slides: Vec<Slide>) -> TestController {
    controller_with(ServerLimits::default(), slides)
}

/// Yield until `cond` holds
pub async fn until(cond: impl Fn() -> bool) {
    while !cond() {
        tokio::task::yield_now().await;
    }
}

/// In-memory slide store; operations can be held open with gates
#[derive(Default)]
pub struct FakeApi {
    pub store: RefCell<HashMap<SlideId, Slide>>,
    pub fail_fetch: Cell<bool>,
    pub fail_save: Cell<bool>,
    pub fail_remove: Cell<bool>,
    pub fetch_calls: Cell<usize>,
    pub save_calls: Cell<usize>,
    pub saves_completed: Cell<usize>,
    pub remove_calls: Cell<usize>,
    fetch_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    save_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    remove_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_slides(slides: Vec<Slide>) -> Self {
        let api = Self::default();
        api.next_id.set(100);
        for slide in slides {
            api.store.borrow_mut().insert(slide.id.clone(), slide);
        }
        api
    }

    /// Hold the next fetch open until the returned sender fires
    pub fn gate_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.fetch_gates.borrow_mut().push_back(rx);
        tx
    }

    /// Hold the next save open until the returned sender fires
    pub fn gate_save(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.save_gates.borrow_mut().push_back(rx);
        tx
    }

    /// Hold the next remove open until the returned sender fires
    pub fn gate_remove(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.remove_gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn stored(&self, id: &SlideId) -> Option<Slide> {
        self.store.borrow().get(id).cloned()
    }
}

impl SlideApi for FakeApi {
    type Error = String;

    async fn fetch(&self, id: &SlideId) -> Result<Slide, String> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        let gate = self.fetch_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.fail_fetch.get() {
            return Err("API error".to_string());
        }
        self.stored(id).ok_or_else(|| format!("no slide {id}"))
    }

    async fn save(&self, slide: &Slide) -> Result<SlideId, String> {
        self.save_calls.set(self.save_calls.get() + 1);
        let gate = self.save_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.fail_save.get() {
            return Err("API error".to_string());
        }

        let mut saved = slide.clone();
        if !saved.is_persisted() {
            let next = self.next_id.get();
            self.next_id.set(next + 1);
            saved.id = SlideId::new(next.to_string());
        }
        let id = saved.id.clone();
        self.store.borrow_mut().insert(id.clone(), saved);
        self.saves_completed.set(self.saves_completed.get() + 1);
        Ok(id)
    }

    async fn remove(&self, id: &SlideId) -> Result<(), String> {
        self.remove_calls.set(self.remove_calls.get() + 1);
        let gate = self.remove_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.fail_remove.get() {
            return Err("API error".to_string());
        }
        self.store
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| format!("no slide {id}"))
    }
}

/// Dialogs answering confirms from a queue (default: accept)
#[derive(Default)]
pub struct FakeDialogs {
    pub answers: RefCell<VecDeque<bool>>,
    pub confirms: RefCell<Vec<(String, String)>>,
    pub alerts: RefCell<Vec<(String, String)>>,
    confirm_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl FakeDialogs {
    pub fn answer(&self, accept: bool) {
        self.answers.borrow_mut().push_back(accept);
    }

    /// Keep the next confirm dialog open until the returned sender fires
    pub fn gate_confirm(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.confirm_gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn confirm_titles(&self) -> Vec<String> {
        self.confirms.borrow().iter().map(|(t, _)| t.clone()).collect()
    }

    pub fn alert_titles(&self) -> Vec<String> {
        self.alerts.borrow().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Dialogs for FakeDialogs {
    async fn confirm(&self, title: &str, body: &str) -> bool {
        self.confirms
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
        let gate = self.confirm_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.answers.borrow_mut().pop_front().unwrap_or(true)
    }

    async fn alert(&self, title: &str, body: &str) {
        self.alerts
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub selection_clears: Cell<usize>,
    pub removed_entries: RefCell<Vec<SlideId>>,
    pub previews: RefCell<Vec<String>>,
}

impl EditorHost for FakeHost {
    fn clear_text_selection(&self) {
        self.selection_clears.set(self.selection_clears.get() + 1);
    }

    fn remove_list_entry(&self, id: &SlideId) {
        self.removed_entries.borrow_mut().push(id.clone());
    }

    fn open_preview(&self, url: &str) {
        self.previews.borrow_mut().push(url.to_string());
    }
}
