//! In-memory document and visibility host for unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    rc::Rc,
};

use crate::{
    document::TocDocument,
    watch::{Subscription, Visibility, VisibilityCallback, VisibilityHost, WatchError, WatchOptions},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeElement {
    key: usize,
    heading: Option<usize>,
}

#[derive(Debug)]
struct ElementData {
    id: String,
    href: Option<String>,
    classes: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct Page {
    container: String,
    elements: Vec<ElementData>,
    headings: Vec<usize>,
    mutations: Vec<(String, String)>,
}

/// A page with one content container, headings in it and TOC links.
#[derive(Debug, Clone)]
pub struct FakeDocument(Rc<RefCell<Page>>);

impl FakeDocument {
    pub fn new(container: &str) -> Self {
        Self(Rc::new(RefCell::new(Page {
            container: container.to_string(),
            ..Page::default()
        })))
    }

    pub fn add_heading(&self, id: &str) {
        let mut page = self.0.borrow_mut();
        let key = page.elements.len();
        page.elements.push(ElementData {
            id: id.to_string(),
            href: None,
            classes: BTreeSet::new(),
        });
        page.headings.push(key);
    }

    pub fn add_link(&self, href: &str) {
        self.0.borrow_mut().elements.push(ElementData {
            id: String::new(),
            href: Some(href.to_string()),
            classes: BTreeSet::new(),
        });
    }

    /// Hrefs of links carrying `class`, in document order.
    pub fn links_with_class(&self, class: &str) -> Vec<String> {
        self.0
            .borrow()
            .elements
            .iter()
            .filter(|e| e.classes.contains(class))
            .filter_map(|e| e.href.clone())
            .collect()
    }

    /// Class mutations as `(operation, href)`.
    pub fn mutations(&self) -> Vec<(String, String)> {
        self.0.borrow().mutations.clone()
    }

    fn mutate(&self, element: &FakeElement, op: &str, class: &str) {
        let mut page = self.0.borrow_mut();
        let data = &mut page.elements[element.key];
        if op == "add" {
            data.classes.insert(class.to_string());
        } else {
            data.classes.remove(class);
        }
        let href = data.href.clone().unwrap_or_default();
        page.mutations.push((op.to_string(), href));
    }
}

impl TocDocument for FakeDocument {
    type Element = FakeElement;

    fn headings(&self, container_id: &str, _selector: &str) -> Option<Vec<FakeElement>> {
        let page = self.0.borrow();
        if page.container != container_id {
            return None;
        }
        Some(
            page.headings
                .iter()
                .enumerate()
                .map(|(index, &key)| FakeElement {
                    key,
                    heading: Some(index),
                })
                .collect(),
        )
    }

    fn element_id(&self, element: &FakeElement) -> String {
        self.0.borrow().elements[element.key].id.clone()
    }

    fn query_link(&self, selector: &str) -> Option<FakeElement> {
        let needle = selector.strip_prefix("a[href*=\"")?.strip_suffix("\"]")?;
        if needle.is_empty() {
            return None;
        }
        let page = self.0.borrow();
        page.elements
            .iter()
            .position(|e| e.href.as_deref().is_some_and(|h| h.contains(needle)))
            .map(|key| FakeElement { key, heading: None })
    }

    fn add_class(&self, element: &FakeElement, class: &str) {
        self.mutate(element, "add", class);
    }

    fn remove_class(&self, element: &FakeElement, class: &str) {
        self.mutate(element, "remove", class);
    }
}

struct Slot {
    heading: Option<usize>,
    callback: VisibilityCallback,
    live: Rc<Cell<bool>>,
}

/// Host that records watches and lets tests fire transitions by hand.
#[derive(Default)]
pub struct FakeHost {
    slots: RefCell<Vec<Slot>>,
    options: Cell<Option<WatchOptions>>,
    fail_heading: Option<usize>,
}

impl FakeHost {
    /// A host that refuses to watch the heading at `index`.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_heading: Some(index),
            ..Self::default()
        }
    }

    pub fn registered(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn live(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.live.get()).count()
    }

    pub fn last_options(&self) -> Option<WatchOptions> {
        self.options.get()
    }

    /// Deliver a transition to the live watch of heading `index`.
    pub fn fire(&self, index: usize, visibility: Visibility) {
        self.deliver(index, visibility, false);
    }

    /// Deliver a transition even if the watch was released, like a host that
    /// still had the event queued.
    pub fn fire_retained(&self, index: usize, visibility: Visibility) {
        self.deliver(index, visibility, true);
    }

    fn deliver(&self, index: usize, visibility: Visibility, include_released: bool) {
        let mut slots = self.slots.borrow_mut();
        for slot in slots.iter_mut() {
            if slot.heading == Some(index) && (include_released || slot.live.get()) {
                (slot.callback)(visibility);
            }
        }
    }
}

impl VisibilityHost for FakeHost {
    type Target = FakeElement;

    fn watch(
        &self,
        target: &FakeElement,
        options: &WatchOptions,
        on_change: VisibilityCallback,
    ) -> Result<Subscription, WatchError> {
        if target.heading.is_some() && target.heading == self.fail_heading {
            return Err(WatchError::Host("observer unavailable".to_string()));
        }

        self.options.set(Some(*options));
        let live = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot {
            heading: target.heading,
            callback: on_change,
            live: live.clone(),
        });

        Ok(Subscription::new(move || live.set(false)))
    }
}
