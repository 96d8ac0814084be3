//! Browser implementations backed by `web-sys`.

use log::warn;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{
    document::TocDocument,
    watch::{Subscription, Visibility, VisibilityCallback, VisibilityHost, WatchError, WatchOptions},
};

impl From<JsValue> for WatchError {
    fn from(value: JsValue) -> Self {
        Self::Host(format!("{value:?}"))
    }
}

/// The live browser document.
#[derive(Debug, Clone)]
pub struct DomDocument(Document);

impl DomDocument {
    /// Document of the current window, if any.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }

    /// Wrap an existing document.
    pub fn new(document: Document) -> Self {
        Self(document)
    }
}

impl TocDocument for DomDocument {
    type Element = Element;

    fn headings(&self, container_id: &str, selector: &str) -> Option<Vec<Element>> {
        let container = self.0.get_element_by_id(container_id)?;
        let nodes = match container.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("invalid heading selector {selector:?}: {e:?}");
                return Some(Vec::new());
            }
        };

        Some(
            (0..nodes.length())
                .filter_map(|i| nodes.get(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
        )
    }

    fn element_id(&self, element: &Element) -> String {
        element.id()
    }

    fn query_link(&self, selector: &str) -> Option<Element> {
        self.0.query_selector(selector).ok().flatten()
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            warn!("failed to add class {class:?}: {e:?}");
        }
    }

    fn remove_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            warn!("failed to remove class {class:?}: {e:?}");
        }
    }
}

/// Watches elements with one `IntersectionObserver` each.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionHost;

impl VisibilityHost for IntersectionHost {
    type Target = Element;

    fn watch(
        &self,
        target: &Element,
        options: &WatchOptions,
        mut on_change: VisibilityCallback,
    ) -> Result<Subscription, WatchError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(Visibility {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        // The closure must outlive the observer; both go away together.
        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
