//! Document access needed by the tracker.

/// The rendered page, as seen by the tracker.
///
/// Implementations are cheap handles; the tracker clones one into each
/// visibility callback.
pub trait TocDocument: Clone + 'static {
    /// Element handle.
    type Element: Clone + 'static;

    /// Elements matching `selector` inside the element with id
    /// `container_id`, in document order.
    ///
    /// Returns `None` when the container does not exist.
    fn headings(&self, container_id: &str, selector: &str) -> Option<Vec<Self::Element>>;

    /// Anchor id of an element, empty when it has none.
    fn element_id(&self, element: &Self::Element) -> String;

    /// First element in the document matching `selector`.
    fn query_link(&self, selector: &str) -> Option<Self::Element>;

    /// Add a class to an element.
    fn add_class(&self, element: &Self::Element, class: &str);

    /// Remove a class from an element.
    fn remove_class(&self, element: &Self::Element, class: &str);
}
