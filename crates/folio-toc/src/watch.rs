//! Visibility watches and their subscriptions.

use std::fmt;

use thiserror::Error;

/// Errors a host can report when creating a watch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WatchError {
    /// The host runtime refused to create the observer.
    #[error("failed to create visibility watch: {0}")]
    Host(String),
}

/// A CSS length used in a root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Margins applied to the viewport before intersecting.
///
/// Negative values shrink the viewport. Renders in CSS order
/// (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    /// Keep only the top `percent` of the viewport.
    pub fn top_band(percent: f64) -> Self {
        Self {
            top: Length::Px(0.0),
            right: Length::Px(0.0),
            bottom: Length::Percent(percent - 100.0),
            left: Length::Px(0.0),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Configuration of one watch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Visible fraction of the target that counts as a transition.
    pub threshold: f64,

    /// Active zone, relative to the viewport.
    pub root_margin: RootMargin,
}

impl Default for WatchOptions {
    /// Fully visible headings inside the top 30% of the viewport.
    fn default() -> Self {
        Self {
            threshold: 1.0,
            root_margin: RootMargin::top_band(30.0),
        }
    }
}

/// One visibility transition reported for a watched target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// Whether the target is inside the active zone past the threshold.
    pub is_intersecting: bool,

    /// Visible fraction of the target.
    pub ratio: f64,
}

impl Visibility {
    /// A target that entered the active zone.
    pub fn entered() -> Self {
        Self {
            is_intersecting: true,
            ratio: 1.0,
        }
    }

    /// A target that left the active zone.
    pub fn left() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// A registered watch.
///
/// Releasing it, explicitly or by dropping it, stops all further callbacks.
#[must_use = "dropping a subscription releases its watch"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the host's release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the watch now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Callback invoked with every transition of a watched target.
pub type VisibilityCallback = Box<dyn FnMut(Visibility)>;

/// Something that can watch elements enter and leave the viewport.
pub trait VisibilityHost {
    /// Element type the host observes.
    type Target;

    /// Start watching `target`; `on_change` runs for every transition until
    /// the returned subscription is released.
    fn watch(
        &self,
        target: &Self::Target,
        options: &WatchOptions,
        on_change: VisibilityCallback,
    ) -> Result<Subscription, WatchError>;
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn test_default_options() {
        let options = WatchOptions::default();
        assert_eq!(options.threshold, 1.0);
        assert_eq!(options.root_margin.to_string(), "0px 0px -70% 0px");
    }

    #[test]
    fn test_root_margin_display() {
        let margin = RootMargin {
            top: Length::Px(-10.0),
            right: Length::Px(0.0),
            bottom: Length::Percent(-50.5),
            left: Length::Px(4.0),
        };
        assert_eq!(margin.to_string(), "-10px 0px -50.5% 4px");
    }

    #[test]
    fn test_subscription_release_runs_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));

        sub.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_subscription_drop_releases() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        {
            let _sub = Subscription::new(move || flag.set(true));
        }
        assert!(released.get());
    }
}
