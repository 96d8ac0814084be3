//! Navigation components: site menu and category sidebar.

use folio_core::{MenuItem, capitalize};
use leptos::prelude::*;

/// A navigation item.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Whether this item leads to the section named `belongs`.
    ///
    /// `belongs` is the top-level path segment of the current page, empty on
    /// the home page.
    pub fn is_current(&self, belongs: &str) -> bool {
        self.url.trim_matches('/') == belongs
    }
}

impl From<&MenuItem> for NavItem {
    fn from(item: &MenuItem) -> Self {
        Self::new(item.label.clone(), item.path.clone())
    }
}

/// Main navigation bar.
#[component]
pub fn NavBar(
    /// Site title, linking home.
    #[prop(into)]
    title: String,
    /// Menu items.
    items: Vec<NavItem>,
    /// Top-level section of the current page.
    #[prop(into)]
    belongs: String,
) -> impl IntoView {
    let links = items
        .into_iter()
        .map(|item| {
            let current = item.is_current(&belongs);
            view! {
              <li class="navbar-item" class:active=current>
                <a
                  href=item.url.clone()
                  class="navbar-link"
                  aria-current=if current { Some("page") } else { None }
                >
                  {item.label.clone()}
                </a>
              </li>
            }
        })
        .collect_view();

    view! {
      <nav class="navbar" aria-label="Main navigation">
        <a href="/" class="navbar-title">
          {title}
        </a>
        <ul class="navbar-list">{links}</ul>
      </nav>
    }
}

/// Sidebar listing the directories of the current category.
///
/// Selecting a directory narrows the page's list to it; "All" clears the
/// selection.
#[component]
pub fn Sidebar(
    /// Directory names.
    directories: Vec<String>,
    /// Top-level category of the page.
    #[prop(into)]
    current_category: String,
    /// Selected directory, `None` for all.
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let entries = directories
        .into_iter()
        .map(|name| {
            let is_selected = {
                let name = name.clone();
                move || selected.get().as_deref() == Some(name.as_str())
            };
            let choose = {
                let name = name.clone();
                move |_| selected.set(Some(name.clone()))
            };
            view! {
              <li class="sidebar-item" class:selected=is_selected>
                <button type="button" class="sidebar-button" on:click=choose>
                  {name}
                </button>
              </li>
            }
        })
        .collect_view();

    view! {
      <aside class="sidebar">
        <h2 class="sidebar-title">{capitalize(&current_category)}</h2>
        <ul class="sidebar-list">
          <li class="sidebar-item" class:selected=move || selected.get().is_none()>
            <button type="button" class="sidebar-button" on:click=move |_| selected.set(None)>
              "All"
            </button>
          </li>
          {entries}
        </ul>
      </aside>
    }
}
