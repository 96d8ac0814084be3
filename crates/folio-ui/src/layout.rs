//! Page layout and headings.

use folio_core::Config;
use leptos::prelude::*;

use crate::navigation::{NavBar, NavItem};

/// Page frame: navbar, content and footer.
///
/// Reads the site [`Config`] from context.
#[component]
pub fn Layout(
    /// Top-level section the page belongs to, empty for home.
    #[prop(into)]
    belongs: String,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let config = use_context::<Config>();
    if config.is_none() {
        log::warn!("Layout rendered without a site config in context");
    }

    let (title, items, copyright, other_site) = match &config {
        Some(config) => (
            config.user.title.clone(),
            config.page.menu.iter().map(NavItem::from).collect(),
            config.user.copyright.clone(),
            config.user.other_site.clone(),
        ),
        None => (String::new(), Vec::new(), String::new(), None),
    };
    let has_other_site = other_site.is_some();

    view! {
      <div class="layout">
        <header class="layout-header">
          <NavBar title=title items=items belongs=belongs />
        </header>
        <main class="layout-content">{children()}</main>
        <footer class="layout-footer">
          <span class="layout-copyright">{copyright}</span>
          <Show when=move || has_other_site>
            <a class="layout-other-site" href=other_site.clone() target="_blank" rel="noopener">
              "GitHub"
            </a>
          </Show>
        </footer>
      </div>
    }
}

/// Page heading.
#[component]
pub fn PageTitle(
    /// Title text.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! { <h1 class="page-title">{title}</h1> }
}

/// Short description under the page heading.
#[component]
pub fn PageDescription(
    /// Description text.
    #[prop(into)]
    description: String,
) -> impl IntoView {
    view! { <p class="page-description">{description}</p> }
}
