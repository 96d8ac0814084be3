use folio_core::{
    Config, DirectoryPage, ListingData, PROJECTS_DIRECTORY, PostFrontmatter, ProjectFrontmatter,
    Template, capitalize, in_directory,
};
use folio_ui::{Layout, PageDescription, PageTitle, PostItems, ProjectList, Sidebar};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{LoadError, NotFound, loading};
use crate::data::fetch_page_data;

/// Listing page of a configured directory, chosen by the `category` param.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let config = expect_context::<Config>();
    let params = use_params_map();
    let category = Memo::new(move |_| params.with(|p| p.get("category").unwrap_or_default()));

    move || {
        let name = category.get();
        match config.directory(&name).map(Template::for_directory) {
            Some(Template::Projects) => view! { <ProjectsPage /> }.into_any(),
            Some(Template::Category(directory)) => {
                view! { <DatedListing directory=directory /> }.into_any()
            }
            _ => {
                log::debug!("no directory named {name:?}");
                view! { <NotFound /> }.into_any()
            }
        }
    }
}

/// Dated posts of one directory, generated for every configured directory.
#[component]
fn DatedListing(directory: DirectoryPage) -> impl IntoView {
    let route = directory.route();
    let data = LocalResource::new(move || {
        let route = route.clone();
        async move { fetch_page_data::<ListingData<PostFrontmatter>>(&route).await }
    });
    let selected = RwSignal::new(None::<String>);

    let title = capitalize(&directory.name);
    let belongs = directory.name.clone();
    let category = directory.name;

    view! {
      <Title text=title.clone() />
      <Layout belongs=belongs>
        <PageTitle title=title />
        <PageDescription description=directory.description />
        <Suspense fallback=loading>
          {move || {
            let category = category.clone();
            data
              .get()
              .map(|result| match result {
                Ok(data) => {
                  let directories = data.directory_names();
                  let entries: Vec<_> = data.entries().cloned().collect();
                  let sidebar_category = category.clone();
                  let posts = Signal::derive(move || {
                    let dir = selected.get();
                    entries
                      .iter()
                      .filter(|p| in_directory(&p.fields.slug, &category, dir.as_deref()))
                      .cloned()
                      .collect::<Vec<_>>()
                  });
                  view! {
                    <Sidebar
                      directories=directories
                      current_category=sidebar_category
                      selected=selected
                    />
                    <PostItems posts=posts />
                  }
                    .into_any()
                }
                Err(error) => view! { <LoadError error=error /> }.into_any(),
              })
          }}
        </Suspense>
      </Layout>
    }
}

/// Project cards of the projects directory.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let config = expect_context::<Config>();
    let description = config
        .directory(PROJECTS_DIRECTORY)
        .map(|d| d.description.clone())
        .unwrap_or_default();

    let data = LocalResource::new(move || async move {
        fetch_page_data::<ListingData<ProjectFrontmatter>>(&format!("/{PROJECTS_DIRECTORY}"))
            .await
    });
    let selected = RwSignal::new(None::<String>);

    view! {
      <Title text=capitalize(PROJECTS_DIRECTORY) />
      <Layout belongs=PROJECTS_DIRECTORY>
        <PageTitle title=capitalize(PROJECTS_DIRECTORY) />
        <PageDescription description=description />
        <Suspense fallback=loading>
          {move || {
            data
              .get()
              .map(|result| match result {
                Ok(data) => {
                  let directories = data.directory_names();
                  let entries: Vec<_> = data.entries().cloned().collect();
                  let projects = Signal::derive(move || {
                    let dir = selected.get();
                    entries
                      .iter()
                      .filter(|p| {
                        in_directory(&p.fields.slug, PROJECTS_DIRECTORY, dir.as_deref())
                      })
                      .cloned()
                      .collect::<Vec<_>>()
                  });
                  view! {
                    <Sidebar
                      directories=directories
                      current_category=PROJECTS_DIRECTORY
                      selected=selected
                    />
                    <ProjectList projects=projects />
                  }
                    .into_any()
                }
                Err(error) => view! { <LoadError error=error /> }.into_any(),
              })
          }}
        </Suspense>
      </Layout>
    }
}
