use folio_core::{Config, ListingData, PostFrontmatter};
use folio_ui::{Layout, PageDescription, PageTitle, PostItems};
use leptos::prelude::*;

use super::{LoadError, loading};
use crate::data::fetch_page_data;

/// Home page: recent posts of every dated directory.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<Config>();
    let data = LocalResource::new(|| fetch_page_data::<ListingData<PostFrontmatter>>("/"));

    let title = config.user.title.clone();
    let description = config.user.description.clone();

    view! {
      <Layout belongs="">
        <PageTitle title=title />
        <PageDescription description=description />
        <Suspense fallback=loading>
          {move || {
            data
              .get()
              .map(|result| match result {
                Ok(data) => {
                  let posts: Vec<_> = data.entries().cloned().collect();
                  view! { <PostItems posts=posts /> }.into_any()
                }
                Err(error) => view! { <LoadError error=error /> }.into_any(),
              })
          }}
        </Suspense>
      </Layout>
    }
}
