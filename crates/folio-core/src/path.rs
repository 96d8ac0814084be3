//! Route helpers shared by templates and components.

/// First segment of a pathname, `""` for the root.
///
/// `/develop/rust/ownership/` yields `develop`.
pub fn top_level_path_name(pathname: &str) -> &str {
    pathname
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
}

/// Uppercase the first character of a word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether a post slug lies in `directory` of `category`.
///
/// A `None` directory matches every post of the category.
pub fn in_directory(slug: &str, category: &str, directory: Option<&str>) -> bool {
    let Some(directory) = directory else {
        return true;
    };
    let prefix = format!("/{category}/{directory}/");
    slug.starts_with(&prefix)
}
