//! Export command - writes pipeline metadata and page queries

use std::{collections::BTreeMap, fs, path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, site_pages};
use serde::Serialize;

/// Site metadata file name.
pub const METADATA_FILE: &str = "site-metadata.json";

/// Route table file name.
pub const PAGES_FILE: &str = "pages.json";

/// Directory holding one `.graphql` file per template.
pub const QUERIES_DIR: &str = "queries";

/// A route and the query its page runs.
#[derive(Debug, Serialize)]
struct PageEntry<'a> {
    route: &'a str,
    query: String,
}

/// Export statistics.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub pages: usize,
    pub queries: usize,
}

/// Run the export command.
pub fn run(config_path: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, "Starting export");

    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let stats = export(&config, output)?;

    println!("✓ Export complete in {:.2?}", start.elapsed());
    println!("  Pages:   {}", stats.pages);
    println!("  Queries: {}", stats.queries);
    println!("  Output:  {}", output.display());

    Ok(())
}

/// Write metadata, queries and the route table under `output`.
pub fn export(config: &Config, output: &Path) -> Result<ExportStats> {
    let queries_dir = output.join(QUERIES_DIR);
    fs::create_dir_all(&queries_dir)
        .wrap_err_with(|| format!("Failed to create {}", queries_dir.display()))?;

    let metadata = config.pipeline_metadata()?;
    write_json(&output.join(METADATA_FILE), &metadata)?;

    let pages = site_pages(config);
    let mut queries = BTreeMap::new();
    let mut entries = Vec::with_capacity(pages.len());

    for page in &pages {
        let name = page.template.query_name();
        queries
            .entry(name.clone())
            .or_insert_with(|| page.template.query(config).to_string());
        entries.push(PageEntry {
            route: &page.route,
            query: name,
        });
    }

    for (name, text) in &queries {
        let path = queries_dir.join(format!("{name}.graphql"));
        tracing::debug!(?path, "Writing query");
        fs::write(&path, format!("{text}\n"))
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    }

    write_json(&output.join(PAGES_FILE), &entries)?;

    Ok(ExportStats {
        pages: entries.len(),
        queries: queries.len(),
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = "https://example.com"

[[page.menu]]
path = "/"
label = "Home"

[[page.directories]]
name = "develop"

[[page.directories]]
name = "projects"
"#,
        )
        .expect("parse config")
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let stats = export(&config(), dir.path()).expect("export");

        assert_eq!(stats, ExportStats { pages: 4, queries: 4 });
        for name in ["HomePage", "DevelopPage", "ProjectPage", "PostPage"] {
            let path = dir.path().join(QUERIES_DIR).join(format!("{name}.graphql"));
            let text = fs::read_to_string(&path).expect("read query");
            assert!(text.starts_with(&format!("query {name}")), "{text}");
        }
    }

    #[test]
    fn test_export_metadata_layout() {
        let dir = tempfile::tempdir().expect("create temp dir");
        export(&config(), dir.path()).expect("export");

        let text = fs::read_to_string(dir.path().join(METADATA_FILE)).expect("read metadata");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");

        assert_eq!(value["userMetadata"]["title"], "Test");
        assert_eq!(
            value["pageMetadata"]["directorys"],
            serde_json::json!(["develop", "projects"])
        );
        assert!(value["pageMetadata"]["menu"].is_string());
    }

    #[test]
    fn test_export_route_table() {
        let dir = tempfile::tempdir().expect("create temp dir");
        export(&config(), dir.path()).expect("export");

        let text = fs::read_to_string(dir.path().join(PAGES_FILE)).expect("read pages");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        let pages = value.as_array().expect("array");

        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0]["route"], "/");
        assert_eq!(pages[0]["query"], "HomePage");
        assert_eq!(pages[2]["route"], "/projects");
        assert_eq!(pages[2]["query"], "ProjectPage");
    }

    #[test]
    fn test_run_with_missing_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = run(&dir.path().join("missing.toml"), dir.path());
        assert!(result.is_err());
    }
}
