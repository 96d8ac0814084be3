//! Check command - validate site metadata against the content tree

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_core::{Config, PROJECTS_DIRECTORY};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the site metadata and the content directories it names.
pub fn run(config_path: &Path, content_dir: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?content_dir, strict, "Checking site metadata and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    match Config::load_with_env(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            check_config(&config, content_dir, &mut result);
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Run every check on a loaded configuration.
pub fn check_config(config: &Config, content_dir: &Path, result: &mut ValidationResult) {
    println!("\nChecking metadata values...");
    check_metadata_values(config, result);

    println!("\nChecking menu...");
    check_menu(config, result);

    println!("\nChecking content directories...");
    check_directories(config, content_dir, result);
}

/// Check metadata for values left blank.
fn check_metadata_values(config: &Config, result: &mut ValidationResult) {
    let user = &config.user;

    if !user.site_url.starts_with("http") {
        result.add_warning("user.site_url should start with http:// or https://");
    }

    let optional = [
        ("user.description", &user.description),
        ("user.author", &user.author),
        ("user.google_verification", &user.google_verification),
        ("user.naver_verification", &user.naver_verification),
        (
            "user.google_analytics_tracking_id",
            &user.google_analytics_tracking_id,
        ),
    ];
    for (key, value) in optional {
        if value.is_empty() {
            result.add_warning(format!("{key} is empty"));
        }
    }

    println!("  ✓ Metadata values checked");
}

/// Check that every menu link leads to a page.
fn check_menu(config: &Config, result: &mut ValidationResult) {
    if config.page.menu.is_empty() {
        result.add_warning("page.menu is empty, the navbar will have no links");
        return;
    }

    let mut broken = 0;
    for item in &config.page.menu {
        let target = item.path.trim_matches('/');
        if !target.is_empty() && config.directory(target).is_none() {
            result.add_warning(format!(
                "Menu link {:?} points to {} which is not a configured directory",
                item.label, item.path
            ));
            broken += 1;
        }
    }

    if broken == 0 {
        println!("  ✓ All {} menu links resolve", config.page.menu.len());
    } else {
        println!("  ⚠ {broken} menu link(s) do not resolve");
    }
}

/// Check that configured directories exist and hold Markdown files.
fn check_directories(config: &Config, content_dir: &Path, result: &mut ValidationResult) {
    // the home page lists dated posts only
    if config
        .page
        .directories
        .iter()
        .all(|d| d.name == PROJECTS_DIRECTORY)
    {
        result.add_warning("No dated directory configured, the home page will list no posts");
        println!("  ⚠ no dated directory for the home page");
    }

    for directory in &config.page.directories {
        let path = content_dir.join(&directory.name);
        if !path.is_dir() {
            result.add_warning(format!("Content directory missing: {}", path.display()));
            println!("  ⚠ {}/ missing", directory.name);
            continue;
        }

        let markdown = count_markdown_files(&path);
        if markdown == 0 {
            result.add_warning(format!("{} has no Markdown files", path.display()));
            println!("  ⚠ {}/ is empty", directory.name);
        } else {
            println!("  ✓ {}/ ({markdown} posts)", directory.name);
        }
    }
}

fn count_markdown_files(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|ext| ext.to_str()) == Some("md"))
        .count()
}
