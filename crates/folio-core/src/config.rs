//! Site configuration management.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Blog owner metadata.
    pub user: UserMetadata,

    /// Menu and directory pages.
    #[serde(default)]
    pub page: PageMetadata,
}

/// Blog owner metadata, used for display and by the SEO collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Blog title shown in the navbar.
    pub title: String,

    /// Blog description.
    #[serde(default)]
    pub description: String,

    /// Author name.
    #[serde(default)]
    pub author: String,

    /// Link to another site of the author (GitHub, Twitter, ...).
    #[serde(default)]
    pub other_site: Option<String>,

    /// Footer copyright line.
    #[serde(default)]
    pub copyright: String,

    /// Deployed site URL, used for sitemap and robots.txt.
    pub site_url: String,

    /// GitHub repository where comments are stored.
    #[serde(default)]
    pub comment_repo: Option<String>,

    /// Google Search Console verification code.
    #[serde(default)]
    pub google_verification: String,

    /// Naver Search Console verification code.
    #[serde(default)]
    pub naver_verification: String,

    /// Google Analytics tracking ID.
    #[serde(default)]
    pub google_analytics_tracking_id: String,
}

/// Navbar menu and the content directories mapped to pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Navbar links, in display order.
    #[serde(default)]
    pub menu: Vec<MenuItem>,

    /// Content directories, each rendered as a listing page.
    #[serde(default)]
    pub directories: Vec<DirectoryPage>,
}

/// A navbar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Absolute site path, e.g. `/projects`.
    pub path: String,

    /// Link label.
    pub label: String,
}

/// A content directory with its own listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPage {
    /// Directory name, also the source instance name and the route.
    pub name: String,

    /// Description shown under the page title.
    #[serde(default)]
    pub description: String,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

impl DirectoryPage {
    /// Route of the directory listing page.
    pub fn route(&self) -> String {
        format!("/{}", self.name)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Toml(e) => CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            ),
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// Used by the browser bundle, which embeds `site.toml` at compile time.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.user.title.is_empty() {
            return Err(CoreError::config("user.title cannot be empty"));
        }

        if self.user.site_url.is_empty() {
            return Err(CoreError::config("user.site_url cannot be empty"));
        }

        if self.user.site_url.ends_with('/') {
            tracing::warn!("user.site_url should not have a trailing slash");
        }

        if let Some(item) = self.page.menu.iter().find(|m| !m.path.starts_with('/')) {
            return Err(CoreError::config(format!(
                "menu path must start with '/': {}",
                item.path
            )));
        }

        let mut seen = HashSet::new();
        for dir in &self.page.directories {
            if dir.name.is_empty() || dir.name.contains('/') {
                return Err(CoreError::config(format!(
                    "invalid directory name: {:?}",
                    dir.name
                )));
            }
            if !seen.insert(dir.name.as_str()) {
                return Err(CoreError::config(format!(
                    "duplicate directory: {}",
                    dir.name
                )));
            }
        }

        Ok(())
    }

    /// Look up a configured directory by name.
    pub fn directory(&self, name: &str) -> Option<&DirectoryPage> {
        self.page.directories.iter().find(|d| d.name == name)
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.user.site_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Metadata in the layout the build pipeline reads.
    ///
    /// The pipeline expects the menu as a JSON-encoded string and the
    /// directories as a flat list of names.
    pub fn pipeline_metadata(&self) -> Result<serde_json::Value> {
        let menu = serde_json::to_string(&self.page.menu)?;
        let directories: Vec<&str> = self
            .page
            .directories
            .iter()
            .map(|d| d.name.as_str())
            .collect();

        Ok(serde_json::json!({
            "userMetadata": {
                "title": self.user.title,
                "description": self.user.description,
                "author": self.user.author,
                "otherSite": self.user.other_site,
                "copyright": self.user.copyright,
                "siteUrl": self.user.site_url,
                "commentRepo": self.user.comment_repo,
                "googleVerification": self.user.google_verification,
                "naverVerification": self.user.naver_verification,
                "googleAnalyticsTrackingId": self.user.google_analytics_tracking_id,
            },
            "pageMetadata": {
                "menu": menu,
                "directorys": directories,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[user]
title = "Jeongyun.log"
description = "Learn, record, grow."
author = "Je0ngyun"
other_site = "https://github.com/je0ngyun"
copyright = "Copyright 2021 je0ngyun"
site_url = "https://je0ngyun.netlify.app"
comment_repo = "je0ngyun/Blog"
google_analytics_tracking_id = "G-TEST"

[[page.menu]]
path = "/"
label = "Home"

[[page.menu]]
path = "/projects"
label = "Projects"

[[page.directories]]
name = "develop"
description = "Development notes"

[[page.directories]]
name = "projects"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.user.title, "Jeongyun.log");
        assert_eq!(config.user.site_url, "https://je0ngyun.netlify.app");
        assert_eq!(config.user.comment_repo.as_deref(), Some("je0ngyun/Blog"));
        assert_eq!(config.user.google_analytics_tracking_id, "G-TEST");
        assert_eq!(config.page.menu.len(), 2);
        assert_eq!(config.page.menu[1], MenuItem::new("/projects", "Projects"));
        assert_eq!(config.page.directories.len(), 2);
        assert_eq!(config.page.directories[1].description, "");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(
            r#"
[user]
title = "Minimal"
site_url = "https://example.com"
"#,
        )
        .expect("parse config");

        assert!(config.page.menu.is_empty());
        assert!(config.page.directories.is_empty());
        assert!(config.user.other_site.is_none());
        assert!(config.user.naver_verification.is_empty());
    }

    #[test]
    fn test_url_for() {
        let config = Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = "https://example.com"
"#,
        )
        .expect("parse config");

        assert_eq!(config.url_for("/develop/rust"), "https://example.com/develop/rust");
        assert_eq!(config.url_for("develop/rust"), "https://example.com/develop/rust");
    }

    #[test]
    fn test_directory_lookup() {
        let config = Config::from_toml_str(&create_test_config()).expect("parse config");
        let dir = config.directory("develop").expect("develop directory");
        assert_eq!(dir.route(), "/develop");
        assert!(config.directory("missing").is_none());
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml_str(
            r#"
[user]
title = ""
site_url = "https://example.com"
"#,
        );
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_empty_site_url() {
        let result = Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = ""
"#,
        );
        assert!(result.unwrap_err().to_string().contains("site_url"));
    }

    #[test]
    fn test_config_validation_relative_menu_path() {
        let result = Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = "https://example.com"

[[page.menu]]
path = "projects"
label = "Projects"
"#,
        );
        assert!(result.unwrap_err().to_string().contains("must start with"));
    }

    #[test]
    fn test_config_validation_duplicate_directory() {
        let result = Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = "https://example.com"

[[page.directories]]
name = "develop"

[[page.directories]]
name = "develop"
"#,
        );
        assert!(result.unwrap_err().to_string().contains("duplicate directory"));
    }

    #[test]
    fn test_pipeline_metadata_stringifies_menu() {
        let config = Config::from_toml_str(&create_test_config()).expect("parse config");
        let metadata = config.pipeline_metadata().expect("metadata");

        let menu = metadata["pageMetadata"]["menu"].as_str().expect("menu string");
        let decoded: Vec<MenuItem> = serde_json::from_str(menu).expect("decode menu");
        assert_eq!(decoded, config.page.menu);
        assert_eq!(
            metadata["pageMetadata"]["directorys"],
            serde_json::json!(["develop", "projects"])
        );
        assert_eq!(metadata["userMetadata"]["siteUrl"], "https://je0ngyun.netlify.app");
    }

    #[test]
    fn test_load_with_env_override() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        // SAFETY: no other test reads or writes FOLIO__ variables.
        unsafe { std::env::set_var("FOLIO__USER__TITLE", "Overridden") };
        let result = Config::load_with_env(&config_path);
        unsafe { std::env::remove_var("FOLIO__USER__TITLE") };

        let config = result.expect("load config");
        assert_eq!(config.user.title, "Overridden");
        assert_eq!(config.user.site_url, "https://je0ngyun.netlify.app");
        assert_eq!(config.page.directories[0].name, "develop");
        assert_eq!(config.page.menu.len(), 2);
    }

    #[test]
    fn test_trailing_slash_warning_reaches_log() {
        use std::sync::Mutex;

        struct Capture(Mutex<Vec<String>>);

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                self.0.lock().unwrap().push(record.args().to_string());
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));
        log::set_logger(&CAPTURE).expect("install logger");
        log::set_max_level(log::LevelFilter::Trace);

        Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = "https://example.com/"
"#,
        )
        .expect("parse config");

        let messages = CAPTURE.0.lock().unwrap();
        assert!(
            messages.iter().any(|m| m.contains("trailing slash")),
            "{messages:?}"
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/site.toml"));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
