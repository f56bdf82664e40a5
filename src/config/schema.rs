//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the panel
//! tooling. All types derive Serde traits for deserialization from config
//! files. Every section has defaults so a minimal (or absent) config file
//! yields the production panel setup.

use serde::{Deserialize, Serialize};

/// Root configuration for the panel tooling.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Preview server configuration (bind address, timeouts).
    pub server: ServerConfig,

    /// Route definitions mapping URL paths to views.
    pub routes: Vec<RouteConfig>,

    /// Navigation behavior (not-found view, redirect bounds).
    pub navigation: NavigationConfig,

    /// Build output relocation settings.
    pub build: BuildConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            routes: default_routes(),
            navigation: NavigationConfig::default(),
            build: BuildConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Preview server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Route configuration mapping a URL path to a view or a redirect.
///
/// Exactly one of `view` / `redirect` must be set; validation enforces this.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// URL path to match (exact match, must start with '/').
    pub path: String,

    /// View component to mount when the path matches.
    #[serde(default)]
    pub view: Option<String>,

    /// Destination path to re-resolve against instead of mounting a view.
    #[serde(default)]
    pub redirect: Option<String>,

    /// Document title for the view (defaults to the view name).
    #[serde(default)]
    pub title: Option<String>,
}

/// Navigation behavior settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// View rendered for paths with no matching route entry.
    pub not_found_view: String,

    /// Maximum redirect hops followed during a single resolution.
    pub max_redirect_hops: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            not_found_view: "NotFound".to_string(),
            max_redirect_hops: 8,
        }
    }
}

/// Build output relocation settings for the mobile app's native layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Root project directory whose output is relocated.
    pub root_dir: String,

    /// Subproject names, each receiving its own output directory.
    pub subprojects: Vec<String>,

    /// Subproject whose evaluation must complete before the others.
    pub evaluation_anchor: String,

    /// Package repository sources declared for all subprojects.
    pub repositories: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root_dir: "student_app/android".to_string(),
            subprojects: vec!["app".to_string()],
            evaluation_anchor: "app".to_string(),
            repositories: vec!["google".to_string(), "mavenCentral".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// The production panel's route table: nine views plus the root redirect.
fn default_routes() -> Vec<RouteConfig> {
    fn view(path: &str, view: &str) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            view: Some(view.to_string()),
            redirect: None,
            title: None,
        }
    }

    let mut routes = vec![RouteConfig {
        path: "/".to_string(),
        view: None,
        redirect: Some("/login".to_string()),
        title: None,
    }];
    routes.push(view("/login", "Login"));
    routes.push(view("/dashboard", "Dashboard"));
    routes.push(view("/students", "Students"));
    routes.push(view("/attendance", "Attendance"));
    routes.push(view("/homework", "Homework"));
    routes.push(view("/fees", "Fees"));
    routes.push(view("/results", "Results"));
    routes.push(view("/notices", "Notices"));
    routes.push(view("/gallery", "Gallery"));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_cover_panel() {
        let config = PanelConfig::default();
        assert_eq!(config.routes.len(), 10);
        assert_eq!(config.routes[0].path, "/");
        assert_eq!(config.routes[0].redirect.as_deref(), Some("/login"));
        assert!(config
            .routes
            .iter()
            .skip(1)
            .all(|r| r.view.is_some() && r.redirect.is_none()));
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: PanelConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.build.subprojects, vec!["app".to_string()]);
        assert_eq!(config.navigation.not_found_view, "NotFound");
    }

    #[test]
    fn test_route_section_overrides_defaults() {
        let config: PanelConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/status"
            view = "Status"
            title = "System status"
            "#,
        )
        .unwrap();
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].view.as_deref(), Some("Status"));
        assert_eq!(config.routes[0].title.as_deref(), Some("System status"));
    }
}
