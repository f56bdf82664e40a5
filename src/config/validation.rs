//! Configuration validation.
//!
//! Semantic checks on top of what Serde already guarantees syntactically.
//! Validation is a pure function `PanelConfig -> Result<(), Vec<ValidationError>>`
//! and returns all errors, not just the first, so a bad config can be fixed
//! in one pass. It runs before a config is accepted into the system; the
//! route table and build layout are only ever compiled from validated input.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;

use crate::config::schema::{PanelConfig, RouteConfig};

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Route path does not start with '/'.
    RoutePathNotAbsolute { path: String },
    /// The same path appears in more than one route entry.
    DuplicateRoutePath { path: String },
    /// Route entry declares neither a view nor a redirect.
    RouteTargetMissing { path: String },
    /// Route entry declares both a view and a redirect.
    RouteTargetConflict { path: String },
    /// Redirect points at a path with no route entry.
    DanglingRedirect { path: String, target: String },
    /// Redirect chain starting at this path never reaches a view.
    RedirectCycle { path: String },
    /// Not-found view name is empty.
    EmptyNotFoundView,
    /// Redirect hop limit of zero would make every redirect unresolvable.
    ZeroRedirectHops,
    /// Bind address cannot be parsed as a socket address.
    InvalidBindAddress { value: String },
    /// Request timeout of zero disables the server.
    ZeroRequestTimeout,
    /// Build root directory is empty.
    EmptyBuildRoot,
    /// Subproject name is empty or a filesystem-hostile token.
    InvalidSubprojectName { name: String },
    /// The same subproject is declared twice.
    DuplicateSubproject { name: String },
    /// Evaluation anchor is not among the declared subprojects.
    AnchorNotDeclared { name: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::RoutePathNotAbsolute { path } => {
                write!(f, "route path '{}' must start with '/'", path)
            }
            ValidationError::DuplicateRoutePath { path } => {
                write!(f, "route path '{}' declared more than once", path)
            }
            ValidationError::RouteTargetMissing { path } => {
                write!(f, "route '{}' has neither a view nor a redirect", path)
            }
            ValidationError::RouteTargetConflict { path } => {
                write!(f, "route '{}' has both a view and a redirect", path)
            }
            ValidationError::DanglingRedirect { path, target } => {
                write!(f, "route '{}' redirects to unknown path '{}'", path, target)
            }
            ValidationError::RedirectCycle { path } => {
                write!(f, "redirect chain from '{}' never reaches a view", path)
            }
            ValidationError::EmptyNotFoundView => {
                write!(f, "navigation.not_found_view must not be empty")
            }
            ValidationError::ZeroRedirectHops => {
                write!(f, "navigation.max_redirect_hops must be at least 1")
            }
            ValidationError::InvalidBindAddress { value } => {
                write!(f, "server.bind_address '{}' is not a socket address", value)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "server.request_timeout_secs must be at least 1")
            }
            ValidationError::EmptyBuildRoot => {
                write!(f, "build.root_dir must not be empty")
            }
            ValidationError::InvalidSubprojectName { name } => {
                write!(f, "subproject name '{}' is not a valid directory name", name)
            }
            ValidationError::DuplicateSubproject { name } => {
                write!(f, "subproject '{}' declared more than once", name)
            }
            ValidationError::AnchorNotDeclared { name } => {
                write!(f, "evaluation anchor '{}' is not a declared subproject", name)
            }
        }
    }
}

/// Validate a parsed config, collecting every semantic error.
pub fn validate_config(config: &PanelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_routes(&config.routes, &mut errors);

    if config.navigation.not_found_view.is_empty() {
        errors.push(ValidationError::EmptyNotFoundView);
    }
    if config.navigation.max_redirect_hops == 0 {
        errors.push(ValidationError::ZeroRedirectHops);
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            value: config.server.bind_address.clone(),
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.build.root_dir.is_empty() {
        errors.push(ValidationError::EmptyBuildRoot);
    }
    let mut seen = HashSet::new();
    for name in &config.build.subprojects {
        if !is_valid_subproject_name(name) {
            errors.push(ValidationError::InvalidSubprojectName { name: name.clone() });
        }
        if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateSubproject { name: name.clone() });
        }
    }
    if !seen.contains(config.build.evaluation_anchor.as_str()) {
        errors.push(ValidationError::AnchorNotDeclared {
            name: config.build.evaluation_anchor.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routes(routes: &[RouteConfig], errors: &mut Vec<ValidationError>) {
    // First occurrence wins, matching resolution order.
    let mut by_path: HashMap<&str, &RouteConfig> = HashMap::new();

    for route in routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RoutePathNotAbsolute {
                path: route.path.clone(),
            });
        }
        match (&route.view, &route.redirect) {
            (None, None) => errors.push(ValidationError::RouteTargetMissing {
                path: route.path.clone(),
            }),
            (Some(_), Some(_)) => errors.push(ValidationError::RouteTargetConflict {
                path: route.path.clone(),
            }),
            _ => {}
        }
        if by_path.contains_key(route.path.as_str()) {
            errors.push(ValidationError::DuplicateRoutePath {
                path: route.path.clone(),
            });
        } else {
            by_path.insert(route.path.as_str(), route);
        }
    }

    // Every redirect chain must terminate in a view within the table.
    for route in routes {
        let Some(target) = &route.redirect else {
            continue;
        };
        let mut current = target.as_str();
        let mut hops = 0;
        loop {
            let Some(next) = by_path.get(current) else {
                errors.push(ValidationError::DanglingRedirect {
                    path: route.path.clone(),
                    target: current.to_string(),
                });
                break;
            };
            match &next.redirect {
                None => break,
                Some(next_target) => {
                    hops += 1;
                    if hops > routes.len() {
                        errors.push(ValidationError::RedirectCycle {
                            path: route.path.clone(),
                        });
                        break;
                    }
                    current = next_target.as_str();
                }
            }
        }
    }
}

fn is_valid_subproject_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::BuildConfig;

    fn route(path: &str, view: Option<&str>, redirect: Option<&str>) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            view: view.map(str::to_string),
            redirect: redirect.map(str::to_string),
            title: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PanelConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut config = PanelConfig::default();
        config.routes.push(route("/login", Some("Login2"), None));
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateRoutePath {
            path: "/login".to_string()
        }));
    }

    #[test]
    fn test_dangling_redirect_rejected() {
        let mut config = PanelConfig::default();
        config.routes = vec![route("/", None, Some("/missing"))];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DanglingRedirect {
            path: "/".to_string(),
            target: "/missing".to_string(),
        }));
    }

    #[test]
    fn test_redirect_cycle_rejected() {
        let mut config = PanelConfig::default();
        config.routes = vec![
            route("/a", None, Some("/b")),
            route("/b", None, Some("/a")),
        ];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::RedirectCycle { .. })));
    }

    #[test]
    fn test_conflicting_target_rejected() {
        let mut config = PanelConfig::default();
        config.routes = vec![route("/both", Some("Both"), Some("/login"))];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::RouteTargetConflict { .. })));
    }

    #[test]
    fn test_build_section_checks() {
        let mut config = PanelConfig::default();
        config.build = BuildConfig {
            root_dir: String::new(),
            subprojects: vec!["app".to_string(), "app".to_string(), "a/b".to_string()],
            evaluation_anchor: "plugin".to_string(),
            repositories: vec!["google".to_string()],
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyBuildRoot));
        assert!(errors.contains(&ValidationError::DuplicateSubproject {
            name: "app".to_string()
        }));
        assert!(errors.contains(&ValidationError::InvalidSubprojectName {
            name: "a/b".to_string()
        }));
        assert!(errors.contains(&ValidationError::AnchorNotDeclared {
            name: "plugin".to_string()
        }));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut config = PanelConfig::default();
        config.routes = vec![route("no-slash", None, None)];
        config.server.bind_address = "not-an-address".to_string();
        config.navigation.max_redirect_hops = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
