//! Route table compilation and path resolution.
//!
//! # Responsibilities
//! - Compile validated route config into an immutable table
//! - Exact-match path lookup, first match wins
//! - Follow redirect entries transparently, bounded by the hop limit
//! - Return an explicit not-found resolution, never a silent default
//!
//! # Design Decisions
//! - Paths match exactly and case-sensitively
//! - Lookup is a linear scan over the ordered entries; the table is small
//!   and declaration order is what defines precedence
//! - No regex, no allocation on the lookup path

use crate::config::schema::{NavigationConfig, RouteConfig};

/// Reference to a view component the panel can mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef {
    /// Component name (e.g., "Students").
    pub name: String,
    /// Document title shown when the view is mounted.
    pub title: String,
}

impl ViewRef {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let title = name.clone();
        Self { name, title }
    }

    pub fn with_title(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// What a route entry resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Mount this view.
    View(ViewRef),
    /// Re-resolve against this path.
    Redirect(String),
}

/// A single path → target association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub target: RouteTarget,
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A view to mount. `canonical` is the path after following redirects;
    /// it is what belongs in the browser's addressable history entry.
    View {
        view: ViewRef,
        canonical: String,
        redirected: bool,
    },
    /// No entry matched. The requested path is preserved so the address bar
    /// can keep it while the not-found view renders.
    NotFound { view: ViewRef, path: String },
}

impl Resolution {
    /// The view to mount, regardless of outcome.
    pub fn view(&self) -> &ViewRef {
        match self {
            Resolution::View { view, .. } => view,
            Resolution::NotFound { view, .. } => view,
        }
    }

    /// The path that belongs in the history entry for this resolution.
    pub fn canonical_path(&self) -> &str {
        match self {
            Resolution::View { canonical, .. } => canonical,
            Resolution::NotFound { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }
}

/// Immutable route table.
///
/// Constructed once at application start from validated config and never
/// mutated afterwards; share it behind an `Arc` if multiple owners need it.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    not_found: ViewRef,
    max_redirect_hops: usize,
}

impl RouteTable {
    /// Compile a table from validated config.
    ///
    /// Entry order is preserved; it defines first-match precedence.
    pub fn from_config(routes: &[RouteConfig], navigation: &NavigationConfig) -> Self {
        let mut entries = Vec::with_capacity(routes.len());
        for route in routes {
            let target = match (&route.view, &route.redirect) {
                (Some(view), _) => {
                    let title = route.title.clone().unwrap_or_else(|| view.clone());
                    RouteTarget::View(ViewRef::with_title(view.clone(), title))
                }
                (None, Some(dest)) => RouteTarget::Redirect(dest.clone()),
                (None, None) => {
                    tracing::warn!(path = %route.path, "Route entry has no target, skipped");
                    continue;
                }
            };
            entries.push(RouteEntry {
                path: route.path.clone(),
                target,
            });
        }

        Self {
            entries,
            not_found: ViewRef::new(navigation.not_found_view.clone()),
            max_redirect_hops: navigation.max_redirect_hops,
        }
    }

    /// Resolve a path to a view, following redirects.
    ///
    /// Pure lookup: no I/O, no caching, deterministic for a given table.
    pub fn resolve(&self, path: &str) -> Resolution {
        let mut current = path;
        let mut redirected = false;

        for _ in 0..=self.max_redirect_hops {
            match self.lookup(current) {
                Some(RouteTarget::View(view)) => {
                    return Resolution::View {
                        view: view.clone(),
                        canonical: current.to_string(),
                        redirected,
                    };
                }
                Some(RouteTarget::Redirect(dest)) => {
                    redirected = true;
                    current = dest;
                }
                None => {
                    return self.not_found(path);
                }
            }
        }

        // Validated tables cannot loop; this bounds programmatic ones.
        tracing::warn!(
            path = %path,
            max_redirect_hops = self.max_redirect_hops,
            "Redirect hop limit exceeded"
        );
        self.not_found(path)
    }

    /// First entry whose path matches exactly.
    fn lookup(&self, path: &str) -> Option<&RouteTarget> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.target)
    }

    fn not_found(&self, path: &str) -> Resolution {
        Resolution::NotFound {
            view: self.not_found.clone(),
            path: path.to_string(),
        }
    }

    /// The compiled entries, in precedence order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// The view rendered for unmatched paths.
    pub fn not_found_view(&self) -> &ViewRef {
        &self.not_found
    }
}
