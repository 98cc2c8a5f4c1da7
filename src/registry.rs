use crate::error::{Error, Result};
use crate::route::Route;

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

/// Strips the symbol marker: `:post` and `post` name the same route.
pub(crate) fn canonical(name: &str) -> &str {
    name.strip_prefix(':').unwrap_or(name)
}

/// Global map from full route name to route.
#[derive(Debug, Default, Clone)]
pub struct RouteRegistry {
    routes: HashMap<Box<str>, Arc<Route>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `route` under its full name. A route already registered under
    /// that name is replaced.
    pub fn register(&mut self, route: Arc<Route>) -> &mut Self {
        let key: Box<str> = route.full_name().into();
        if let Some(old) = self.routes.insert(key, route) {
            debug!(name = old.full_name(), previous = old.as_str(), "route overwritten");
        }
        self
    }

    /// Registers every route in order, so later ones win.
    pub fn merge<I>(&mut self, routes: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<Route>>,
    {
        for route in routes {
            self.register(route);
        }
        self
    }

    pub fn resolve(&self, name: &str) -> Result<&Arc<Route>> {
        let name = canonical(name);
        self.routes.get(name).ok_or_else(|| Error::not_defined(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(canonical(name))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Route>> + '_ {
        self.routes.values()
    }

    /// Routes ordered by name length, then name.
    pub fn sorted(&self) -> Vec<&Arc<Route>> {
        let mut routes: Vec<_> = self.routes.values().collect();
        routes.sort_by(|a, b| {
            let (a, b) = (a.full_name(), b.full_name());
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        });
        routes
    }
}

/// One line per route: the name padded to the longest name, then the path.
impl fmt::Display for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes = self.sorted();
        let width = routes.iter().map(|r| r.full_name().len()).max().unwrap_or(0);
        let mut line = String::new();
        for route in routes {
            line.clear();
            write!(line, "{:<width$}  {}", route.full_name(), route.as_str(), width = width)?;
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// A registry that can be read from many threads while new routes are
/// merged in. Readers hold a snapshot; a merge swaps in a fresh copy.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: RwLock<Arc<RouteRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: RouteRegistry) -> Self {
        Self {
            inner: RwLock::new(Arc::new(registry)),
        }
    }

    /// The current snapshot.
    pub fn load(&self) -> Arc<RouteRegistry> {
        self.inner.read().clone()
    }

    pub fn merge<I>(&self, routes: I)
    where
        I: IntoIterator<Item = Arc<Route>>,
    {
        let mut guard = self.inner.write();
        let mut next = RouteRegistry::clone(&guard);
        next.merge(routes);
        *guard = Arc::new(next);
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<Route>> {
        self.inner.read().resolve(name).map(Arc::clone)
    }
}

impl From<RouteRegistry> for SharedRegistry {
    fn from(registry: RouteRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Routes;

    #[test]
    fn canonical_strips_symbol_marker() {
        assert_eq!(canonical(":post"), "post");
        assert_eq!(canonical("post"), "post");
        assert_eq!(canonical(""), "");
    }

    #[test]
    fn dump_is_sorted_and_aligned() {
        let mut routes = Routes::new();
        routes.map("home", "/").map("dashboard", "dash");
        let dump = routes.registry().to_string();
        assert_eq!(dump, "home       /\ndashboard  /dash\n");
    }

    #[test]
    fn shared_registry_swaps_snapshots() {
        let mut routes = Routes::new();
        routes.map("home", "/");
        let shared = SharedRegistry::from(routes.registry().clone());
        let before = shared.load();

        let mut more = Routes::new();
        more.map("about", "about");
        shared.merge(more.registry().iter().cloned());

        assert!(before.resolve("about").is_err());
        assert_eq!(shared.resolve(":about").unwrap().as_str(), "/about");
        assert_eq!(shared.load().len(), 2);
    }
}
