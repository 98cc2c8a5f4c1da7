use super::{Host, Params};

use crate::matcher::ScopeMatcher;
use crate::route::Route;

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use tracing::trace;

/// Routes grouped by method, tried in declaration order, plus the
/// before-filters of every scope.
#[derive(Debug)]
pub struct Dispatcher<T, F = ()> {
    method_map: HashMap<Method, Vec<(Arc<Route>, T)>>,
    filters: Vec<(ScopeMatcher, F)>,
}

impl<T, F> Default for Dispatcher<T, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Dispatcher<T, F> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
            filters: Vec::new(),
        }
    }

    /// The first route of `method` matching `path`, with its handler and
    /// captures.
    pub fn find(&self, method: &Method, path: &str) -> Option<(&Arc<Route>, &T, Params)> {
        let entries = self.method_map.get(method)?;
        entries.iter().find_map(|(route, handler)| {
            let caps = route.matches(path)?;
            trace!(%method, path, name = route.full_name(), "dispatched");
            Some((route, handler, Params::from(&caps)))
        })
    }

    /// Filters whose matcher accepts `path`, in declaration order.
    pub fn filters<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a F> + 'a {
        self.filters
            .iter()
            .filter(move |(m, _)| m.matches(path))
            .map(|(_, f)| f)
    }

    pub fn routes(&self, method: &Method) -> impl Iterator<Item = &Arc<Route>> + '_ {
        self.method_map
            .get(method)
            .into_iter()
            .flatten()
            .map(|(route, _)| route)
    }
}

impl<T, F> Host for Dispatcher<T, F> {
    type Handler = T;
    type Filter = F;

    fn route(&mut self, method: Method, route: Arc<Route>, handler: T) {
        self.method_map
            .entry(method)
            .or_insert_with(Vec::new)
            .push((route, handler));
    }

    fn before(&mut self, matcher: ScopeMatcher, filter: F) {
        self.filters.push((matcher, filter));
    }
}
