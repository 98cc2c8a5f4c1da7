use super::spec::{Action, ResourceOptions, ResourceSpec, ResourceSpecs};
use super::{Scope, ScopeInfo, ScopeKind};

use crate::compiler::Compiler;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::inflector::Inflector;
use crate::matcher::ScopeMatcher;
use crate::registry::canonical;
use crate::route::{Draft, Route};
use crate::template::PathTemplate;

use std::marker::PhantomData;
use std::sync::Arc;

use http::Method;
use tracing::debug;

#[derive(Clone, Copy)]
pub(crate) struct Env<'a> {
    pub(crate) compiler: &'a dyn Compiler,
    pub(crate) inflector: &'a dyn Inflector,
}

/// Declares routes into one scope.
///
/// Every nested declaration (`namespace`, `resources`, `resource`) runs its
/// closure against a child `Mapper` and freezes the child scope when the
/// closure returns. The first error raised anywhere in the tree is kept and
/// later declarations are skipped.
///
/// Handlers and filters are held until the whole tree is frozen; the host
/// sees nothing from a declaration that fails.
pub struct Mapper<'a, H: Host + ?Sized = ()> {
    scope: Scope,
    env: Env<'a>,
    filters: Vec<(Vec<Box<str>>, H::Filter)>,
    bound: Vec<(Method, Arc<Route>, H::Handler)>,
    guards: Vec<(ScopeMatcher, H::Filter)>,
    declared: Vec<Arc<Route>>,
    error: Option<Error>,
    _host: PhantomData<fn(&H)>,
}

/// A frozen scope with everything its declarations produced.
pub(crate) struct Frozen<H: Host + ?Sized> {
    scope: Scope,
    declared: Vec<Arc<Route>>,
    bound: Vec<(Method, Arc<Route>, H::Handler)>,
    guards: Vec<(ScopeMatcher, H::Filter)>,
}

impl<H: Host + ?Sized> Frozen<H> {
    /// Hands routes and filters to `host` in declaration order.
    pub(crate) fn bind(self, host: &mut H) -> (Scope, Vec<Arc<Route>>) {
        for (method, route, handler) in self.bound {
            host.route(method, route, handler);
        }
        for (matcher, filter) in self.guards {
            host.before(matcher, filter);
        }
        (self.scope, self.declared)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(
            &mut self,
            name: &str,
            path: impl Into<PathTemplate>,
            handler: H::Handler,
        ) -> &mut Self {
            self.handle(Method::$method, name, path.into(), handler)
        }
    };
}

impl<'a, H: Host + ?Sized> Mapper<'a, H> {
    pub(crate) fn new(scope: Scope, env: Env<'a>) -> Self {
        Self {
            scope,
            env,
            filters: Vec::new(),
            bound: Vec::new(),
            guards: Vec::new(),
            declared: Vec::new(),
            error: None,
            _host: PhantomData,
        }
    }

    /// The scope under construction.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Declares a named route. The name gains the prefixes of every named
    /// ancestor, the path the segments of every ancestor.
    pub fn map(&mut self, name: &str, path: impl Into<PathTemplate>) -> &mut Self {
        let name = canonical(name);
        self.add_plain(name, path.into());
        self
    }

    /// Declares a route whose only own segment is its name.
    pub fn map_name(&mut self, name: &str) -> &mut Self {
        let name = canonical(name);
        self.add_plain(name, PathTemplate::parse(name));
        self
    }

    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(patch, PATCH);
    define_method!(delete, DELETE);

    /// Declares a route and binds `handler` to it. The host receives the
    /// pair once the draw succeeds.
    pub fn handle(
        &mut self,
        method: Method,
        name: &str,
        path: PathTemplate,
        handler: H::Handler,
    ) -> &mut Self {
        if let Some(route) = self.add_plain(canonical(name), path) {
            self.bound.push((method, route, handler));
        }
        self
    }

    /// `/admin` contributes a path only; `admin` or `:admin` contributes
    /// both the name and the path segment.
    pub fn namespace(&mut self, prefix: &str, f: impl FnOnce(&mut Mapper<'_, H>)) -> &mut Self {
        let info = if prefix.starts_with('/') {
            ScopeInfo::for_namespace(&self.scope.info, None, PathTemplate::parse(prefix))
        } else {
            let name = canonical(prefix);
            ScopeInfo::for_namespace(&self.scope.info, Some(name), PathTemplate::parse(name))
        };
        self.nest(info, f);
        self
    }

    pub fn resources(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        f: impl FnMut(&mut Mapper<'_, H>),
    ) -> &mut Self {
        self.resources_with(specs, ResourceOptions::default(), f)
    }

    /// Declares plural resources. The closure runs once for every leaf
    /// resource of `specs`.
    pub fn resources_with(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        opts: ResourceOptions,
        mut f: impl FnMut(&mut Mapper<'_, H>),
    ) -> &mut Self {
        for spec in specs.into().iter() {
            self.declare(ScopeKind::Resources, spec, &opts, &mut f);
        }
        self
    }

    pub fn resource(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        f: impl FnMut(&mut Mapper<'_, H>),
    ) -> &mut Self {
        self.resource_with(specs, ResourceOptions::default(), f)
    }

    /// Declares singular resources. The closure runs once for every leaf
    /// resource of `specs`.
    pub fn resource_with(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        opts: ResourceOptions,
        mut f: impl FnMut(&mut Mapper<'_, H>),
    ) -> &mut Self {
        for spec in specs.into().iter() {
            self.declare(ScopeKind::Resource, spec, &opts, &mut f);
        }
        self
    }

    /// Custom action on one resource instance, e.g. `publish_post`.
    pub fn member(&mut self, action: impl Into<Action>) -> &mut Self {
        let action = action.into();
        self.custom_action(&action, true);
        self
    }

    /// Custom action on the whole collection, e.g. `published_posts`.
    pub fn collection(&mut self, action: impl Into<Action>) -> &mut Self {
        let action = action.into();
        self.custom_action(&action, false);
        self
    }

    /// Registers `filter` with the host for every route of this scope.
    /// The matcher is built when the scope is frozen, so routes declared
    /// after this call are covered too.
    pub fn before(&mut self, filter: H::Filter) -> &mut Self {
        self.filters.push((Vec::new(), filter));
        self
    }

    /// Registers `filter` for the listed route names or literal paths only.
    pub fn before_only<I, S>(&mut self, targets: I, filter: H::Filter) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = targets.into_iter().map(|t| t.as_ref().into()).collect();
        self.filters.push((targets, filter));
        self
    }
}

impl<'a, H: Host + ?Sized> Mapper<'a, H> {
    pub(crate) fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn add_plain(&mut self, name: &str, spec: PathTemplate) -> Option<Arc<Route>> {
        let ancestors = self.scope.lineage();
        self.add_route(Draft {
            action: name,
            leaf: name,
            spec,
            ancestors: &ancestors,
        })
    }

    /// Compiles a route and registers it into the scope under construction.
    pub(crate) fn add_route(&mut self, draft: Draft<'_>) -> Option<Arc<Route>> {
        if self.error.is_some() {
            return None;
        }
        match Route::build(self.env.compiler, draft, &self.scope.info) {
            Ok(route) => {
                let route = Arc::new(route);
                self.scope.push_route(route.clone());
                self.declared.push(route.clone());
                Some(route)
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    fn nest(&mut self, info: ScopeInfo, f: impl FnOnce(&mut Mapper<'_, H>)) {
        if self.error.is_some() {
            return;
        }
        let scope = self.scope.child(info);
        let mut child: Mapper<'_, H> = Mapper::new(scope, self.env);
        f(&mut child);
        match child.finish() {
            Ok(frozen) => {
                self.declared.extend(frozen.declared);
                self.bound.extend(frozen.bound);
                self.guards.extend(frozen.guards);
                self.scope.push_child(frozen.scope);
            }
            Err(e) => self.fail(e),
        }
    }

    fn declare<F>(&mut self, kind: ScopeKind, spec: &ResourceSpec, opts: &ResourceOptions, f: &mut F)
    where
        F: FnMut(&mut Mapper<'_, H>),
    {
        match spec {
            ResourceSpec::Named(name) => {
                let info = self.resource_info(kind, name, Some(opts));
                self.nest(info, |m| {
                    m.expand();
                    f(m);
                });
            }
            ResourceSpec::Pair(parent, child) => {
                let info = self.resource_info(kind, parent, None);
                let child = ResourceSpec::Named(child.clone());
                self.nest(info, |m| {
                    m.expand();
                    m.declare(kind, &child, opts, &mut *f);
                });
            }
            ResourceSpec::Group(parent, children) => {
                let info = self.resource_info(kind, parent, None);
                self.nest(info, |m| {
                    m.expand();
                    for child in children {
                        m.declare(kind, child, opts, &mut *f);
                    }
                });
            }
        }
    }

    fn resource_info(&self, kind: ScopeKind, name: &str, opts: Option<&ResourceOptions>) -> ScopeInfo {
        let segment = opts.and_then(ResourceOptions::custom_path).unwrap_or(name);
        let base = PathTemplate::parse(segment);
        match kind {
            ScopeKind::Resources => {
                let singular = self.env.inflector.singularize(name);
                ScopeInfo::for_resource(&self.scope.info, kind, name, &singular, base, opts)
            }
            _ => ScopeInfo::for_resource(&self.scope.info, kind, name, name, base, opts),
        }
    }

    fn custom_action(&mut self, action: &Action, member: bool) {
        if !self.scope.kind().is_resource() {
            self.fail(Error::NotInResource {
                action: action.name().into(),
            });
            return;
        }
        self.resource_route(member, action.name(), Some(action.name()), Some(action.segment()));
    }

    /// Freezes the scope and builds the pending filter matchers.
    pub(crate) fn finish(self) -> Result<Frozen<H>> {
        let Self {
            scope,
            env,
            filters,
            bound,
            mut guards,
            declared,
            error,
            ..
        } = self;
        if let Some(e) = error {
            return Err(e);
        }
        for (targets, filter) in filters {
            let matcher = ScopeMatcher::new(&scope, env.compiler, targets.as_slice())?;
            guards.push((matcher, filter));
        }
        debug!(
            kind = ?scope.kind(),
            name = scope.info().name().unwrap_or(""),
            routes = scope.routes().len(),
            "scope frozen"
        );
        Ok(Frozen {
            scope,
            declared,
            bound,
            guards,
        })
    }
}
