use crate::compiler::{Compiler, RegexCompiler};
use crate::error::Result;
use crate::host::Host;
use crate::inflector::{English, Inflector};
use crate::param::ToParam;
use crate::registry::{RouteRegistry, SharedRegistry};
use crate::route::Route;
use crate::scope::{Env, Mapper, ResourceOptions, ResourceSpecs, Scope};
use crate::template::PathTemplate;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

/// The entry point: declares route trees and generates paths by name.
///
/// ```
/// use waymark::Routes;
///
/// let mut routes = Routes::new();
/// routes.namespace("admin", |admin| {
///     admin.map("dashboard", "/");
///     admin.resources("users", |_| {});
/// });
///
/// assert_eq!(routes.path_for("admin_dashboard", &[]).unwrap(), "/admin");
/// assert_eq!(routes.path_for("admin_user", &[&3]).unwrap(), "/admin/users/3");
/// ```
pub struct Routes {
    registry: RouteRegistry,
    scopes: Vec<Scope>,
    compiler: Box<dyn Compiler>,
    inflector: Box<dyn Inflector>,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Routes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Routes")
            .field("registry", &self.registry)
            .field("scopes", &self.scopes.len())
            .finish()
    }
}

impl Routes {
    pub fn new() -> Self {
        Self {
            registry: RouteRegistry::new(),
            scopes: Vec::new(),
            compiler: Box::new(RegexCompiler),
            inflector: Box::new(English),
        }
    }

    /// Replaces the pattern compiler used by later declarations.
    pub fn with_compiler(mut self, compiler: impl Compiler + 'static) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    /// Replaces the singularization rules used by later declarations.
    pub fn with_inflector(mut self, inflector: impl Inflector + 'static) -> Self {
        self.inflector = Box::new(inflector);
        self
    }

    /// Runs `f` against a fresh root scope, then hands handlers and filters
    /// to `host` and registers every route it declared. On error neither the
    /// registry nor the host is touched.
    pub fn try_draw<H, F>(&mut self, host: &mut H, f: F) -> Result<&mut Self>
    where
        H: Host + ?Sized,
        F: FnOnce(&mut Mapper<'_, H>),
    {
        let env = Env {
            compiler: &*self.compiler,
            inflector: &*self.inflector,
        };
        let mut mapper: Mapper<'_, H> = Mapper::new(Scope::root(), env);
        f(&mut mapper);
        let (scope, declared) = mapper.finish()?.bind(host);

        debug!(routes = declared.len(), "routes drawn");
        self.registry.merge(declared);
        self.scopes.push(scope);
        Ok(self)
    }

    /// Like [`try_draw`](Routes::try_draw), but panics on error.
    pub fn draw<H, F>(&mut self, host: &mut H, f: F) -> &mut Self
    where
        H: Host + ?Sized,
        F: FnOnce(&mut Mapper<'_, H>),
    {
        match self.try_draw(host, f) {
            Ok(this) => this,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn namespace(&mut self, prefix: &str, f: impl FnOnce(&mut Mapper<'_>)) -> &mut Self {
        self.draw(&mut (), |m| {
            m.namespace(prefix, f);
        })
    }

    pub fn resources(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        f: impl FnMut(&mut Mapper<'_>),
    ) -> &mut Self {
        self.resources_with(specs, ResourceOptions::default(), f)
    }

    pub fn resources_with(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        opts: ResourceOptions,
        f: impl FnMut(&mut Mapper<'_>),
    ) -> &mut Self {
        self.draw(&mut (), |m| {
            m.resources_with(specs, opts, f);
        })
    }

    pub fn resource(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        f: impl FnMut(&mut Mapper<'_>),
    ) -> &mut Self {
        self.resource_with(specs, ResourceOptions::default(), f)
    }

    pub fn resource_with(
        &mut self,
        specs: impl Into<ResourceSpecs>,
        opts: ResourceOptions,
        f: impl FnMut(&mut Mapper<'_>),
    ) -> &mut Self {
        self.draw(&mut (), |m| {
            m.resource_with(specs, opts, f);
        })
    }

    pub fn map(&mut self, name: &str, path: impl Into<PathTemplate>) -> &mut Self {
        self.draw(&mut (), |m| {
            m.map(name, path);
        })
    }

    pub fn map_name(&mut self, name: &str) -> &mut Self {
        self.draw(&mut (), |m| {
            m.map_name(name);
        })
    }

    pub fn resolve(&self, name: &str) -> Result<&Arc<Route>> {
        self.registry.resolve(name)
    }

    /// The path template of a route, e.g. `/posts/:id/edit`.
    pub fn route_for(&self, name: &str) -> Result<String> {
        self.resolve(name).map(|r| r.as_str().to_owned())
    }

    pub fn path_for(&self, name: &str, params: &[&dyn ToParam]) -> Result<String> {
        self.resolve(name)?.to_path(params)
    }

    pub fn path_for_with_query<Q>(&self, name: &str, params: &[&dyn ToParam], query: &Q) -> Result<String>
    where
        Q: Serialize + ?Sized,
    {
        self.resolve(name)?.to_path_with_query(params, query)
    }

    /// Every route, one per line, sorted by name length then name.
    pub fn dump_routes(&self) -> String {
        self.registry.to_string()
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// One root scope per draw, in draw order.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn into_shared(self) -> SharedRegistry {
        SharedRegistry::new(self.registry)
    }
}
