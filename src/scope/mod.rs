mod expand;
mod mapper;
mod spec;

pub use self::mapper::Mapper;
pub use self::spec::{Action, PathNames, ResourceOptions, ResourceSpec, ResourceSpecs};

pub(crate) use self::mapper::Env;

use crate::compiler::Compiler;
use crate::error::{Error, Result};
use crate::matcher::ScopeMatcher;
use crate::registry::canonical;
use crate::route::Route;
use crate::template::{PathTemplate, Segment};

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Root,
    Namespace,
    /// Plural resource.
    Resources,
    /// Singular resource.
    Resource,
    /// Naming-only level, such as the `new` in `new_post`.
    Action,
}

impl ScopeKind {
    pub fn is_resource(self) -> bool {
        matches!(self, Self::Resources | Self::Resource)
    }
}

/// What one nesting level contributes to the routes declared beneath it.
///
/// A level may contribute a name, path segments, both, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    kind: ScopeKind,
    name: Option<Box<str>>,
    path: PathTemplate,
}

impl Level {
    pub(crate) fn new(kind: ScopeKind, name: Option<&str>, path: PathTemplate) -> Self {
        Self {
            kind,
            name: name.map(Into::into),
            path,
        }
    }

    pub(crate) fn action(name: &str) -> Self {
        Self::new(ScopeKind::Action, Some(name), PathTemplate::new())
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> &PathTemplate {
        &self.path
    }
}

/// Identity of a scope, shared with every route it owns.
#[derive(Debug)]
pub struct ScopeInfo {
    level: Level,
    name: Option<Box<str>>,
    base: PathTemplate,
    resource: Option<Box<str>>,
    namespace: Option<Box<str>>,
    shallow: bool,
    path_names: PathNames,
}

impl ScopeInfo {
    fn root() -> Self {
        Self {
            level: Level::new(ScopeKind::Root, None, PathTemplate::new()),
            name: None,
            base: PathTemplate::new(),
            resource: None,
            namespace: None,
            shallow: false,
            path_names: PathNames::default(),
        }
    }

    pub(crate) fn for_namespace(parent: &ScopeInfo, name: Option<&str>, path: PathTemplate) -> Self {
        Self {
            level: Level::new(ScopeKind::Namespace, name, path.clone()),
            name: name.map(Into::into),
            base: path,
            resource: None,
            namespace: name.map(Into::into).or_else(|| parent.namespace.clone()),
            shallow: parent.shallow,
            path_names: PathNames::default(),
        }
    }

    /// `resource` is the singular name; for plural resources `name` is the
    /// declared plural name and `base` the collection path.
    pub(crate) fn for_resource(
        parent: &ScopeInfo,
        kind: ScopeKind,
        name: &str,
        resource: &str,
        base: PathTemplate,
        opts: Option<&ResourceOptions>,
    ) -> Self {
        let mut path = base.clone();
        if kind == ScopeKind::Resources {
            path.push(Segment::Placeholder(format!("{}_id", resource).into()));
        }
        Self {
            level: Level::new(kind, Some(resource), path),
            name: Some(name.into()),
            base,
            resource: Some(resource.into()),
            namespace: parent.namespace.clone(),
            shallow: opts
                .and_then(ResourceOptions::shallow_flag)
                .unwrap_or(parent.shallow),
            path_names: opts.map(|o| o.segment_names().clone()).unwrap_or_default(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.level.kind
    }

    /// Contribution to descendants: for `resources :posts` this is the level
    /// named `post` with path `posts/:post_id`.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The declared symbolic name (`posts` for `resources :posts`).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The scope's own path, without the id placeholder of plural resources.
    pub fn base(&self) -> &PathTemplate {
        &self.base
    }

    /// Singular name, for resource scopes only.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Name of the nearest enclosing named namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_shallow(&self) -> bool {
        self.shallow
    }

    pub fn path_names(&self) -> &PathNames {
        &self.path_names
    }
}

/// A frozen node of the namespace tree.
#[derive(Debug)]
pub struct Scope {
    info: Arc<ScopeInfo>,
    ancestors: Vec<Level>,
    routes: Vec<Arc<Route>>,
    children: Vec<Scope>,
}

impl Scope {
    pub(crate) fn root() -> Self {
        Self {
            info: Arc::new(ScopeInfo::root()),
            ancestors: Vec::new(),
            routes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn child(&self, info: ScopeInfo) -> Self {
        Self {
            info: Arc::new(info),
            ancestors: self.lineage(),
            routes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The ancestor chain handed to children: `ancestors + [self]`.
    pub(crate) fn lineage(&self) -> Vec<Level> {
        let mut chain = self.ancestors.clone();
        if self.info.kind() != ScopeKind::Root {
            chain.push(self.info.level.clone());
        }
        chain
    }

    pub(crate) fn push_route(&mut self, route: Arc<Route>) {
        self.routes.push(route)
    }

    pub(crate) fn push_child(&mut self, child: Scope) {
        self.children.push(child)
    }

    pub fn info(&self) -> &Arc<ScopeInfo> {
        &self.info
    }

    pub fn kind(&self) -> ScopeKind {
        self.info.kind()
    }

    /// Enclosing levels, outermost first. Never contains the scope itself.
    pub fn ancestors(&self) -> &[Level] {
        &self.ancestors
    }

    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn children(&self) -> &[Scope] {
        &self.children
    }

    /// Routes of this scope followed by those of every descendant, in
    /// declaration order.
    pub fn all_routes(&self) -> Vec<&Arc<Route>> {
        let mut out: Vec<&Arc<Route>> = self.routes.iter().collect();
        for child in &self.children {
            out.extend(child.all_routes());
        }
        out
    }

    /// Finds a route by the local action name of one of this scope's own
    /// routes (`show`), then by the full name of any route beneath it
    /// (`post`).
    pub fn route_for(&self, name: &str) -> Result<&Arc<Route>> {
        let name = canonical(name);
        self.routes
            .iter()
            .find(|r| r.name() == name)
            .or_else(|| {
                self.all_routes()
                    .into_iter()
                    .find(|r| r.full_name() == name)
            })
            .ok_or_else(|| Error::not_defined(name))
    }

    /// Union matcher over every route beneath this scope, or over `targets`
    /// when given.
    pub fn matcher<S: AsRef<str>>(
        &self,
        compiler: &dyn Compiler,
        targets: &[S],
    ) -> Result<ScopeMatcher> {
        ScopeMatcher::new(self, compiler, targets)
    }
}
