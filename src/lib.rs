//! Named, nested route declarations with path generation.
//!
//! Routes are declared inside a tree of scopes (namespaces and RESTful
//! resources). Each route's full name and path are the composition of every
//! enclosing scope's contribution, so `resources :users { resources :posts }`
//! yields `edit_user_post` at `/users/:user_id/posts/:id/edit`.

#![forbid(unsafe_code)]

mod compiler;
mod error;
mod inflector;
mod matcher;
mod param;
mod registry;
mod route;
mod routes;
mod template;

pub mod host;
pub mod scope;

pub use crate::compiler::{Compiled, Compiler, RegexCompiler};
pub use crate::error::{Error, Result};
pub use crate::host::{Dispatcher, Host, Params};
pub use crate::inflector::{English, Inflector};
pub use crate::matcher::ScopeMatcher;
pub use crate::param::ToParam;
pub use crate::registry::{RouteRegistry, SharedRegistry};
pub use crate::route::{Captures, Route, ACTION, NAMESPACE, RESOURCE};
pub use crate::routes::Routes;
pub use crate::scope::{
    Action, Level, Mapper, PathNames, ResourceOptions, ResourceSpec, ResourceSpecs, Scope,
    ScopeInfo, ScopeKind,
};
pub use crate::template::{PathTemplate, Segment};

pub use http::Method;
