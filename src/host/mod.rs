//! Receivers of declared routes.
//!
//! The mapper resolves names and paths; a [`Host`] decides what a route is
//! bound to. [`Dispatcher`] is a method-keyed host that finds handlers by
//! request path.

mod dispatcher;
mod params;

pub use self::dispatcher::Dispatcher;
pub use self::params::Params;

use crate::matcher::ScopeMatcher;
use crate::route::Route;

use std::sync::Arc;

use http::Method;

pub trait Host {
    type Handler;
    type Filter;

    /// Called for every route declared with a method helper.
    fn route(&mut self, method: Method, route: Arc<Route>, handler: Self::Handler);

    /// Called once per `before` declaration, when its scope is frozen.
    fn before(&mut self, matcher: ScopeMatcher, filter: Self::Filter);
}

/// Naming only: handlers and filters are dropped.
impl Host for () {
    type Handler = ();
    type Filter = ();

    fn route(&mut self, _: Method, _: Arc<Route>, _: ()) {}

    fn before(&mut self, _: ScopeMatcher, _: ()) {}
}
