mod captures;
mod imp;

pub use self::captures::Captures;

pub(crate) use self::imp::Draft;

use crate::scope::ScopeInfo;
use crate::template::PathTemplate;

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use smallvec::SmallVec;

/// Keys of the synthetic captures appended to every match.
pub const RESOURCE: &str = "resource";
pub const NAMESPACE: &str = "namespace";
pub const ACTION: &str = "action";

/// One named, fully-qualified, compiled path.
#[derive(Debug)]
pub struct Route {
    name: Box<str>,
    full_name: Box<str>,
    template: PathTemplate,
    path: Box<str>,
    pattern: Regex,
    capture_keys: Vec<Box<str>>,
    synthetic: SmallVec<[(&'static str, Box<str>); 3]>,
    owner: Arc<ScopeInfo>,
}

impl Route {
    /// The local action name (`index`, `show`, `dashboard`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registry key, e.g. `edit_user_post`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// The path with placeholders left as `:name`.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Placeholder keys followed by the synthetic keys the path does not
    /// already define.
    pub fn capture_keys(&self) -> &[Box<str>] {
        &self.capture_keys
    }

    pub fn owner(&self) -> &Arc<ScopeInfo> {
        &self.owner
    }

    /// Number of positional values `to_path` expects.
    pub fn arity(&self) -> usize {
        self.template.placeholders().count()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
