use crate::compiler::Compiler;
use crate::error::{Error, Result};
use crate::scope::Scope;

use regex::RegexSet;

/// Matches a path against a set of route patterns at once.
///
/// Used to decide whether a before-filter applies to a request path.
#[derive(Debug, Clone)]
pub struct ScopeMatcher {
    set: RegexSet,
}

impl ScopeMatcher {
    /// With no `targets`, the union of every route the scope and its
    /// descendants own.
    /// Otherwise each target is either a literal path (leading `/`) or the
    /// name of a route owned by the scope.
    pub fn new<S: AsRef<str>>(scope: &Scope, compiler: &dyn Compiler, targets: &[S]) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();
        if targets.is_empty() {
            patterns.extend(scope.all_routes().iter().map(|r| r.pattern().as_str().to_owned()));
        } else {
            for target in targets {
                let target = target.as_ref();
                let pattern = if target.starts_with('/') {
                    compiler.compile(target)?.pattern().as_str().to_owned()
                } else {
                    scope.route_for(target)?.pattern().as_str().to_owned()
                };
                patterns.push(pattern);
            }
        }

        let set = RegexSet::new(&patterns).map_err(|source| Error::Compile {
            path: patterns.join("|").into(),
            source,
        })?;
        Ok(Self { set })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// An empty matcher matches nothing.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::RegexCompiler;
    use crate::Routes;

    #[test]
    fn union_of_scope_routes() {
        let mut routes = Routes::new();
        routes.resources("posts", |_| {});
        let scope = &routes.scopes()[0].children()[0];
        let m = scope.matcher::<&str>(&RegexCompiler, &[]).unwrap();
        assert_eq!(m.len(), 4);
        assert!(m.matches("/posts"));
        assert!(m.matches("/posts/7/edit"));
        assert!(!m.matches("/comments"));
    }

    #[test]
    fn targets_by_name_and_path() {
        let mut routes = Routes::new();
        routes.resources("posts", |_| {});
        let scope = &routes.scopes()[0].children()[0];
        let m = scope.matcher(&RegexCompiler, &["edit", "/feed"]).unwrap();
        assert!(m.matches("/posts/1/edit"));
        assert!(m.matches("/feed"));
        assert!(!m.matches("/posts/1"));
        assert!(scope.matcher(&RegexCompiler, &["nope"]).is_err());
    }
}
