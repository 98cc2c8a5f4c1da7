use super::mapper::Mapper;
use super::{Level, ScopeKind};

use crate::host::Host;
use crate::route::Draft;
use crate::template::{PathTemplate, Segment};

impl<H: Host + ?Sized> Mapper<'_, H> {
    /// Declares the conventional routes of the resource scope under
    /// construction. Runs before the resource's own closure.
    pub(super) fn expand(&mut self) {
        let kind = self.scope().kind();
        let names = self.scope().info().path_names().clone();
        match kind {
            ScopeKind::Resources => {
                self.resource_route(false, "index", None, None);
                self.resource_route(false, "new", Some("new"), Some(names.new_segment()));
                self.resource_route(true, "show", None, None);
                self.resource_route(true, "edit", Some("edit"), Some(names.edit_segment()));
            }
            ScopeKind::Resource => {
                self.resource_route(true, "show", None, None);
                self.resource_route(true, "new", Some("new"), Some(names.new_segment()));
                self.resource_route(true, "edit", Some("edit"), Some(names.edit_segment()));
            }
            _ => {}
        }
    }

    /// One generated route of the current resource scope.
    ///
    /// `prefix` becomes a naming-only level in front of the ancestors
    /// (`new` + `user` + `post` = `new_user_post`); `segment` is appended to
    /// the resource path.
    pub(super) fn resource_route(
        &mut self,
        member: bool,
        action: &str,
        prefix: Option<&str>,
        segment: Option<&str>,
    ) {
        let info = self.scope().info().clone();
        let plural = info.kind() == ScopeKind::Resources;

        let mut ancestors: Vec<Level> = Vec::new();
        if let Some(prefix) = prefix {
            ancestors.push(Level::action(prefix));
        }
        ancestors.extend(nesting(
            self.scope().ancestors(),
            plural && member,
            info.is_shallow(),
        ));

        let mut spec = info.base().clone();
        if plural && member {
            spec.push(Segment::placeholder("id"));
        }
        if let Some(segment) = segment {
            spec.extend_from(&PathTemplate::parse(segment));
        }

        // `new` names the instance it builds: `new_post`, not `new_posts`.
        let leaf = if plural && !member && action != "new" {
            info.name()
        } else {
            info.resource()
        };

        self.add_route(Draft {
            action,
            leaf: leaf.unwrap_or_default(),
            spec,
            ancestors: &ancestors,
        });
    }
}

/// Enclosing levels kept for a generated route.
///
/// Under shallow nesting, member routes keep no enclosing resource and every
/// other route keeps only the innermost one. Namespaces are always kept.
fn nesting(ancestors: &[Level], member: bool, shallow: bool) -> impl Iterator<Item = Level> + '_ {
    let innermost = if member {
        None
    } else {
        ancestors.iter().rposition(|l| l.kind().is_resource())
    };
    ancestors
        .iter()
        .enumerate()
        .filter(move |&(i, level)| !shallow || !level.kind().is_resource() || Some(i) == innermost)
        .map(|(_, level)| level.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(kind: ScopeKind, name: &str) -> Level {
        Level::new(kind, Some(name), PathTemplate::parse(name))
    }

    fn names(levels: impl Iterator<Item = Level>) -> Vec<String> {
        levels.map(|l| l.name().unwrap_or("").to_owned()).collect()
    }

    #[test]
    fn deep_nesting_is_kept_without_shallow() {
        let chain = [
            level(ScopeKind::Namespace, "admin"),
            level(ScopeKind::Resources, "user"),
            level(ScopeKind::Resources, "post"),
        ];
        assert_eq!(names(nesting(&chain, true, false)), ["admin", "user", "post"]);
    }

    #[test]
    fn shallow_member_drops_all_resources() {
        let chain = [
            level(ScopeKind::Namespace, "admin"),
            level(ScopeKind::Resources, "user"),
            level(ScopeKind::Resources, "post"),
        ];
        assert_eq!(names(nesting(&chain, true, true)), ["admin"]);
    }

    #[test]
    fn shallow_collection_keeps_innermost_resource() {
        let chain = [
            level(ScopeKind::Resources, "user"),
            level(ScopeKind::Namespace, "blog"),
            level(ScopeKind::Resource, "account"),
        ];
        assert_eq!(names(nesting(&chain, false, true)), ["blog", "account"]);
    }
}
