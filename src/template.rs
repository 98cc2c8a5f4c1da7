use std::fmt;

use smallvec::SmallVec;

const SLASH: char = '/';
const COLON: char = ':';

/// One piece of a path template: either literal text or a `:name` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(Box<str>),
    Placeholder(Box<str>),
}

impl Segment {
    /// Parses a single segment. A lone `:` is kept as literal text.
    pub fn parse(part: &str) -> Self {
        match part.strip_prefix(COLON) {
            Some(name) if !name.is_empty() => Self::Placeholder(name.into()),
            _ => Self::Literal(part.into()),
        }
    }

    pub fn placeholder(name: &str) -> Self {
        Self::Placeholder(name.into())
    }

    pub fn as_placeholder(&self) -> Option<&str> {
        match self {
            Self::Placeholder(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Placeholder(name) => write!(f, "{}{}", COLON, name),
        }
    }
}

/// An ordered sequence of path segments.
///
/// Templates are built from strings (`"/posts/:id"`), from arrays of segments
/// (`["posts", ":id"]`), or by concatenating the contributions of nested scopes.
/// Empty segments are dropped, so `"/"`, `""` and `[]` all denote the root path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    segments: SmallVec<[Segment; 4]>,
}

impl PathTemplate {
    pub fn new() -> Self {
        Self {
            segments: SmallVec::new(),
        }
    }

    pub fn parse(path: &str) -> Self {
        path.split(SLASH)
            .filter(|part| !part.is_empty())
            .map(Segment::parse)
            .collect()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment)
    }

    pub fn extend_from(&mut self, other: &PathTemplate) {
        self.segments.extend(other.segments.iter().cloned())
    }

    /// Placeholder names in left-to-right order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::as_placeholder)
    }

    /// Placeholder names with duplicates collapsed, first occurrence wins.
    pub fn capture_keys(&self) -> Vec<Box<str>> {
        let mut keys: Vec<Box<str>> = Vec::new();
        for name in self.placeholders() {
            if !keys.iter().any(|k| &**k == name) {
                keys.push(name.into());
            }
        }
        keys
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "{}{}", SLASH, segment)?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for PathTemplate {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Segment> for PathTemplate {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        self.segments.extend(iter)
    }
}

impl From<&str> for PathTemplate {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for PathTemplate {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&[&str]> for PathTemplate {
    fn from(parts: &[&str]) -> Self {
        let mut template = Self::new();
        for part in parts {
            template.extend_from(&Self::parse(part));
        }
        template
    }
}

impl<const N: usize> From<[&str; N]> for PathTemplate {
    fn from(parts: [&str; N]) -> Self {
        Self::from(&parts[..])
    }
}

impl From<Vec<&str>> for PathTemplate {
    fn from(parts: Vec<&str>) -> Self {
        Self::from(parts.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_empty_segments() {
        let t = PathTemplate::parse("/posts//:id/");
        assert_eq!(
            t.segments(),
            &[Segment::Literal("posts".into()), Segment::placeholder("id")]
        );
        assert_eq!(t.to_string(), "/posts/:id");
    }

    #[test]
    fn root_renders_as_slash() {
        assert!(PathTemplate::parse("/").is_root());
        assert_eq!(PathTemplate::from("").to_string(), "/");
        assert_eq!(PathTemplate::from(Vec::<&str>::new()).to_string(), "/");
    }

    #[test]
    fn array_parts_may_carry_slashes() {
        let t = PathTemplate::from(["/admin", "users/:id", "edit"]);
        assert_eq!(t.to_string(), "/admin/users/:id/edit");
    }

    #[test]
    fn capture_keys_collapse_duplicates() {
        let t = PathTemplate::parse("/u/:id/p/:id/:slug");
        assert_eq!(t.placeholders().count(), 3);
        let keys = t.capture_keys();
        let keys: Vec<&str> = keys.iter().map(|k| &**k).collect();
        assert_eq!(keys, ["id", "slug"]);
    }

    #[test]
    fn lone_colon_is_literal() {
        assert_eq!(Segment::parse(":"), Segment::Literal(":".into()));
    }
}
