use crate::error::{Error, Result};
use crate::template::{PathTemplate, Segment};

use regex::Regex;

/// Turns a path template string into a matchable pattern.
pub trait Compiler: Send + Sync {
    fn compile(&self, path: &str) -> Result<Compiled>;
}

/// A compiled pattern plus its placeholder names in appearance order.
#[derive(Debug, Clone)]
pub struct Compiled {
    pattern: Regex,
    keys: Vec<Box<str>>,
}

impl Compiled {
    pub fn new(pattern: Regex, keys: Vec<Box<str>>) -> Self {
        Self { pattern, keys }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn keys(&self) -> &[Box<str>] {
        &self.keys
    }

    pub fn into_parts(self) -> (Regex, Vec<Box<str>>) {
        (self.pattern, self.keys)
    }
}

/// The default compiler: literal segments match exactly, `:name` matches one
/// non-empty segment. Patterns are anchored at both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexCompiler;

const PARAM: &str = "([^/?#]+)";

impl Compiler for RegexCompiler {
    fn compile(&self, path: &str) -> Result<Compiled> {
        let template = PathTemplate::parse(path);

        let mut source = String::with_capacity(path.len() * 2 + 2);
        source.push('^');
        for segment in template.segments() {
            source.push('/');
            match segment {
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
                Segment::Placeholder(_) => source.push_str(PARAM),
            }
        }
        if template.is_root() {
            source.push('/');
        }
        source.push('$');

        let pattern = Regex::new(&source).map_err(|source| Error::Compile {
            path: path.into(),
            source,
        })?;
        Ok(Compiled::new(pattern, template.capture_keys()))
    }
}
