use super::{Captures, Route, ACTION, NAMESPACE, RESOURCE};

use crate::compiler::Compiler;
use crate::error::{Error, Result};
use crate::param::ToParam;
use crate::scope::{Level, ScopeInfo};
use crate::template::{PathTemplate, Segment};

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

/// Bytes escaped in placeholder values so a value stays one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Input of route construction.
///
/// `leaf` is the last component of the full name and `action` the local name
/// reported in captures; they differ for generated resource routes
/// (`posts` vs `index`).
pub(crate) struct Draft<'a> {
    pub(crate) action: &'a str,
    pub(crate) leaf: &'a str,
    pub(crate) spec: PathTemplate,
    pub(crate) ancestors: &'a [Level],
}

impl Route {
    pub(crate) fn build(
        compiler: &dyn Compiler,
        draft: Draft<'_>,
        owner: &Arc<ScopeInfo>,
    ) -> Result<Self> {
        let Draft {
            action,
            leaf,
            spec,
            ancestors,
        } = draft;

        let mut template = PathTemplate::new();
        for level in ancestors {
            template.extend_from(level.path());
        }
        template.extend_from(&spec);

        let full_name = ancestors
            .iter()
            .filter_map(Level::name)
            .chain(Some(leaf))
            .collect::<Vec<_>>()
            .join("_");

        let path = template.to_string();
        let (pattern, mut capture_keys) = compiler.compile(&path)?.into_parts();

        let mut synthetic = SmallVec::new();
        let candidates = [
            (RESOURCE, owner.resource()),
            (NAMESPACE, owner.namespace()),
            (ACTION, Some(action)),
        ];
        for &(key, value) in candidates.iter() {
            let value = match value {
                Some(v) => v,
                None => continue,
            };
            if capture_keys.iter().any(|k| &**k == key) {
                continue;
            }
            capture_keys.push(key.into());
            synthetic.push((key, value.into()));
        }

        trace!(name = %full_name, path = %path, "route compiled");

        Ok(Self {
            name: action.into(),
            full_name: full_name.into(),
            template,
            path: path.into(),
            pattern,
            capture_keys,
            synthetic,
            owner: owner.clone(),
        })
    }

    /// Substitutes `params` into the placeholders, left to right. Values are
    /// percent-encoded, so `a/b` fills one segment as `a%2Fb`.
    ///
    /// ```
    /// use waymark::Routes;
    ///
    /// let mut routes = Routes::new();
    /// routes.resources("posts", |_| {});
    ///
    /// let route = routes.resolve("edit_post").unwrap();
    /// assert_eq!(route.to_path(&[&42]).unwrap(), "/posts/42/edit");
    /// assert!(route.to_path(&[]).is_err());
    /// assert!(route.to_path(&[&1, &2]).is_err());
    /// ```
    pub fn to_path(&self, params: &[&dyn ToParam]) -> Result<String> {
        let expected = self.arity();
        if params.len() > expected {
            return Err(Error::ExcessParams {
                route: self.full_name.clone(),
                expected,
                given: params.len(),
            });
        }
        if let Some(key) = self.template.placeholders().nth(params.len()) {
            return Err(Error::MissingParam {
                route: self.full_name.clone(),
                key: key.into(),
            });
        }

        let mut params = params.iter();
        let mut path = String::with_capacity(self.path.len());
        for segment in self.template.segments() {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(_) => {
                    if let Some(value) = params.next() {
                        let value = value.to_param();
                        path.extend(utf8_percent_encode(&value, SEGMENT));
                    }
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Like [`to_path`](Route::to_path), then appends `query` as a query
    /// string. An empty query appends nothing.
    pub fn to_path_with_query<Q>(&self, params: &[&dyn ToParam], query: &Q) -> Result<String>
    where
        Q: Serialize + ?Sized,
    {
        let mut path = self.to_path(params)?;
        let query = serde_urlencoded::to_string(query)?;
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        Ok(path)
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }

    pub fn matches<'a>(&'a self, candidate: &'a str) -> Option<Captures<'a>> {
        let found = self.pattern.captures(candidate)?;
        let mut captures = Captures::new();
        for (key, group) in self.template.placeholders().zip(found.iter().skip(1)) {
            if let Some(group) = group {
                captures.push(key, group.as_str());
            }
        }
        for (key, value) in self.synthetic.iter() {
            captures.push(*key, value);
        }
        Some(captures)
    }
}
