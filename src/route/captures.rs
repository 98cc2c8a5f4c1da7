use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Captures of a successful match: positional placeholder values first,
/// then the synthetic `resource`/`namespace`/`action` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl Captures<'_> {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Values only, in capture order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.buf.iter().map(|&(_, v)| v)
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> Captures<'a> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, key: &'a str, value: &'a str) {
        self.buf.push((key, value))
    }
}
