use crate::route::Captures;

use std::str::FromStr;

use percent_encoding::percent_decode_str;

/// Owned copy of the captures of a dispatched request, percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(Box<str>, Box<str>)>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find_map(|(k, v)| if &**k == name { Some(&**v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<&Captures<'_>> for Params {
    fn from(caps: &Captures<'_>) -> Self {
        Self {
            pairs: caps
                .iter()
                .map(|&(k, v)| (k.into(), percent_decode_str(v).decode_utf8_lossy().into()))
                .collect(),
        }
    }
}

impl IntoIterator for Params {
    type Item = (Box<str>, Box<str>);
    type IntoIter = std::vec::IntoIter<(Box<str>, Box<str>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
