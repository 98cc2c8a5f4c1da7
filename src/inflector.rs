use std::borrow::Cow;

/// Derives the singular form of a resource name.
pub trait Inflector: Send + Sync {
    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// A small rule-based English singularizer.
///
/// Only the last `_`-separated word is inflected, so `blog_posts` becomes
/// `blog_post`. Supply your own [`Inflector`] for anything it gets wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("houses", "house"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

// first match wins
const SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("sses", "ss"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("xes", "x"),
    ("uses", "us"),
    ("ss", "ss"),
    ("us", "us"),
    ("s", ""),
];

impl English {
    fn singular_word(word: &str) -> Option<String> {
        if UNCOUNTABLE.contains(&word) {
            return None;
        }
        if let Some(&(_, single)) = IRREGULAR.iter().find(|&&(plural, _)| plural == word) {
            return Some(single.to_owned());
        }
        for &(suffix, replacement) in SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() || suffix == replacement {
                    return None;
                }
                return Some(format!("{}{}", stem, replacement));
            }
        }
        None
    }
}

impl Inflector for English {
    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let (head, tail) = match word.rfind('_') {
            Some(i) => word.split_at(i + 1),
            None => ("", word),
        };
        match Self::singular_word(tail) {
            Some(single) => Cow::Owned(format!("{}{}", head, single)),
            None => Cow::Borrowed(word),
        }
    }
}
