use crate::registry::canonical;

/// One resource declaration target, parsed once at the declaration boundary.
///
/// `Pair("users", "posts")` declares `posts` inside `users`;
/// `Group("users", [..])` declares every listed spec inside `users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSpec {
    Named(Box<str>),
    Pair(Box<str>, Box<str>),
    Group(Box<str>, Vec<ResourceSpec>),
}

impl ResourceSpec {
    pub fn named(name: &str) -> Self {
        Self::Named(canonical(name).into())
    }

    pub fn pair(parent: &str, child: &str) -> Self {
        Self::Pair(canonical(parent).into(), canonical(child).into())
    }

    pub fn group<I>(parent: &str, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceSpec>,
    {
        Self::Group(
            canonical(parent).into(),
            children.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<&str> for ResourceSpec {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<(&str, &str)> for ResourceSpec {
    fn from((parent, child): (&str, &str)) -> Self {
        Self::pair(parent, child)
    }
}

/// Sibling resource declarations, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSpecs(Vec<ResourceSpec>);

impl ResourceSpecs {
    pub fn iter(&self) -> std::slice::Iter<'_, ResourceSpec> {
        self.0.iter()
    }
}

impl From<ResourceSpec> for ResourceSpecs {
    fn from(spec: ResourceSpec) -> Self {
        Self(vec![spec])
    }
}

impl From<&str> for ResourceSpecs {
    fn from(name: &str) -> Self {
        Self::from(ResourceSpec::from(name))
    }
}

impl From<(&str, &str)> for ResourceSpecs {
    fn from(pair: (&str, &str)) -> Self {
        Self::from(ResourceSpec::from(pair))
    }
}

impl<T: Into<ResourceSpec>, const N: usize> From<[T; N]> for ResourceSpecs {
    fn from(specs: [T; N]) -> Self {
        Self(specs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ResourceSpec>> From<Vec<T>> for ResourceSpecs {
    fn from(specs: Vec<T>) -> Self {
        Self(specs.into_iter().map(Into::into).collect())
    }
}

/// Path segments used for the `new` and `edit` actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNames {
    new: Box<str>,
    edit: Box<str>,
}

impl PathNames {
    pub fn new(new: &str, edit: &str) -> Self {
        Self {
            new: new.into(),
            edit: edit.into(),
        }
    }

    pub fn new_segment(&self) -> &str {
        &self.new
    }

    pub fn edit_segment(&self) -> &str {
        &self.edit
    }
}

impl Default for PathNames {
    fn default() -> Self {
        Self::new("new", "edit")
    }
}

/// Options for `resources` and `resource` declarations.
///
/// ```
/// use waymark::ResourceOptions;
///
/// let opts = ResourceOptions::new()
///     .shallow(true)
///     .path("entries")
///     .path_names("nuevo", "editar");
/// assert_eq!(opts.shallow_flag(), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceOptions {
    shallow: Option<bool>,
    path: Option<Box<str>>,
    path_names: PathNames,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow nesting; descendants inherit it unless they set their own.
    pub fn shallow(mut self, shallow: bool) -> Self {
        self.shallow = Some(shallow);
        self
    }

    /// Path segment used instead of the resource name. Route names are unchanged.
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.trim_matches('/').into());
        self
    }

    pub fn path_names(mut self, new: &str, edit: &str) -> Self {
        self.path_names = PathNames::new(new, edit);
        self
    }

    pub fn shallow_flag(&self) -> Option<bool> {
        self.shallow
    }

    pub fn custom_path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn segment_names(&self) -> &PathNames {
        &self.path_names
    }
}

/// A custom member or collection action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: Box<str>,
    path: Option<Box<str>>,
}

impl Action {
    pub fn new(name: &str) -> Self {
        Self {
            name: canonical(name).into(),
            path: None,
        }
    }

    /// Path segment used instead of the action name.
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.trim_matches('/').into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segment(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
