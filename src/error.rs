#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the route `{name}` is not defined")]
    RouteNotDefined { name: Box<str> },

    #[error("missing value for `:{key}` in route `{route}`")]
    MissingParam { route: Box<str>, key: Box<str> },

    #[error("route `{route}` takes {expected} parameters but {given} were given")]
    ExcessParams {
        route: Box<str>,
        expected: usize,
        given: usize,
    },

    #[error("can not compile path pattern: {path:?}")]
    Compile {
        path: Box<str>,
        #[source]
        source: regex::Error,
    },

    #[error("can not encode query string")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("`{action}` can only be declared inside a resource")]
    NotInResource { action: Box<str> },
}

impl Error {
    pub(crate) fn not_defined(name: &str) -> Self {
        Self::RouteNotDefined { name: name.into() }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
