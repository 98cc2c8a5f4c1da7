use std::borrow::Cow;

use serde::Serialize;
use waymark::{Error, Inflector, Routes, ToParam};

fn blog() -> Routes {
    let mut routes = Routes::new();
    routes.map("home", "/");
    routes.resources("users", |users| {
        users.resources("posts", |_| {});
    });
    routes
}

#[test]
fn substitutes_values_in_order() {
    let routes = blog();
    assert_eq!(
        routes.path_for("edit_user_post", &[&1, &2]).unwrap(),
        "/users/1/posts/2/edit"
    );
    assert_eq!(routes.path_for("user_posts", &[&"ann"]).unwrap(), "/users/ann/posts");
    assert_eq!(routes.path_for("users", &[]).unwrap(), "/users");
}

#[test]
fn too_few_values() {
    let routes = blog();
    match routes.path_for("user_post", &[&1]) {
        Err(Error::MissingParam { route, key }) => {
            assert_eq!(&*route, "user_post");
            assert_eq!(&*key, "id");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn too_many_values() {
    let routes = blog();
    match routes.path_for("user_post", &[&1, &2, &3]) {
        Err(Error::ExcessParams {
            expected, given, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(given, 3);
        }
        other => panic!("unexpected: {:?}", other),
    }
    assert!(routes.path_for("home", &[&1]).is_err());
}

#[test]
fn undefined_route() {
    let routes = blog();
    for name in ["missing", ":missing"] {
        match routes.path_for(name, &[]) {
            Err(Error::RouteNotDefined { name }) => assert_eq!(&*name, "missing"),
            other => panic!("unexpected: {:?}", other),
        }
    }
    let err = routes.resolve("missing").unwrap_err();
    assert_eq!(err.to_string(), "the route `missing` is not defined");
}

#[test]
fn values_fill_exactly_one_segment() {
    let routes = blog();
    let route = routes.resolve("user_post").unwrap();
    assert_eq!(route.arity(), 2);

    let path = route.to_path(&[&"a b", &"a/b?c#d"]).unwrap();
    assert_eq!(path, "/users/a%20b/posts/a%2Fb%3Fc%23d");
    assert!(route.is_match(&path));

    let caps = route.matches(&path).unwrap();
    let values: Vec<&str> = caps.values().collect();
    assert_eq!(values, ["a%20b", "a%2Fb%3Fc%23d", "post", "show"]);
}

#[derive(Serialize)]
struct Page {
    page: u32,
    sort: &'static str,
}

#[test]
fn query_string() {
    let routes = blog();
    assert_eq!(
        routes
            .path_for_with_query("users", &[], &Page { page: 2, sort: "name" })
            .unwrap(),
        "/users?page=2&sort=name"
    );
    assert_eq!(
        routes
            .path_for_with_query("home", &[], &[("q", "rust lang")][..])
            .unwrap(),
        "/?q=rust+lang"
    );
    let empty: Vec<(&str, &str)> = Vec::new();
    assert_eq!(
        routes.path_for_with_query("user", &[&5], &empty).unwrap(),
        "/users/5"
    );
}

struct Post {
    slug: String,
}

impl ToParam for Post {
    fn to_param(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.slug)
    }
}

#[test]
fn custom_param_type() {
    let routes = blog();
    let post = Post {
        slug: "hello-world".into(),
    };
    assert_eq!(
        routes.path_for("user_post", &[&7, &post]).unwrap(),
        "/users/7/posts/hello-world"
    );
}

#[test]
fn later_declaration_wins() {
    let mut routes = Routes::new();
    routes.map("about", "about");
    routes.map("about", "info");
    assert_eq!(routes.registry().len(), 1);
    assert_eq!(routes.route_for("about").unwrap(), "/info");
}

#[test]
fn generation_is_repeatable() {
    let routes = blog();
    let first = routes.path_for("edit_user_post", &[&1, &2]).unwrap();
    let second = routes.path_for("edit_user_post", &[&1, &2]).unwrap();
    assert_eq!(first, second);
    assert_eq!(routes.route_for("edit_user_post").unwrap(), "/users/:user_id/posts/:id/edit");

    let again = blog();
    assert_eq!(routes.dump_routes(), again.dump_routes());
    for route in routes.registry().iter() {
        let twin = again.resolve(route.full_name()).unwrap();
        assert_eq!(route.as_str(), twin.as_str());
        assert_eq!(route.capture_keys(), twin.capture_keys());
    }
}

#[test]
fn generated_paths_match_their_route() {
    let routes = blog();
    let route = routes.resolve("edit_user_post").unwrap();
    let path = route.to_path(&[&"u1", &"p9"]).unwrap();
    let caps = route.matches(&path).unwrap();
    assert_eq!(caps.get("user_id"), Some("u1"));
    assert_eq!(caps.get("id"), Some("p9"));
    assert_eq!(caps.get("action"), Some("edit"));
}

#[test]
fn dump_lists_every_route() {
    let mut routes = Routes::new();
    routes.map("home", "/");
    routes.resources("posts", |_| {});
    let expected = "\
home       /
post       /posts/:id
posts      /posts
new_post   /posts/new
edit_post  /posts/:id/edit
";
    assert_eq!(routes.dump_routes(), expected);
}

struct Verbatim;

impl Inflector for Verbatim {
    fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Owned(format!("one_{}", word))
    }
}

#[test]
fn custom_inflector() {
    let mut routes = Routes::new().with_inflector(Verbatim);
    routes.resources("news", |news| {
        news.resources("items", |_| {});
    });
    assert_eq!(routes.route_for("one_news").unwrap(), "/news/:id");
    assert_eq!(
        routes.route_for("one_news_items").unwrap(),
        "/news/:one_news_id/items"
    );
}
