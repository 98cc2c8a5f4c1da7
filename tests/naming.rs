use waymark::{Error, Routes};

#[test]
fn root_route() {
    let mut routes = Routes::new();
    routes.map("home", "/");
    assert_eq!(routes.route_for("home").unwrap(), "/");
    assert_eq!(routes.path_for("home", &[]).unwrap(), "/");
}

#[test]
fn route_named_after_its_path() {
    let mut routes = Routes::new();
    routes.map_name("dashboard");
    assert_eq!(routes.route_for("dashboard").unwrap(), "/dashboard");
}

#[test]
fn string_and_symbol_names_are_equivalent() {
    let mut routes = Routes::new();
    routes.map(":dashboard", "dashboard");
    assert_eq!(routes.route_for("dashboard").unwrap(), "/dashboard");
    assert_eq!(routes.route_for(":dashboard").unwrap(), "/dashboard");
}

#[test]
fn path_only_namespace() {
    let mut routes = Routes::new();
    routes.namespace("/admin", |admin| {
        admin.map_name("dashboard");
        admin.map("home", "/");
    });
    assert_eq!(routes.route_for("dashboard").unwrap(), "/admin/dashboard");
    assert_eq!(routes.route_for("home").unwrap(), "/admin");
}

#[test]
fn named_namespace() {
    let mut routes = Routes::new();
    routes.namespace(":admin", |admin| {
        admin.map_name("dashboard");
    });
    assert_eq!(routes.route_for("admin_dashboard").unwrap(), "/admin/dashboard");
    assert!(matches!(
        routes.resolve("dashboard"),
        Err(Error::RouteNotDefined { .. })
    ));
}

#[test]
fn nested_namespaces() {
    let mut routes = Routes::new();
    routes.namespace("/blog", |blog| {
        blog.namespace("admin", |admin| {
            admin.namespace("auth", |auth| {
                auth.map_name("logout");
            });
        });
    });
    assert_eq!(
        routes.route_for("admin_auth_logout").unwrap(),
        "/blog/admin/auth/logout"
    );

    let mut routes = Routes::new();
    routes.namespace("blog", |blog| {
        blog.namespace("admin", |admin| {
            admin.namespace("auth", |auth| {
                auth.map_name("logout");
            });
        });
    });
    assert_eq!(
        routes.route_for("blog_admin_auth_logout").unwrap(),
        "/blog/admin/auth/logout"
    );
}

#[test]
fn draws_accumulate() {
    let mut routes = Routes::new();
    routes.map("home", "/");
    routes.namespace("admin", |admin| {
        admin.map("home", "/");
    });
    assert_eq!(routes.registry().len(), 2);
    assert_eq!(routes.scopes().len(), 2);
    assert_eq!(routes.route_for("admin_home").unwrap(), "/admin");
}

#[test]
fn synthetic_captures() {
    let mut routes = Routes::new();
    routes.namespace("admin", |admin| {
        admin.map_name("dashboard");
        admin.resources("users", |_| {});
    });

    let route = routes.resolve("admin_dashboard").unwrap();
    let caps = route.matches("/admin/dashboard").unwrap();
    assert_eq!(caps.get("namespace"), Some("admin"));
    assert_eq!(caps.get("action"), Some("dashboard"));
    assert_eq!(caps.get("resource"), None);

    let route = routes.resolve("admin_user").unwrap();
    let caps = route.matches("/admin/users/9").unwrap();
    let pairs: Vec<_> = caps.iter().copied().collect();
    assert_eq!(
        pairs,
        [
            ("id", "9"),
            ("resource", "user"),
            ("namespace", "admin"),
            ("action", "show")
        ]
    );
    assert!(route.matches("/admin/users").is_none());
}

#[test]
fn path_keys_shadow_synthetic_ones() {
    let mut routes = Routes::new();
    routes.map("run", "/do/:action");
    let route = routes.resolve("run").unwrap();
    let keys: Vec<&str> = route.capture_keys().iter().map(|k| &**k).collect();
    assert_eq!(keys, ["action"]);
    let caps = route.matches("/do/jump").unwrap();
    assert_eq!(caps.get("action"), Some("jump"));
    assert_eq!(caps.len(), 1);
}
