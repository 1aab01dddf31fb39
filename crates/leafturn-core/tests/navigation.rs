//! End-to-end navigation scenarios for the direction classifier.

use leafturn_core::{
    Direction, DirectionCell, DirectionClassifier, NavigationEvent, NavigationHook,
    NavigationSettings, RouteCategory, RouteClassifier,
};

fn observer(base_path: &str) -> DirectionClassifier {
    DirectionClassifier::new(RouteClassifier::new(base_path, "blog"), DirectionCell::new())
}

#[test]
fn landing_to_blog_is_forward() {
    let observer = observer("/");
    observer.on_navigate("/", "/blog");
    assert_eq!(observer.current_direction(), Direction::Forward);
}

#[test]
fn blog_post_to_landing_is_back() {
    let observer = observer("/");
    observer.on_navigate("/blog/my-post", "/");
    assert_eq!(observer.current_direction(), Direction::Back);
}

#[test]
fn blog_to_blog_defaults_forward() {
    let observer = observer("/");
    observer.on_navigate("/blog/my-post", "/");
    observer.on_navigate("/blog/post-a", "/blog/post-b");
    assert_eq!(observer.current_direction(), Direction::Forward);
}

#[test]
fn initial_load_defaults_forward() {
    let observer = observer("/");
    observer.on_navigate("/blog/x", "/");
    observer.on_navigate("", "/blog");
    assert_eq!(observer.current_direction(), Direction::Forward);
}

#[test]
fn other_to_blog_defaults_forward() {
    let observer = observer("/");
    observer.on_navigate("/about", "/blog");
    assert_eq!(observer.current_direction(), Direction::Forward);
}

#[test]
fn stripped_base_counts_as_landing() {
    let observer = observer("/app/");
    observer.on_navigate("/app", "/app/blog/x");
    assert_eq!(observer.current_direction(), Direction::Forward);

    observer.on_navigate("/app/blog/x", "/app");
    assert_eq!(observer.current_direction(), Direction::Back);
}

#[test]
fn repeated_navigation_is_idempotent() {
    let pairs = [
        ("/", "/blog"),
        ("/blog/a", "/"),
        ("/blog/a", "/blog/b"),
        ("", ""),
        ("/x", "/y"),
    ];

    for (from, to) in pairs {
        let once = observer("/");
        once.on_navigate(from, to);

        let twice = observer("/");
        twice.on_navigate(from, to);
        twice.on_navigate(from, to);

        assert_eq!(once.current_direction(), twice.current_direction());
    }
}

#[test]
fn classification_is_total() {
    let routes = RouteClassifier::default();
    let paths = [
        "",
        "/",
        "//",
        "blog",
        "/blog",
        "/blog/",
        "/BLOG",
        "/über/blog",
        "?q=1",
        "#top",
        "/blog/post?draft=true",
    ];

    for path in paths {
        let category = routes.classify(path);
        assert!(matches!(
            category,
            RouteCategory::Landing | RouteCategory::Blog | RouteCategory::Other
        ));
    }
}

#[test]
fn every_prefixed_path_is_blog() {
    for base in ["/", "/app/", "/a/b/"] {
        let routes = RouteClassifier::new(base, "blog");
        for suffix in ["", "/", "/post", "-archive", "/2024/01/hello"] {
            let path = format!("{base}blog{suffix}");
            assert_eq!(routes.classify(&path), RouteCategory::Blog, "{path}");
        }
    }
}

#[test]
fn hook_and_direct_call_agree() {
    let via_hook = observer("/");
    let direct = observer("/");

    via_hook.before_navigate(&NavigationEvent::new("/blog/p", "/"));
    direct.on_navigate("/blog/p", "/");

    assert_eq!(via_hook.current_direction(), direct.current_direction());
}

#[test]
fn settings_build_a_working_observer() {
    let settings = NavigationSettings {
        base_path: "/site/".to_string(),
        blog_segment: "journal".to_string(),
        ..NavigationSettings::default()
    };
    let cell = DirectionCell::new();
    let observer = settings.direction_classifier(cell.clone());

    observer.on_navigate("/site/journal/entry", "/site");
    assert_eq!(cell.get(), Direction::Back);
}

#[test]
fn readers_on_other_threads_see_writes() {
    let observer = observer("/");
    let reader = observer.cell();

    observer.on_navigate("/blog", "/");
    let seen = std::thread::spawn(move || reader.get())
        .join()
        .expect("reader thread");

    assert_eq!(seen, Direction::Back);
}
