use std::sync::LazyLock;

use leafturn_core::NavigationSettings;
use leafturn_ui::{
    PageTransition, provide_site_navigation, use_navigation_direction, use_site_navigation,
};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Route, Router, Routes},
    hooks::use_params_map,
};

/// Site configuration validated and embedded by `build.rs`.
const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("OUT_DIR"), "/leafturn.toml"));

static SETTINGS: LazyLock<NavigationSettings> =
    LazyLock::new(|| NavigationSettings::from_embedded(EMBEDDED_CONFIG));

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let settings: &'static NavigationSettings = &SETTINGS;
    let navigation = provide_site_navigation(settings.clone());
    let router_base = settings.base_path.trim_end_matches('/').to_string();
    let blog: &'static str = settings.blog_segment.as_str();
    let layout = navigation.settings.layout_transition.clone();
    let layout_class = format!("leafturn-layout {}", layout.name);
    let layout_mode = layout.mode.as_str();

    view! {
      <Title text="Leafturn" />

      <Router base=router_base>
        <main class=layout_class data-mode=layout_mode>
          <PageTransition>
            <Routes fallback=|| view! { <NotFound /> }>
              <Route path=StaticSegment("") view=LandingPage />
              <Route path=StaticSegment(blog) view=BlogIndex />
              <Route path=(StaticSegment(blog), ParamSegment("slug")) view=BlogPost />
            </Routes>
          </PageTransition>
        </main>
      </Router>
    }
}

/// Absolute path of the blog section, optionally followed by a post slug.
fn blog_href(slug: Option<&str>) -> String {
    use_site_navigation().settings.blog_path(slug)
}

/// Renders the landing page.
#[component]
fn LandingPage() -> impl IntoView {
    view! {
      <section class="landing">
        <h1>"Leafturn"</h1>
        <p>"Notes, essays and the occasional experiment."</p>
        <A href=blog_href(None)>"Read the blog"</A>
      </section>
    }
}

/// Renders the blog index.
#[component]
fn BlogIndex() -> impl IntoView {
    let home = use_site_navigation().settings.base_path;

    view! {
      <section class="blog-index">
        <h1>"Blog"</h1>
        <ul>
          <li>
            <A href=blog_href(Some("hello-world"))>"Hello, world"</A>
          </li>
        </ul>
        <A href=home>"Home"</A>
      </section>
    }
}

/// Renders a single blog post.
#[component]
fn BlogPost() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let home = use_site_navigation().settings.base_path;
    let direction = use_navigation_direction();

    view! {
      <article class="blog-post" data-entered=move || direction.get().as_str()>
        <h1>{slug}</h1>
        <A href=blog_href(None)>"All posts"</A>
        <A href=home>"Home"</A>
      </article>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p>"Page not found."</p> }
}
