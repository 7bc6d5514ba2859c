#![windows_subsystem = "windows"]
mod config;
mod pages;
mod store;
mod views;

use deferred_render::prelude::*;
use serde::{Deserialize, Serialize};

use config::DemoConfig;
use views::{
    custom_render::CustomRenderView, failing::FailingView, greeting::GreetingView,
    main_layout::MainLayout, swap::SwapView,
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        GreetingView {},
        #[route("/swap")]
        SwapView {},
        #[route("/custom")]
        CustomRenderView {},
        #[route("/failing")]
        FailingView {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &'static str = "Deferred Render";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    let config = use_hook(DemoConfig::from_env);
    _ = store::use_demo_store_provider(config);

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }

        div { id: "app", style: "font-family: sans-serif;", Router::<Route> {} }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1024, 768))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
