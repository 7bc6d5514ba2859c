use deferred_render::prelude::*;

use crate::{store::DemoStore, Route};

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    let store = use_context::<DemoStore>();

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        header { style: "display: flex; gap: 16px; padding: 8px 16px; border-bottom: 1px solid gray;",
            Link { to: Route::GreetingView {}, "Greeting" }
            Link { to: Route::SwapView {}, "Swap loaders" }
            Link { to: Route::CustomRenderView {}, "Custom render" }
            Link { to: Route::FailingView {}, "Failing load" }
            span { style: "margin-left: auto;",
                "Resolved loads: {store.resolved_loads}"
            }
        }
        main { style: "padding: 16px;", Outlet::<Route> {} }
    }
}
