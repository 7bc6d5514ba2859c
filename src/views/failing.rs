use deferred_render::prelude::*;

use super::TitledView;
use crate::{pages::broken_loader, store::DemoStore};

#[component]
pub fn FailingView() -> Element {
    log::debug!("FailingView Rendered");

    let store = use_context::<DemoStore>();
    let load = use_hook(broken_loader);

    rsx! {
        TitledView {
            title: "Failing load",
            subtitle: "A rejected load leaves the placeholder in place. This one has none.",
            DeferredRenderer { load: load.clone(), store }
            LoadReport { load, store }
        }
    }
}

/// Tracks the same loader through [use_deferred] to display what happened.
#[component]
fn LoadReport(load: Loader<DemoStore, Component<()>>, store: DemoStore) -> Element {
    let deferred = use_deferred(load, Some(store));
    let status = deferred.status();
    let error = deferred.last_error();

    rsx! {
        p {
            "Status: {status:?}"
            if let Some(error) = error {
                " ({error})"
            }
        }
    }
}
