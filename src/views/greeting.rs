use deferred_render::prelude::*;

use super::{Placeholder, TitledView};
use crate::{
    pages::{greeting_loader, GreetingProps},
    store::DemoStore,
};

#[component]
pub fn GreetingView() -> Element {
    log::debug!("GreetingView Rendered");

    let store = use_context::<DemoStore>();
    let load = use_hook(greeting_loader);

    rsx! {
        TitledView {
            title: "Greeting",
            subtitle: "The page is mounted with the given props once its loader resolves.",
            DeferredRenderer {
                load,
                store,
                props: GreetingProps {
                    name: "Ferris".into(),
                },
                Placeholder { text: "Loading the greeting..." }
            }
        }
    }
}
