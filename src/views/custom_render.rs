use deferred_render::prelude::*;

use super::{Placeholder, TitledView};
use crate::{
    pages::{card_loader, CardProps},
    store::DemoStore,
};

#[component]
pub fn CustomRenderView() -> Element {
    log::debug!("CustomRenderView Rendered");

    let store = use_context::<DemoStore>();
    let load = use_hook(card_loader);

    rsx! {
        TitledView {
            title: "Custom render",
            subtitle: "The resolved component is handed to a render callback instead of being mounted.",
            DeferredRenderer {
                load,
                store,
                render: move |card: Component<CardProps>| rsx! {
                    div { style: "display: flex; gap: 8px;",
                        {card(CardProps { title: "First".into() })}
                        {card(CardProps { title: "Second".into() })}
                    }
                },
                Placeholder { text: "Loading the cards..." }
            }
        }
    }
}
