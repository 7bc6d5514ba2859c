use deferred_render::prelude::*;

pub mod custom_render;
pub mod failing;
pub mod greeting;
pub mod main_layout;
pub mod swap;

#[component]
fn TitledView(title: CCStr, subtitle: CCStr, children: Element) -> Element {
    rsx! {
        div {
            h1 { style: "margin-bottom: 0;", "{title}" }
            p { style: "color: gray; margin-top: 4px;", "{subtitle}" }
        }
        div { style: "margin-top: 16px;", {children} }
    }
}

#[component]
fn Placeholder(text: CCStr) -> Element {
    rsx! {
        p { style: "color: gray; font-style: italic;", "{text}" }
    }
}
