use deferred_render::prelude::*;

#[derive(Props, Clone, PartialEq, Default)]
pub struct GreetingProps {
    #[props(into, default)]
    pub name: CCStr,
}

#[allow(non_snake_case)]
pub fn Greeting(props: GreetingProps) -> Element {
    let mut waves = use_signal(|| 0u32);
    let name = if props.name.is_empty() {
        "stranger"
    } else {
        props.name.as_ref()
    };

    rsx! {
        div {
            h2 { "Hello, {name}!" }
            button { onclick: move |_| waves += 1, "Wave back" }
            if waves() > 0 {
                p { "You waved {waves} time(s)." }
            }
        }
    }
}
