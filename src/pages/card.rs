use deferred_render::prelude::*;

#[derive(Props, Clone, PartialEq, Default)]
pub struct CardProps {
    #[props(into, default)]
    pub title: CCStr,
}

/// Stateless, so it can be called inline from a render callback.
#[allow(non_snake_case)]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        section { style: "border: 1px solid gray; border-radius: 6px; padding: 12px;",
            h3 { "{props.title}" }
        }
    }
}
