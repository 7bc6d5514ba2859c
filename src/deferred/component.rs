use dioxus::prelude::*;

use super::{hook::use_deferred, loader::Loader, slot::View};

/// Properties a deferred unit can be mounted with.
///
/// `Default` provides the empty property set used when `DeferredRenderer`
/// receives no `props`.
pub trait UnitProps: Clone + PartialEq + Default + 'static {}
impl<T: Clone + PartialEq + Default + 'static> UnitProps for T {}

/// A store handed to loaders.
pub trait Store: Clone + PartialEq + 'static {}
impl<T: Clone + PartialEq + 'static> Store for T {}

/// Defers rendering of a component until its loader resolves.
///
/// On mount, and every time `load` is replaced by a different [Loader], the
/// loader is called with `store` and the placeholder `children` are shown
/// until it resolves. The resolved component is then:
/// - passed to `render` if given
/// - mounted with `props` (or `P::default()`) otherwise
///
/// A rejected load keeps the placeholder on screen; the rejection is logged.
///
/// # Parameters
///
/// * `load` - The loader of the component to render
/// * `store` - Passed to the loader, captured on mount
/// * `props` - Properties of the resolved component when using the default rendering
/// * `render` - Custom rendering of the resolved component
/// * `children` - Placeholder shown until the component is resolved
///
/// # Examples
///
/// ```rust,no_run
/// use deferred_render::prelude::*;
///
/// #[derive(Props, Clone, PartialEq, Default)]
/// struct ReportProps {
///     title: String,
/// }
///
/// fn Report(props: ReportProps) -> Element {
///     rsx! { h2 { "{props.title}" } }
/// }
///
/// #[component]
/// fn Dashboard() -> Element {
///     let load = use_hook(|| {
///         Loader::<(), Component<ReportProps>>::infallible(|_| async {
///             ResolvedModule::Module { default: Report as Component<ReportProps> }
///         })
///     });
///     rsx! {
///         DeferredRenderer {
///             load,
///             props: ReportProps { title: "Weekly".into() },
///             "Loading the report..."
///         }
///     }
/// }
/// ```
#[component]
pub fn DeferredRenderer<P: UnitProps, S: Store>(
    load: Loader<S, Component<P>>,
    store: Option<S>,
    props: Option<P>,
    render: Option<Callback<Component<P>, Element>>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let deferred = use_deferred(load, store);
    let generation = deferred.generation();

    match deferred.view() {
        View::Loaded(unit) => match render {
            Some(render) => render.call(unit),
            None => rsx! {
                MountedUnit::<P> {
                    key: "{generation}",
                    unit,
                    unit_props: props.unwrap_or_default(),
                }
            },
        },
        View::Placeholder => children,
    }
}

/// Mounts a resolved component in its own scope.
///
/// Keyed by load generation so that a newly resolved component never
/// inherits the hooks of the previous one.
#[component]
fn MountedUnit<P: UnitProps>(unit: Component<P>, unit_props: P) -> Element {
    unit(unit_props)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc, time::Duration};

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use tokio::sync::Notify;

    use super::*;
    use crate::{
        deferred::hook::use_deferred,
        utils::{CCStr, EqCheapClone},
    };

    type LabelLoader = Loader<(), Component<LabelProps>>;

    #[derive(Props, Clone, PartialEq, Default)]
    struct LabelProps {
        #[props(into, default)]
        text: CCStr,
    }

    #[allow(non_snake_case)]
    fn Alpha(props: LabelProps) -> Element {
        rsx! { span { "ALPHA[{props.text}]" } }
    }

    #[allow(non_snake_case)]
    fn Beta(props: LabelProps) -> Element {
        rsx! { span { "BETA[{props.text}]" } }
    }

    /// Resolves to `unit` once `gate` is notified, counting its calls.
    fn gated_loader(
        gate: Rc<Notify>,
        calls: Rc<Cell<u32>>,
        unit: Component<LabelProps>,
    ) -> LabelLoader {
        Loader::infallible(move |_| {
            calls.set(calls.get() + 1);
            let gate = gate.clone();
            async move {
                gate.notified().await;
                unit
            }
        })
    }

    /// Renders until the dom stays idle, then returns its html.
    async fn render_idle(dom: &mut VirtualDom) -> String {
        for _ in 0..64 {
            if tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
        dioxus_ssr::render(dom)
    }

    #[component]
    fn DefaultRenderHarness(load: LabelLoader) -> Element {
        rsx! {
            DeferredRenderer { load, "waiting" }
        }
    }

    #[component]
    fn PropsHarness(load: LabelLoader, text: CCStr) -> Element {
        rsx! {
            DeferredRenderer { load, props: LabelProps { text }, "waiting" }
        }
    }

    #[component]
    fn CustomRenderHarness(load: LabelLoader) -> Element {
        rsx! {
            DeferredRenderer {
                load,
                render: move |unit: Component<LabelProps>| rsx! {
                    div { "custom:", {unit(LabelProps { text: "inline".into() })} }
                },
                "waiting"
            }
        }
    }

    #[component]
    fn SwapHarness(alpha: LabelLoader, beta: LabelLoader, swap: EqCheapClone<Notify>) -> Element {
        let mut use_beta = use_signal(|| false);
        use_hook(move || {
            spawn(async move {
                swap.notified().await;
                use_beta.set(true);
            })
        });
        let load = if use_beta() { beta } else { alpha };

        rsx! {
            DeferredRenderer { load, "waiting" }
        }
    }

    #[component]
    fn UnmountHarness(load: LabelLoader, unmount: EqCheapClone<Notify>) -> Element {
        let mut mounted = use_signal(|| true);
        use_hook(move || {
            spawn(async move {
                unmount.notified().await;
                mounted.set(false);
            })
        });

        rsx! {
            if mounted() {
                DeferredRenderer { load, "waiting" }
            } else {
                "gone"
            }
        }
    }

    #[component]
    fn StatusHarness(load: LabelLoader) -> Element {
        let deferred = use_deferred(load.clone(), None);
        let status = deferred.status();
        let error = deferred.last_error().unwrap_or_default();
        let loaded = deferred.unit().is_some();
        let finished = deferred.finished();

        rsx! {
            DeferredRenderer { load, "waiting" }
            p { "{status:?}|{error}|{loaded}|{finished}" }
        }
    }

    #[component]
    fn SignalReadingHarness(calls: EqCheapClone<Cell<u32>>) -> Element {
        let mut counter = use_signal(|| 0u32);
        let load = use_hook(move || {
            LabelLoader::infallible(move |_| {
                let _seen = counter();
                calls.set(calls.get() + 1);
                async { Alpha as Component<LabelProps> }
            })
        });
        use_hook(move || {
            spawn(async move {
                counter += 1;
                tokio::task::yield_now().await;
                counter += 1;
            })
        });

        rsx! {
            DeferredRenderer { load, "waiting" }
        }
    }

    #[tokio::test]
    async fn placeholder_until_resolved_then_props_reach_the_unit() {
        let gate = Rc::new(Notify::new());
        let calls = Rc::new(Cell::new(0));
        let load = gated_loader(gate.clone(), calls.clone(), Alpha);
        let mut dom = VirtualDom::new_with_props(
            PropsHarness,
            PropsHarnessProps {
                load,
                text: "from props".into(),
            },
        );
        dom.rebuild_in_place();

        let html = render_idle(&mut dom).await;
        assert!(html.contains("waiting"), "{html}");
        assert!(!html.contains("ALPHA"), "{html}");

        gate.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("ALPHA[from props]"), "{html}");
        assert!(!html.contains("waiting"), "{html}");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn missing_props_fall_back_to_default() {
        let gate = Rc::new(Notify::new());
        gate.notify_one();
        let load = gated_loader(gate, Rc::new(Cell::new(0)), Alpha);
        let mut dom =
            VirtualDom::new_with_props(DefaultRenderHarness, DefaultRenderHarnessProps { load });
        dom.rebuild_in_place();

        let html = render_idle(&mut dom).await;
        assert!(html.contains("ALPHA[]"), "{html}");
    }

    #[tokio::test]
    async fn custom_render_receives_the_resolved_unit() {
        let gate = Rc::new(Notify::new());
        gate.notify_one();
        let load = gated_loader(gate, Rc::new(Cell::new(0)), Alpha);
        let mut dom =
            VirtualDom::new_with_props(CustomRenderHarness, CustomRenderHarnessProps { load });
        dom.rebuild_in_place();

        let html = render_idle(&mut dom).await;
        assert!(html.contains("custom:"), "{html}");
        assert!(html.contains("ALPHA[inline]"), "{html}");
    }

    #[tokio::test]
    async fn swapping_loaders_shows_the_placeholder_then_the_new_unit() {
        let alpha_gate = Rc::new(Notify::new());
        let beta_gate = Rc::new(Notify::new());
        let swap = Rc::new(Notify::new());
        let alpha_calls = Rc::new(Cell::new(0));
        let beta_calls = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            SwapHarness,
            SwapHarnessProps {
                alpha: gated_loader(alpha_gate.clone(), alpha_calls.clone(), Alpha),
                beta: gated_loader(beta_gate.clone(), beta_calls.clone(), Beta),
                swap: swap.clone().into(),
            },
        );
        dom.rebuild_in_place();

        alpha_gate.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("ALPHA[]"), "{html}");

        swap.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("waiting"), "{html}");
        assert!(!html.contains("ALPHA"), "{html}");

        beta_gate.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("BETA[]"), "{html}");
        assert_eq!((alpha_calls.get(), beta_calls.get()), (1, 1));
    }

    #[tokio::test]
    async fn swapping_away_from_a_pending_load_discards_it() {
        let alpha_gate = Rc::new(Notify::new());
        let beta_gate = Rc::new(Notify::new());
        let swap = Rc::new(Notify::new());
        let mut dom = VirtualDom::new_with_props(
            SwapHarness,
            SwapHarnessProps {
                alpha: gated_loader(alpha_gate.clone(), Rc::new(Cell::new(0)), Alpha),
                beta: gated_loader(beta_gate.clone(), Rc::new(Cell::new(0)), Beta),
                swap: swap.clone().into(),
            },
        );
        dom.rebuild_in_place();

        swap.notify_one();
        render_idle(&mut dom).await;
        alpha_gate.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("waiting"), "{html}");
        assert!(!html.contains("ALPHA"), "{html}");

        beta_gate.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("BETA[]"), "{html}");
    }

    #[tokio::test]
    async fn unmounting_while_pending_is_quiet() {
        let gate = Rc::new(Notify::new());
        let unmount = Rc::new(Notify::new());
        let mut dom = VirtualDom::new_with_props(
            UnmountHarness,
            UnmountHarnessProps {
                load: gated_loader(gate.clone(), Rc::new(Cell::new(0)), Alpha),
                unmount: unmount.clone().into(),
            },
        );
        dom.rebuild_in_place();

        unmount.notify_one();
        render_idle(&mut dom).await;
        gate.notify_one();
        let html = render_idle(&mut dom).await;
        assert!(html.contains("gone"), "{html}");
        assert!(!html.contains("ALPHA"), "{html}");
    }

    #[tokio::test]
    async fn rejected_load_keeps_the_placeholder() {
        let load: LabelLoader =
            Loader::new(|_| async { Err::<Component<LabelProps>, _>("chunk missing") });
        let mut dom = VirtualDom::new_with_props(StatusHarness, StatusHarnessProps { load });
        dom.rebuild_in_place();

        let html = render_idle(&mut dom).await;
        assert!(html.contains("waiting"), "{html}");
        assert!(html.contains("Failed|chunk missing|false|true"), "{html}");
    }

    #[tokio::test]
    async fn signals_read_by_the_loader_do_not_restart_it() {
        let calls = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            SignalReadingHarness,
            SignalReadingHarnessProps {
                calls: calls.clone().into(),
            },
        );
        dom.rebuild_in_place();

        let html = render_idle(&mut dom).await;
        assert!(html.contains("ALPHA[]"), "{html}");
        assert_eq!(calls.get(), 1);
    }
}
