use deferred_render::prelude::*;

#[derive(Props, Clone, PartialEq, Default)]
pub struct ReportProps {
    #[props(into, default)]
    pub period: CCStr,
}

#[allow(non_snake_case)]
pub fn Report(props: ReportProps) -> Element {
    log::debug!("Report {} Rendered", props.period);

    use_drop(|| log::debug!("Report Dropped"));

    rsx! {
        article {
            h2 { "{props.period} report" }
            p { "Everything is on track." }
        }
    }
}
