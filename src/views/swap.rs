use deferred_render::prelude::*;

use super::{Placeholder, TitledView};
use crate::{
    pages::{weekly_report_loader, yearly_report_loader, ReportProps},
    store::DemoStore,
};

#[component]
pub fn SwapView() -> Element {
    log::debug!("SwapView Rendered");

    let store = use_context::<DemoStore>();
    let weekly = use_hook(weekly_report_loader);
    let yearly = use_hook(yearly_report_loader);
    let mut show_weekly = use_signal(|| true);

    let (load, period) = if show_weekly() {
        (weekly, "Weekly")
    } else {
        (yearly, "Yearly")
    };

    rsx! {
        TitledView {
            title: "Swap loaders",
            subtitle: "Every swap goes back to the placeholder; a load overtaken by a newer one is discarded.",
            button { onclick: move |_| show_weekly.set(!show_weekly()), "Swap" }
            DeferredRenderer {
                load,
                store,
                props: ReportProps { period: period.into() },
                Placeholder { text: "Loading the {period} report..." }
            }
        }
    }
}
