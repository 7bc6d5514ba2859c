//! Components only reachable through a loader.

use deferred_render::prelude::*;

use deferred_render::utils::async_sleep;

use crate::store::DemoStore;

mod card;
mod greeting;
mod report;

pub use card::{Card, CardProps};
pub use greeting::{Greeting, GreetingProps};
pub use report::{Report, ReportProps};

pub type DemoLoader<P> = Loader<DemoStore, Component<P>>;

/// Waits for the configured latency, then records the resolution in the store.
async fn simulate_fetch(store: Option<DemoStore>, factor: u64) -> Result<DemoStore, CCStr> {
    let store = store.ok_or_else(|| CCStr::from("no store was provided to the loader"))?;
    async_sleep(store.config.load_delay_ms * factor).await;
    store.record_resolution();
    Ok(store)
}

pub fn greeting_loader() -> DemoLoader<GreetingProps> {
    Loader::new(|store| async move {
        let store = simulate_fetch(store, 1).await?;
        if store.config.fail_greeting {
            return Err(CCStr::from("greeting service disabled by configuration"));
        }
        Ok::<_, CCStr>(Greeting as Component<GreetingProps>)
    })
}

/// Resolves to a module exposing the report under `default`.
pub fn weekly_report_loader() -> DemoLoader<ReportProps> {
    Loader::new(|store| async move {
        simulate_fetch(store, 1).await?;
        Ok::<_, CCStr>(ResolvedModule::Module {
            default: Report as Component<ReportProps>,
        })
    })
}

/// Slower than [weekly_report_loader] so that swapping back and forth leaves
/// stale loads in flight.
pub fn yearly_report_loader() -> DemoLoader<ReportProps> {
    Loader::new(|store| async move {
        simulate_fetch(store, 3).await?;
        Ok::<_, CCStr>(ResolvedModule::Unit(Report as Component<ReportProps>))
    })
}

pub fn card_loader() -> DemoLoader<CardProps> {
    Loader::new(|store| async move {
        simulate_fetch(store, 1).await?;
        Ok::<_, CCStr>(Card as Component<CardProps>)
    })
}

pub fn broken_loader() -> DemoLoader<()> {
    Loader::new(|store| async move {
        simulate_fetch(store, 1).await?;
        Err::<Component<()>, _>(CCStr::from("the chunk could not be fetched"))
    })
}
