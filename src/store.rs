use deferred_render::prelude::*;

use crate::config::DemoConfig;

/// Store handed to every loader of the demo.
///
/// Loaders read the configured latency from it and record each resolution,
/// the way a real application would register what a lazily loaded page brings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoStore {
    pub config: DemoConfig,
    pub resolved_loads: Signal<u32>,
}

impl DemoStore {
    pub fn record_resolution(mut self) {
        self.resolved_loads += 1;
    }
}

pub fn use_demo_store_provider(config: DemoConfig) -> DemoStore {
    let resolved_loads = use_signal(|| 0);
    use_context_provider(|| DemoStore {
        config,
        resolved_loads,
    })
}
