use deferred_render::utils::log_error_ccstr;

const DELAY_VAR: &str = "DEFERRED_DEMO_DELAY_MS";
const FAIL_VAR: &str = "DEFERRED_DEMO_FAIL";

/// Settings of the demo application, read from the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    /// Simulated latency of every loader
    pub load_delay_ms: u64,
    /// Make the greeting loader reject as well
    pub fail_greeting: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 1500,
            fail_greeting: false,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let load_delay_ms = lookup(DELAY_VAR)
            .and_then(|v| {
                v.trim()
                    .parse()
                    .map_err(|e| log_error_ccstr(format!("{DELAY_VAR}={v:?} ignored: {e}")))
                    .ok()
            })
            .unwrap_or(default.load_delay_ms);
        let fail_greeting = lookup(FAIL_VAR)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(default.fail_greeting);
        let config = Self {
            load_delay_ms,
            fail_greeting,
        };
        log::debug!("{config:?}");
        config
    }
}
