pub mod deferred;
pub mod utils;

pub mod prelude {
    pub use super::deferred::prelude::*;
    pub use super::utils::CCStr;
    pub use dioxus::prelude::*;
}
