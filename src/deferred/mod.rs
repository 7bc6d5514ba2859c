//! # Deferred Module
//!
//! Renders a component only once an asynchronous loader has produced it.
//!
//! A [`Loader`](loader::Loader) is an async function of an optional store that resolves
//! to a [`ResolvedModule`](module::ResolvedModule): either the component itself or a
//! wrapper exposing it under `default`. [`DeferredRenderer`](component::DeferredRenderer)
//! shows its children as a placeholder until the loader resolves, then renders the
//! component. Handing it a different loader starts over from the placeholder.
//!
//! ## Core Concepts
//!
//! - [`DeferredSlot`](slot::DeferredSlot): framework-free state (empty or loaded) with a
//!   generation counter so that only the latest load is ever applied
//! - [`use_deferred`](hook::use_deferred): binds a slot to the Dioxus scope lifecycle
//! - [`DeferredRenderer`](component::DeferredRenderer): the component built on top of it
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use deferred_render::prelude::*;
//!
//! fn Settings(_: ()) -> Element {
//!     rsx! { "Settings" }
//! }
//!
//! #[component]
//! fn App() -> Element {
//!     let load = use_hook(|| {
//!         Loader::<(), Component<()>>::infallible(|_| async { Settings as Component<()> })
//!     });
//!     rsx! {
//!         DeferredRenderer { load, "Loading..." }
//!     }
//! }
//! ```

pub mod component;
pub mod hook;
pub mod loader;
pub mod module;
pub mod slot;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
    pub use super::component::{DeferredRenderer, Store, UnitProps};
    pub use super::hook::{use_deferred, Deferred};
    pub use super::loader::{LoadFuture, LoadResult, Loader};
    pub use super::module::ResolvedModule;
    pub use super::slot::{DeferredSlot, DeferredStatus, LoadTicket, Settled, View};
}
