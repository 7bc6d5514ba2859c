/// What a [Loader](super::loader::Loader) future yields once it resolves.
///
/// A loader either hands back the renderable unit directly, or a module-like
/// wrapper exposing it under a conventional `default` field. Both shapes are
/// rendered the same way: [ResolvedModule::into_unit] unwraps the `default`
/// field when there is one.
///
/// # Examples
///
/// ```rust
/// use deferred_render::prelude::*;
///
/// let bare = ResolvedModule::Unit(7);
/// let wrapped = ResolvedModule::Module { default: 7 };
/// assert_eq!(bare.into_unit(), wrapped.into_unit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedModule<U> {
    /// The renderable unit itself
    Unit(U),
    /// A wrapper exposing the renderable unit under `default`
    Module { default: U },
}

impl<U> ResolvedModule<U> {
    /// Extracts the renderable unit, preferring the `default` field.
    #[inline(always)]
    pub fn into_unit(self) -> U {
        match self {
            ResolvedModule::Unit(u) => u,
            ResolvedModule::Module { default } => default,
        }
    }
}

impl<U> From<U> for ResolvedModule<U> {
    #[inline(always)]
    fn from(value: U) -> Self {
        ResolvedModule::Unit(value)
    }
}
