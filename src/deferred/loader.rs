use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture};

use super::module::ResolvedModule;
use crate::utils::{CCStr, CheapClone, EqCheapClone};

/// The outcome of a load: the resolved module, or the rejection message.
pub type LoadResult<U> = Result<ResolvedModule<U>, CCStr>;

/// The deferred value returned by a [Loader].
pub type LoadFuture<U> = LocalBoxFuture<'static, LoadResult<U>>;

type LoaderFn<S, U> = dyn Fn(Option<S>) -> LoadFuture<U>;

/// An asynchronous loader of a renderable unit.
///
/// A `Loader` wraps a function of an optional store returning a future of
/// the [ResolvedModule]. Loaders compare by identity: a clone is equal to its
/// source, while two loaders built from identical closures are not. This is
/// what lets `DeferredRenderer` restart a load only when it is handed a
/// *different* loader.
///
/// # Examples
///
/// ```rust
/// use deferred_render::prelude::*;
///
/// let loader: Loader<(), &'static str> =
///     Loader::new(|_store| async { Ok::<_, CCStr>("hello") });
/// assert_eq!(loader, loader.clone());
/// ```
pub struct Loader<S: 'static, U: 'static> {
    f: EqCheapClone<LoaderFn<S, U>>,
}

impl<S: 'static, U: 'static> Loader<S, U> {
    /// Builds a loader from an async function of the store.
    ///
    /// The future may resolve to anything convertible into a [ResolvedModule]
    /// (a bare unit or a `ResolvedModule` itself). Any displayable error is
    /// kept as the rejection message.
    pub fn new<F, Fut, M, E>(f: F) -> Self
    where
        F: Fn(Option<S>) -> Fut + 'static,
        Fut: Future<Output = Result<M, E>> + 'static,
        M: Into<ResolvedModule<U>> + 'static,
        E: core::fmt::Display + 'static,
    {
        let f: CheapClone<LoaderFn<S, U>> = CheapClone::new(move |store| {
            f(store)
                .map(|result| match result {
                    Ok(module) => Ok(module.into()),
                    Err(e) => Err(CCStr::from(e.to_string())),
                })
                .boxed_local()
        });
        Self { f: f.into() }
    }

    /// Builds a loader whose future cannot fail.
    pub fn infallible<F, Fut, M>(f: F) -> Self
    where
        F: Fn(Option<S>) -> Fut + 'static,
        Fut: Future<Output = M> + 'static,
        M: Into<ResolvedModule<U>> + 'static,
    {
        Self::new(move |store| f(store).map(Ok::<M, core::convert::Infallible>))
    }

    /// Invokes the loader with the given store, returning the deferred value.
    pub fn call(&self, store: Option<S>) -> LoadFuture<U> {
        (*self.f)(store)
    }
}

impl<S: 'static, U: 'static> Clone for Loader<S, U> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}
impl<S: 'static, U: 'static> PartialEq for Loader<S, U> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}
impl<S: 'static, U: 'static> core::fmt::Debug for Loader<S, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader").finish_non_exhaustive()
    }
}
