use dioxus::prelude::*;

use super::{
    loader::Loader,
    slot::{DeferredSlot, DeferredStatus, Settled, View},
};
use crate::utils::CCStr;

/// Runs `load` on mount and every time a *different* loader is passed, and
/// exposes the outcome as a [Deferred] handle.
///
/// This is the engine behind `DeferredRenderer`, usable directly when a
/// component wants to decide itself how to present the resolved unit:
/// 1. The slot is emptied synchronously when a new load starts
/// 2. The load runs as a task of the calling scope, the superseded task is cancelled
/// 3. An outcome is only applied if it belongs to the latest load and the scope is still alive
///
/// Between the render that receives a new loader and the start of its load,
/// the handle already reports the placeholder.
///
/// The `store` is captured on the first render; later values are ignored.
pub fn use_deferred<S, U>(load: Loader<S, U>, store: Option<S>) -> Deferred<U>
where
    S: Clone + 'static,
    U: 'static,
{
    let mut slot = use_signal(DeferredSlot::<U>::default);
    let mut task = use_signal(|| None::<Task>);
    let mut started = use_hook(|| CopyValue::new(None::<Loader<S, U>>));
    let store = use_hook(move || store);
    let superseded = !matches!(&*started.peek(), Some(current) if *current == load);

    use_effect(use_reactive((&load,), move |(load,)| {
        started.set(Some(load.clone()));
        let ticket = slot.write().begin_load();
        if let Some(previous) = task.write().take() {
            log::debug!("use_deferred - cancelling superseded load");
            previous.cancel();
        }
        log::debug!("use_deferred - load #{} start", ticket.generation());

        // called from the task so that signals read by the loader do not
        // subscribe this effect
        let store = store.clone();
        let new_task = spawn(async move {
            let outcome = load.call(store).await;
            match slot.try_peek().map(|slot| slot.accepts(ticket)) {
                Ok(true) => (),
                Ok(false) => {
                    log::debug!("use_deferred - load #{} is stale", ticket.generation());
                    return;
                }
                Err(_) => {
                    log::warn!(
                        "use_deferred - load #{} resolved after its scope was dropped",
                        ticket.generation()
                    );
                    return;
                }
            }
            let Ok(mut slot) = slot.try_write() else {
                log::warn!(
                    "use_deferred - load #{} resolved after its scope was dropped",
                    ticket.generation()
                );
                return;
            };
            match slot.settle(ticket, outcome) {
                Settled::Applied => {
                    log::debug!("use_deferred - load #{} applied", ticket.generation())
                }
                Settled::Rejected => log::error!(
                    "use_deferred - load #{} rejected: {}",
                    ticket.generation(),
                    slot.last_error().map(CCStr::as_ref).unwrap_or_default()
                ),
                Settled::Stale => {
                    log::debug!("use_deferred - load #{} is stale", ticket.generation())
                }
                Settled::TornDown => log::warn!(
                    "use_deferred - load #{} resolved after teardown",
                    ticket.generation()
                ),
            }
        });
        task.set(Some(new_task));
    }));

    use_drop(move || {
        if let Ok(mut slot) = slot.try_write() {
            slot.teardown();
        }
        log::debug!("use_deferred - dropped");
    });

    Deferred { slot, superseded }
}

/// Handle on the state of a [use_deferred] load.
///
/// Like any signal, reading it from a component body subscribes that
/// component to its changes.
pub struct Deferred<U: 'static> {
    slot: Signal<DeferredSlot<U>>,
    superseded: bool,
}
impl<U> PartialEq for Deferred<U> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.superseded == other.superseded
    }
}
impl<U: 'static> Clone for Deferred<U> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<U: 'static> Copy for Deferred<U> {}

impl<U: 'static> Deferred<U> {
    pub fn status(&self) -> DeferredStatus {
        let slot = self.slot.read();
        if self.superseded {
            return DeferredStatus::Pending;
        }
        slot.status()
    }

    /// `true` once the current load either resolved or was rejected.
    pub fn finished(&self) -> bool {
        self.status() != DeferredStatus::Pending
    }

    pub fn generation(&self) -> u64 {
        self.slot.read().generation()
    }

    pub fn last_error(&self) -> Option<CCStr> {
        let slot = self.slot.read();
        if self.superseded {
            return None;
        }
        slot.last_error().cloned()
    }
}

impl<U: Clone + 'static> Deferred<U> {
    pub fn unit(&self) -> Option<U> {
        match self.view() {
            View::Loaded(u) => Some(u),
            View::Placeholder => None,
        }
    }

    pub fn view(&self) -> View<U> {
        // read before answering so the caller stays subscribed
        let slot = self.slot.read();
        if self.superseded {
            return View::Placeholder;
        }
        slot.view().cloned()
    }
}
