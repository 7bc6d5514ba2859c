use super::loader::LoadResult;
use crate::utils::CCStr;

/// Identifies one call to [DeferredSlot::begin_load].
///
/// A ticket is only honoured by [DeferredSlot::settle] while it is the latest
/// one issued by the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);
impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What [DeferredSlot::settle] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The unit was stored, the slot is now loaded
    Applied,
    /// The load was rejected, the slot stays empty
    Rejected,
    /// A newer load was started since this ticket was issued
    Stale,
    /// The slot was torn down, nothing may change anymore
    TornDown,
}

/// Coarse status of a slot, mostly useful for diagnostics and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredStatus {
    Pending,
    Loaded,
    Failed,
}

/// What should be rendered for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<T> {
    /// Nothing resolved yet: show the placeholder content, if any
    Placeholder,
    /// Render the resolved unit
    Loaded(T),
}

impl<T: Clone> View<&T> {
    pub fn cloned(self) -> View<T> {
        match self {
            View::Placeholder => View::Placeholder,
            View::Loaded(t) => View::Loaded(t.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SlotState<U> {
    Empty,
    Loaded(U),
}

/// The state of a deferred render, independent of any UI framework.
///
/// The slot is either empty or holds the resolved unit. Every
/// [begin_load](Self::begin_load) empties it and issues a new [LoadTicket];
/// an outcome is only applied if it carries the latest ticket and the slot has
/// not been [torn down](Self::teardown). A superseded load that lands late can
/// therefore never overwrite newer state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredSlot<U> {
    state: SlotState<U>,
    generation: u64,
    torn_down: bool,
    last_error: Option<CCStr>,
}

impl<U> Default for DeferredSlot<U> {
    fn default() -> Self {
        Self {
            state: SlotState::Empty,
            generation: 0,
            torn_down: false,
            last_error: None,
        }
    }
}

impl<U> DeferredSlot<U> {
    /// Empties the slot and issues the ticket of a new load.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = SlotState::Empty;
        self.last_error = None;
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Applies the outcome of the load identified by `ticket`, if still relevant.
    pub fn settle(&mut self, ticket: LoadTicket, outcome: LoadResult<U>) -> Settled {
        if self.torn_down {
            return Settled::TornDown;
        }
        if ticket.0 != self.generation {
            return Settled::Stale;
        }
        match outcome {
            Ok(module) => {
                self.state = SlotState::Loaded(module.into_unit());
                Settled::Applied
            }
            Err(e) => {
                self.last_error = Some(e);
                Settled::Rejected
            }
        }
    }

    /// Suppresses every later state change.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    /// `true` if [settle](Self::settle) would apply an outcome carrying `ticket`.
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        !self.torn_down && ticket.0 == self.generation
    }

    pub fn view(&self) -> View<&U> {
        match &self.state {
            SlotState::Empty => View::Placeholder,
            SlotState::Loaded(u) => View::Loaded(u),
        }
    }

    pub fn unit(&self) -> Option<&U> {
        match &self.state {
            SlotState::Empty => None,
            SlotState::Loaded(u) => Some(u),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SlotState::Loaded(_))
    }

    /// Number of loads started so far, `0` before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rejection message of the current load, if it failed.
    pub fn last_error(&self) -> Option<&CCStr> {
        self.last_error.as_ref()
    }

    pub fn status(&self) -> DeferredStatus {
        match (&self.state, &self.last_error) {
            (SlotState::Loaded(_), _) => DeferredStatus::Loaded,
            (SlotState::Empty, Some(_)) => DeferredStatus::Failed,
            (SlotState::Empty, None) => DeferredStatus::Pending,
        }
    }
}
