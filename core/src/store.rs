use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::*;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Unchanged,
    Changed,
}

impl DispatchOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

type Listener = Box<dyn FnMut(&GameState)>;

/// Owner of the single [`GameState`].
///
/// Every action goes through [`reduce`] and the result replaces the held state as a whole.
/// Listeners run in subscription order after a change, never for a no-op.
pub struct Store {
    state: GameState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchOutcome {
        let next = reduce(&self.state, action);
        if next == self.state {
            log::trace!("{:?} left the state unchanged", action);
            return DispatchOutcome::Unchanged;
        }

        self.state = next;
        log::debug!("{:?} -> {}", action, self.state.status());
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        DispatchOutcome::Changed
    }

    pub fn select_square(&mut self, index: SquareIndex) -> DispatchOutcome {
        self.dispatch(Action::SelectSquare(index))
    }

    pub fn restart(&mut self) -> DispatchOutcome {
        self.dispatch(Action::Restart)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    fn idx(i: usize) -> SquareIndex {
        SquareIndex::new(i).unwrap()
    }

    fn recorder(store: &mut Store) -> (SubscriptionId, Rc<RefCell<Vec<Status>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.status()));
        (id, seen)
    }

    #[test]
    fn dispatch_replaces_state_and_notifies() {
        let mut store = Store::new();
        let (_, seen) = recorder(&mut store);

        assert_eq!(store.select_square(idx(0)), DispatchOutcome::Changed);

        assert_eq!(store.state().squares()[idx(0)], Some(Symbol::X));
        assert_eq!(*seen.borrow(), vec![Status::NextPlayer(Symbol::O)]);
    }

    #[test]
    fn noop_dispatch_does_not_notify() {
        let mut store = Store::new();
        store.select_square(idx(0));
        let (_, seen) = recorder(&mut store);
        let before = *store.state();

        assert_eq!(store.select_square(idx(0)), DispatchOutcome::Unchanged);
        assert_eq!(store.restart(), DispatchOutcome::Changed);
        assert_eq!(store.restart(), DispatchOutcome::Unchanged);

        assert_ne!(before, *store.state());
        assert_eq!(*seen.borrow(), vec![Status::NextPlayer(Symbol::X)]);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let mut store = Store::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..3 {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(tag));
        }

        store.select_square(idx(4));

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::new();
        let (id, seen) = recorder(&mut store);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.select_square(idx(2));

        assert!(seen.borrow().is_empty());
    }
}
