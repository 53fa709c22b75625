//! Session history and the back/forward trap.
//!
//! [`HistoryTrap`] pushes a duplicate of the guarded location so the entry
//! "behind" it is the same page, then answers every pop with another push of
//! that location. While the trap is armed the effective position never leaves
//! the guarded route. Dropping the trap removes its listener.
//!
//! This is a deterrent only. It does nothing against typing a URL, editing
//! storage, or following a fresh link out of the page.

use crate::gate::location::Location;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, trace};

/// Handle returned by [`History::add_pop_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Called with the location the history landed on after a back/forward move.
pub type PopListener = Box<dyn FnMut(&Location)>;

pub trait History {
    fn current(&self) -> Location;

    /// Adds an entry after the current one, discarding forward entries.
    fn push(&self, location: &Location);

    /// Overwrites the current entry.
    fn replace(&self, location: &Location);

    fn add_pop_listener(&self, listener: PopListener) -> ListenerId;

    /// Returns `false` if the listener was already gone.
    fn remove_pop_listener(&self, id: ListenerId) -> bool;
}

/// Armed back-navigation trap for one guarded mount.
pub struct HistoryTrap<H: History + ?Sized + 'static> {
    history: Rc<H>,
    anchor: Location,
    listener: Option<ListenerId>,
}

impl<H: History + ?Sized + 'static> HistoryTrap<H> {
    /// Pushes the anchor entry and starts countering pops.
    pub fn install(history: Rc<H>, anchor: Location) -> Self {
        history.push(&anchor);

        let weak = Rc::downgrade(&history);
        let pinned = anchor.clone();
        let listener = history.add_pop_listener(Box::new(move |landed: &Location| {
            let Some(history) = weak.upgrade() else {
                return;
            };
            trace!(landed = %landed, anchor = %pinned, "pop intercepted");
            history.push(&pinned);
        }));

        debug!(anchor = %anchor, listener = listener.get(), "history trap armed");

        Self {
            history,
            anchor,
            listener: Some(listener),
        }
    }

    pub fn anchor(&self) -> &Location {
        &self.anchor
    }

    pub fn is_armed(&self) -> bool {
        self.listener.is_some()
    }

    pub fn release(mut self) {
        self.disarm();
    }

    fn disarm(&mut self) {
        if let Some(id) = self.listener.take() {
            self.history.remove_pop_listener(id);
            debug!(anchor = %self.anchor, listener = id.get(), "history trap released");
        }
    }
}

impl<H: History + ?Sized + 'static> Drop for HistoryTrap<H> {
    fn drop(&mut self) {
        self.disarm();
    }
}

type SharedListener = Rc<RefCell<PopListener>>;

#[derive(Debug)]
struct Entries {
    stack: Vec<Location>,
    cursor: usize,
}

/// Session history held in memory: an entry stack, a cursor and pop
/// listeners. Mirrors the browser's rules: pushes drop forward entries,
/// moves past either end are ignored and fire nothing.
pub struct MemoryHistory {
    entries: RefCell<Entries>,
    listeners: RefCell<Vec<(ListenerId, SharedListener)>>,
    next_listener: Cell<u64>,
}

impl MemoryHistory {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: RefCell::new(Entries {
                stack: vec![initial],
                cursor: 0,
            }),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Moves the cursor by `delta` and notifies pop listeners. Returns
    /// `false` without notifying when the move is out of range or zero.
    pub fn go(&self, delta: isize) -> bool {
        {
            let mut entries = self.entries.borrow_mut();
            let Some(target) = entries.cursor.checked_add_signed(delta) else {
                return false;
            };
            if delta == 0 || target >= entries.stack.len() {
                return false;
            }
            entries.cursor = target;
        }

        self.dispatch_pop();
        true
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().stack.is_empty()
    }

    pub fn position(&self) -> usize {
        self.entries.borrow().cursor
    }

    pub fn entries(&self) -> Vec<Location> {
        self.entries.borrow().stack.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn dispatch_pop(&self) {
        let landed = self.current();
        // Snapshot so listeners can push or unsubscribe while being notified.
        let listeners: Vec<SharedListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (*callback)(&landed);
            }
        }
    }
}

impl History for MemoryHistory {
    fn current(&self) -> Location {
        let entries = self.entries.borrow();
        entries.stack[entries.cursor].clone()
    }

    fn push(&self, location: &Location) {
        let mut entries = self.entries.borrow_mut();
        let keep = entries.cursor + 1;
        entries.stack.truncate(keep);
        entries.stack.push(location.clone());
        entries.cursor = keep;
    }

    fn replace(&self, location: &Location) {
        let mut entries = self.entries.borrow_mut();
        let cursor = entries.cursor;
        entries.stack[cursor] = location.clone();
    }

    fn add_pop_listener(&self, listener: PopListener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn remove_pop_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}
