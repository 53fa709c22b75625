//! `window.history` as a [`History`] for the guard.
//!
//! A push of the location the window already shows (the trap's duplicate
//! anchor, or a countered single step onto it) goes straight to `pushState`;
//! the router is already rendering that href. Any other push is a jump back
//! from an entry the router has just switched to, so it goes through the
//! router's `navigate` and the router state follows the address bar.
//! Replacements are real navigations (the denial redirect) and also go through
//! `navigate`, with `replace: true`.

use leptos_router::NavigateOptions;
use paygate::gate::{History, ListenerId, Location, PopListener};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

type Navigate = Rc<dyn Fn(&str, NavigateOptions)>;
type PopClosure = Closure<dyn FnMut(web_sys::Event)>;

pub struct BrowserHistory {
    navigate: Navigate,
    listeners: RefCell<HashMap<u64, PopClosure>>,
    next_listener: Cell<u64>,
}

impl BrowserHistory {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: Rc::new(navigate),
            listeners: RefCell::new(HashMap::new()),
            next_listener: Cell::new(0),
        }
    }
}

fn window_location() -> Location {
    let Some(window) = web_sys::window() else {
        return Location::new("/", None);
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Location::new(path, Some(&search))
}

impl History for BrowserHistory {
    fn current(&self) -> Location {
        window_location()
    }

    fn push(&self, location: &Location) {
        if window_location() != *location {
            (self.navigate)(
                &location.href(),
                NavigateOptions {
                    scroll: false,
                    ..Default::default()
                },
            );
            return;
        }

        let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
            return;
        };
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&location.href()));
    }

    fn replace(&self, location: &Location) {
        (self.navigate)(
            &location.href(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }

    fn add_pop_listener(&self, mut listener: PopListener) -> ListenerId {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);

        let closure = PopClosure::new(move |_event: web_sys::Event| {
            listener(&window_location());
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        self.listeners.borrow_mut().insert(id, closure);

        ListenerId::new(id)
    }

    fn remove_pop_listener(&self, id: ListenerId) -> bool {
        let Some(closure) = self.listeners.borrow_mut().remove(&id.get()) else {
            return false;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        true
    }
}

impl Drop for BrowserHistory {
    fn drop(&mut self) {
        let ids: Vec<u64> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            self.remove_pop_listener(ListenerId::new(id));
        }
    }
}
