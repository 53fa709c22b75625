use crate::features::payment::{history::BrowserHistory, storage};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use paygate::gate::{GateConfig, GuardSession, Location};
use std::rc::Rc;

/// Renders `children` only for visitors whose order is verified.
///
/// A fresh guard session is acquired whenever the path or query changes and
/// released on unmount. Denied visitors are sent to the payment entry path
/// with a replacing navigation; nothing is rendered for them.
#[component]
pub fn RequirePayment(children: ChildrenFn) -> impl IntoView {
    let config = use_context::<GateConfig>().unwrap_or_default();
    let history = Rc::new(BrowserHistory::new(use_navigate()));
    let location = use_location();
    let session = StoredValue::new_local(None::<GuardSession<BrowserHistory>>);
    let (admitted, set_admitted) = signal(false);

    let href = Memo::new(move |_| {
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        if search.is_empty() {
            location.pathname.get()
        } else {
            format!("{}?{search}", location.pathname.get())
        }
    });

    Effect::new(move |_| {
        let current = Location::parse(&href.get());

        // A countered pop lands on the same location; keep the armed session.
        let unchanged = session.with_value(|active| {
            active
                .as_ref()
                .is_some_and(|active| active.location() == &current)
        });
        if unchanged {
            return;
        }

        if let Some(previous) = session.try_update_value(Option::take).flatten() {
            previous.release();
        }

        // UX-only guard; the record lives in the visitor's own storage.
        let repository = storage::repository(&config);
        let next = GuardSession::acquire(current, &repository, Rc::clone(&history), &config);
        set_admitted.set(next.is_admitted());
        session.set_value(Some(next));
    });

    on_cleanup(move || {
        if let Some(active) = session.try_update_value(Option::take).flatten() {
            active.release();
        }
    });

    view! {
        <Show when=move || admitted.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
