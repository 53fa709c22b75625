//! Per-mount guard session.
//!
//! [`GuardSession::acquire`] is the whole lifecycle of one guarded mount:
//! evaluate, then either arm the history trap (admitted) or replace the current
//! entry with the payment entry path (denied). The trap lives exactly as long
//! as the session; dropping or releasing the session disarms it on every exit
//! path, including an abrupt unmount.

use crate::gate::config::GateConfig;
use crate::gate::guard::{Decision, GuardState, NavigationGuard};
use crate::gate::history::{History, HistoryTrap};
use crate::gate::location::{Location, OrderId};
use crate::gate::store::VerificationRepository;
use std::rc::Rc;
use tracing::debug;

pub struct GuardSession<H: History + ?Sized + 'static> {
    location: Location,
    decision: Decision,
    trap: Option<HistoryTrap<H>>,
}

impl<H: History + ?Sized + 'static> GuardSession<H> {
    pub fn acquire<R: VerificationRepository + ?Sized>(
        location: Location,
        repository: &R,
        history: Rc<H>,
        config: &GateConfig,
    ) -> Self {
        let decision = NavigationGuard::new(repository, config).evaluate(&location);

        let trap = match &decision {
            Decision::Admit { .. } => Some(HistoryTrap::install(history, location.clone())),
            Decision::Redirect { to, .. } => {
                // Replace, so the denied attempt is not a revisitable entry.
                history.replace(to);
                None
            }
        };

        Self {
            location,
            decision,
            trap,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    pub fn state(&self) -> GuardState {
        self.decision.state()
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        self.decision.order_id()
    }

    pub fn is_admitted(&self) -> bool {
        self.decision.is_admitted()
    }

    pub fn is_trap_armed(&self) -> bool {
        self.trap.as_ref().is_some_and(HistoryTrap::is_armed)
    }

    pub fn release(mut self) {
        if let Some(trap) = self.trap.take() {
            trap.release();
        }
        debug!(location = %self.location, "guard session released");
    }
}
