//! Navigation guard decision machine.
//!
//! Every mount or route change starts in [`GuardState::Evaluating`] and ends in
//! exactly one of [`GuardState::Admitted`] or [`GuardState::Denied`]. The
//! outcome is a pure function of the location and the store contents at the
//! time of evaluation; nothing is cached between navigations.

use crate::gate::config::GateConfig;
use crate::gate::location::{Location, OrderId};
use crate::gate::store::{VerificationRepository, VerificationStatus};
use tracing::{debug, info, instrument};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Evaluating,
    Admitted,
    Denied,
}

/// Why a visitor was turned away. Both variants are the same failure
/// (unverified access) and lead to the same redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Denial {
    MissingOrderId,
    NotVerified {
        order_id: OrderId,
        status: VerificationStatus,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Admit { order_id: OrderId },
    Redirect { to: Location, reason: Denial },
}

impl Decision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admit { .. })
    }

    pub fn state(&self) -> GuardState {
        match self {
            Self::Admit { .. } => GuardState::Admitted,
            Self::Redirect { .. } => GuardState::Denied,
        }
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        match self {
            Self::Admit { order_id }
            | Self::Redirect {
                reason: Denial::NotVerified { order_id, .. },
                ..
            } => Some(order_id),
            Self::Redirect {
                reason: Denial::MissingOrderId,
                ..
            } => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&Location> {
        match self {
            Self::Redirect { to, .. } => Some(to),
            Self::Admit { .. } => None,
        }
    }
}

pub struct NavigationGuard<'a, R: ?Sized> {
    repository: &'a R,
    config: &'a GateConfig,
}

impl<'a, R: VerificationRepository + ?Sized> NavigationGuard<'a, R> {
    pub fn new(repository: &'a R, config: &'a GateConfig) -> Self {
        Self { repository, config }
    }

    /// Decides whether `location` may be shown.
    #[instrument(skip(self), fields(path = location.path()))]
    pub fn evaluate(&self, location: &Location) -> Decision {
        debug!(state = ?GuardState::Evaluating, "evaluating guarded route");

        let Some(order_id) = location.order_id(&self.config.order_param) else {
            info!("denied: no order id");
            return self.deny(Denial::MissingOrderId);
        };

        let status = self.repository.status(&order_id);
        if status.is_verified() {
            info!(%order_id, "admitted");
            Decision::Admit { order_id }
        } else {
            info!(%order_id, status = status.as_str(), "denied: payment not verified");
            self.deny(Denial::NotVerified { order_id, status })
        }
    }

    fn deny(&self, reason: Denial) -> Decision {
        Decision::Redirect {
            to: self.config.payment_location(),
            reason,
        }
    }
}
