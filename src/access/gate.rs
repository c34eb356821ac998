//! Admin access gate

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use super::session::{AuthPhase, SessionHolder};
use crate::{
    constants::{AUTH_ENTRY_PATH, HOME_PATH},
    models::Role,
    store::RoleStore,
};

/// Outcome of the admin role lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCheck {
    Pending,
    /// Result for one specific user
    Resolved { user_id: Uuid, is_admin: bool },
}

/// What the gate shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateView {
    /// Neutral waiting indicator
    Waiting,
    RedirectToAuth,
    RedirectHome,
    /// Protected content
    Render,
}

impl GateView {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToAuth => Some(AUTH_ENTRY_PATH),
            Self::RedirectHome => Some(HOME_PATH),
            Self::Waiting | Self::Render => None,
        }
    }
}

/// Decide the view from the session phase and role check.
///
/// A role result for a different user than the current session counts as
/// pending.
pub fn decide(phase: &AuthPhase, role: &RoleCheck) -> GateView {
    match phase {
        AuthPhase::Loading => GateView::Waiting,
        AuthPhase::Unauthenticated => GateView::RedirectToAuth,
        AuthPhase::Authenticated(session) => match *role {
            RoleCheck::Resolved { user_id, is_admin } if user_id == session.user_id() => {
                if is_admin {
                    GateView::Render
                } else {
                    GateView::RedirectHome
                }
            }
            _ => GateView::Waiting,
        },
    }
}

/// Gate over a session holder and a role lookup
pub struct AccessGate {
    holder: Arc<SessionHolder>,
    roles: Arc<dyn RoleStore>,
    role: watch::Sender<RoleCheck>,
}

impl AccessGate {
    pub fn new(holder: Arc<SessionHolder>, roles: Arc<dyn RoleStore>) -> Self {
        let (role, _) = watch::channel(RoleCheck::Pending);
        Self { holder, roles, role }
    }

    pub fn view(&self) -> GateView {
        decide(&self.holder.phase(), &self.role.borrow())
    }

    /// False while pending, on lookup error, or for a stale user
    pub fn is_admin(&self) -> bool {
        self.view() == GateView::Render
    }

    pub fn role_check(&self) -> RoleCheck {
        *self.role.borrow()
    }

    /// Re-run the role check for the current session.
    ///
    /// The lookup starts on the next scheduling turn. A result that arrives
    /// after the session moved to another user is discarded.
    pub async fn refresh(&self) {
        let Some(user_id) = self.holder.phase().session().map(|s| s.user_id()) else {
            self.role.send_replace(RoleCheck::Pending);
            return;
        };

        tokio::task::yield_now().await;

        let is_admin = match self.roles.query_role(user_id, Role::Admin).await {
            Ok(is_admin) => is_admin,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Role check failed, treating as non-admin");
                false
            }
        };

        let still_current = self
            .holder
            .phase()
            .session()
            .is_some_and(|s| s.user_id() == user_id);
        if !still_current {
            debug!(user_id = %user_id, "Discarding role check for previous session");
            return;
        }

        self.role.send_replace(RoleCheck::Resolved { user_id, is_admin });
    }

    /// Wait for session restoration, check the role once and report the view
    pub async fn resolve(&self) -> GateView {
        let mut changes = self.holder.subscribe();
        if changes
            .wait_for(|state| state.phase != AuthPhase::Loading)
            .await
            .is_err()
        {
            return GateView::Waiting;
        }

        self.refresh().await;
        self.view()
    }

    /// Keep the role check in step with session changes
    pub async fn follow(&self) {
        let mut changes = self.holder.subscribe();
        self.refresh().await;
        while changes.changed().await.is_ok() {
            self.refresh().await;
        }
    }
}
