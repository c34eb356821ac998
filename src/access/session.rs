//! Owned session state

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::{
    sync::{broadcast::error::RecvError, watch},
    task::AbortHandle,
};
use tracing::{debug, warn};

use super::provider::AuthProvider;
use crate::{error::AppResult, models::Session};

/// Where session restoration stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

impl AuthPhase {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Phase plus the observation time of the update that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: AuthPhase,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Single owner of the session state.
///
/// Both the change subscription and the one-shot fetch write through
/// [`SessionHolder::apply`], which drops updates older than the last one
/// applied.
pub struct SessionHolder {
    state: watch::Sender<SessionState>,
    pump: Mutex<Option<AbortHandle>>,
}

impl SessionHolder {
    pub fn new() -> Arc<Self> {
        let (state, _) = watch::channel(SessionState {
            phase: AuthPhase::Loading,
            observed_at: None,
        });

        Arc::new(Self {
            state,
            pump: Mutex::new(None),
        })
    }

    /// Subscribe to provider events, then fetch the current session once
    pub async fn initialize<P>(self: &Arc<Self>, provider: &P) -> AppResult<()>
    where
        P: AuthProvider + ?Sized,
    {
        let mut events = provider.subscribe();
        let holder = Arc::downgrade(self);

        let pump = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        let Some(holder) = holder.upgrade() else {
                            break;
                        };
                        debug!(change = ?event.change, "Session event received");
                        holder.apply(event.session, event.observed_at);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Session events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        self.set_pump(pump.abort_handle());

        // Stamped with the request time: an event observed while the
        // fetch is in flight is newer than the snapshot it returns.
        let requested_at = Utc::now();
        let session = provider.get_session().await?;
        self.apply(session, requested_at);
        Ok(())
    }

    /// Apply a session update unless a newer one was already applied
    pub fn apply(&self, session: Option<Session>, observed_at: DateTime<Utc>) -> bool {
        self.state.send_if_modified(|state| {
            if state.observed_at.is_some_and(|last| observed_at < last) {
                debug!(%observed_at, "Ignoring stale session update");
                return false;
            }

            state.phase = match session {
                Some(session) => AuthPhase::Authenticated(session),
                None => AuthPhase::Unauthenticated,
            };
            state.observed_at = Some(observed_at);
            true
        })
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.borrow().phase.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Sign out through the provider and clear the local session
    pub async fn sign_out<P>(&self, provider: &P) -> AppResult<()>
    where
        P: AuthProvider + ?Sized,
    {
        provider.sign_out().await?;
        self.apply(None, Utc::now());
        Ok(())
    }

    fn set_pump(&self, handle: AbortHandle) {
        let mut slot = self.pump.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for SessionHolder {
    fn drop(&mut self) {
        let slot = self.pump.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
