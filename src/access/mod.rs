//! Session ownership and the admin access gate

pub mod gate;
pub mod provider;
pub mod session;

pub use gate::{decide, AccessGate, GateView, RoleCheck};
pub use provider::{AuthProvider, OAuthRedirect, PgAuthClient, SessionChange, SessionEvent};
pub use session::{AuthPhase, SessionHolder, SessionState};
