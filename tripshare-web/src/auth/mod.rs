//! Session handling: where the token comes from, who holds it, and which
//! routes it unlocks. All of this is UX only; the backend enforces access.

pub mod guard;
pub mod session;
pub mod token;

pub use guard::{GuardDecision, RouteGuard};
pub use session::{SessionState, SessionStore};
pub use token::{ExecutionContext, TokenResolver};

#[cfg(test)]
pub use token::MockTokenResolver;
