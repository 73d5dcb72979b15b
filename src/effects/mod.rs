//! Effectful shell of the interaction engine.
//!
//! The machine here consumes the pure core ([`crate::core`]) and drives
//! two capability boundaries: rendering ([`RenderSink`]) and the
//! asynchronous confirmation call ([`OutcomeRequester`]). Effects are
//! isolated behind those traits; the machine itself never touches a UI
//! surface or a network socket.

mod endpoint;
mod machine;
mod mock;
mod outcome;
mod render;

pub use endpoint::OutcomeEndpoint;
pub use machine::InteractionMachine;
pub use mock::MockOutcomeRequester;
pub use outcome::{Confirmation, Outcome, OutcomeError, OutcomeRequester};
pub use render::{RenderSink, TracingRender};
