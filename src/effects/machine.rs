//! State machine sequencing the pull-to-refresh flow.

use crate::core::{
    CommitZone, InteractionHistory, InteractionState, StateChange, ThresholdEvaluator,
};
use crate::effects::outcome::{Confirmation, Outcome, OutcomeError, OutcomeRequester};
use crate::effects::render::RenderSink;
use crate::gesture::GestureEvent;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the canonical interaction state and sequences the whole cycle:
/// drag updates, the release decision, render effects, and the single
/// asynchronous confirmation call.
///
/// All mutation goes through `&mut self`, so event handling is serialized
/// by construction; [`handle`](Self::handle) awaits the confirmation
/// inline, which is the machine's only suspension point. Construct via
/// [`InteractionBuilder`](crate::builder::InteractionBuilder).
pub struct InteractionMachine {
    state: InteractionState,
    offset: f64,
    max_offset: f64,
    zone: CommitZone,
    evaluator: ThresholdEvaluator,
    render: Box<dyn RenderSink>,
    requester: Arc<dyn OutcomeRequester>,
    history: InteractionHistory,
}

impl InteractionMachine {
    pub(crate) fn new(
        zone: CommitZone,
        evaluator: ThresholdEvaluator,
        max_offset: f64,
        render: Box<dyn RenderSink>,
        requester: Arc<dyn OutcomeRequester>,
    ) -> Self {
        Self {
            state: InteractionState::Idle,
            offset: 0.0,
            max_offset,
            zone,
            evaluator,
            render,
            requester,
            history: InteractionHistory::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The stored drag offset, always within `[0, max_offset]`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The configured commit zone.
    pub fn zone(&self) -> &CommitZone {
        &self.zone
    }

    /// Whether the current cycle has reached a terminal state.
    pub fn is_final(&self) -> bool {
        self.state.is_final()
    }

    /// Every state change recorded so far.
    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }

    /// Consume one gesture event.
    ///
    /// Events that do not apply in the current state are ignored with a
    /// debug log; in particular, all gesture input is ignored while a
    /// confirmation is pending or the cycle is terminal. A release inside
    /// the commit zone snaps to the target and requests the success
    /// confirmation; a miss snaps back, disables input, and requests the
    /// failure confirmation. Either way the confirmation is awaited here
    /// and the cycle finalizes before this call returns.
    pub async fn handle(&mut self, event: GestureEvent) {
        match (self.state, event) {
            (InteractionState::Idle, GestureEvent::Begin) => {
                self.transition_to(InteractionState::Dragging);
            }
            (InteractionState::Dragging, GestureEvent::Update(offset)) => {
                self.offset = offset.clamp(0.0, self.max_offset);
                self.render.move_indicator(self.offset);
            }
            (InteractionState::Dragging, GestureEvent::End) => {
                if self.evaluator.evaluate(self.offset, &self.zone) {
                    self.transition_to(InteractionState::Committing);
                    self.render.snap_to_target();
                    self.render.show_pending_animation();
                    self.resolve(Outcome::Success).await;
                } else {
                    self.transition_to(InteractionState::Idle);
                    self.render.snap_to_start();
                    self.transition_to(InteractionState::Committing);
                    self.render.set_input_enabled(false);
                    self.resolve(Outcome::Failure).await;
                }
            }
            (state, event) => {
                debug!(state = state.name(), event = ?event, "gesture event ignored");
            }
        }
    }

    /// Return a finished cycle to `Idle`.
    ///
    /// Applies only from `Success` or `Failure`; returns whether the
    /// reset happened. The offset is cleared and the indicator snaps back
    /// to its start position.
    pub fn reset(&mut self) -> bool {
        if !self.state.is_final() {
            debug!(state = self.state.name(), "reset ignored");
            return false;
        }
        self.offset = 0.0;
        self.transition_to(InteractionState::Idle);
        self.render.snap_to_start();
        true
    }

    async fn resolve(&mut self, requested: Outcome) {
        let resolved = self.requester.confirm(requested).await;
        self.finalize(requested, resolved);
    }

    fn finalize(&mut self, requested: Outcome, resolved: Result<Confirmation, OutcomeError>) {
        let next = match resolved {
            Ok(confirmation) => {
                if confirmation.success != (requested == Outcome::Success) {
                    warn!(
                        requested = requested.name(),
                        confirmed = confirmation.success,
                        "confirmation contradicts the requested branch"
                    );
                }
                if confirmation.success {
                    InteractionState::Success
                } else {
                    InteractionState::Failure
                }
            }
            Err(err) => {
                warn!(
                    requested = requested.name(),
                    error = %err,
                    "confirmation call failed"
                );
                InteractionState::Failure
            }
        };

        self.transition_to(next);
        if next == InteractionState::Success {
            self.render.show_success();
        } else {
            self.render.show_failure();
        }
        // Input was gated only on the failure-request branch.
        if requested == Outcome::Failure {
            self.render.set_input_enabled(true);
        }
        info!(
            requested = requested.name(),
            state = next.name(),
            "interaction cycle resolved"
        );
    }

    fn transition_to(&mut self, next: InteractionState) {
        debug!(
            from = self.state.name(),
            to = next.name(),
            offset = self.offset,
            "state change"
        );
        self.history = self.history.record(StateChange {
            from: self.state,
            to: next,
            offset: self.offset,
            at: Utc::now(),
        });
        self.state = next;
    }
}
