//! End-to-end interaction scenarios.
//!
//! These tests wire a gesture tracker into a machine through the public
//! API and observe the rendered effect sequence with a recording sink.

use snapback::builder::InteractionBuilder;
use snapback::core::{CommitZone, InteractionState};
use snapback::effects::{InteractionMachine, MockOutcomeRequester, Outcome, RenderSink};
use snapback::gesture::{GestureEvent, GestureTracker, ViewBounds};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
enum Effect {
    Move(f64),
    SnapTarget,
    SnapStart,
    Pending,
    ShowSuccess,
    ShowFailure,
    Input(bool),
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Effect>>>);

impl Recorder {
    fn effects(&self) -> Vec<Effect> {
        self.0.lock().unwrap().clone()
    }

    fn count(&self, effect: &Effect) -> usize {
        self.effects().iter().filter(|e| *e == effect).count()
    }
}

impl RenderSink for Recorder {
    fn move_indicator(&mut self, offset: f64) {
        self.0.lock().unwrap().push(Effect::Move(offset));
    }

    fn snap_to_target(&mut self) {
        self.0.lock().unwrap().push(Effect::SnapTarget);
    }

    fn snap_to_start(&mut self) {
        self.0.lock().unwrap().push(Effect::SnapStart);
    }

    fn show_pending_animation(&mut self) {
        self.0.lock().unwrap().push(Effect::Pending);
    }

    fn show_success(&mut self) {
        self.0.lock().unwrap().push(Effect::ShowSuccess);
    }

    fn show_failure(&mut self) {
        self.0.lock().unwrap().push(Effect::ShowFailure);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.0.lock().unwrap().push(Effect::Input(enabled));
    }
}

fn machine_with(requester: MockOutcomeRequester) -> (InteractionMachine, Recorder) {
    let recorder = Recorder::default();
    let machine = InteractionBuilder::new()
        .zone(CommitZone::new(60.0, 80.0).unwrap())
        .max_offset(100.0)
        .render(recorder.clone())
        .requester(requester)
        .build()
        .unwrap();
    (machine, recorder)
}

// Initial offset 0, zone center 70, tolerance 10, drag to 65, release.
#[tokio::test]
async fn drag_to_65_with_center_70_succeeds() {
    let bounds = ViewBounds::new(0.0, 100.0).unwrap();
    let mut tracker = GestureTracker::new(bounds);
    let (mut machine, recorder) = machine_with(MockOutcomeRequester::new());
    assert_eq!(tracker.position(), 0.0);

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(30.0)).await;
    machine.handle(tracker.update(65.0)).await;
    machine.handle(tracker.end()).await;

    assert_eq!(machine.state(), InteractionState::Success);
    assert_eq!(recorder.count(&Effect::ShowSuccess), 1);
    assert_eq!(recorder.count(&Effect::ShowFailure), 0);
}

#[tokio::test]
async fn missed_release_snaps_back_then_fails_with_input_gated() {
    let bounds = ViewBounds::new(0.0, 100.0).unwrap();
    let mut tracker = GestureTracker::new(bounds);
    let (mut machine, recorder) = machine_with(MockOutcomeRequester::new());

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(35.0)).await;
    machine.handle(tracker.end()).await;

    assert_eq!(machine.state(), InteractionState::Failure);
    assert_eq!(
        recorder.effects(),
        vec![
            Effect::Move(35.0),
            Effect::SnapStart,
            Effect::Input(false),
            Effect::ShowFailure,
            Effect::Input(true),
        ]
    );
    assert_eq!(
        machine.history().path(),
        vec![
            InteractionState::Idle,
            InteractionState::Dragging,
            InteractionState::Idle,
            InteractionState::Committing,
            InteractionState::Failure,
        ]
    );
}

#[tokio::test]
async fn deltas_beyond_the_container_are_clamped_end_to_end() {
    let bounds = ViewBounds::new(0.0, 100.0).unwrap();
    let mut tracker = GestureTracker::new(bounds);
    let (mut machine, _recorder) = machine_with(MockOutcomeRequester::new());

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(640.0)).await;

    assert_eq!(machine.offset(), 100.0);
}

#[tokio::test]
async fn slow_confirmation_resolves_on_the_paused_clock() {
    tokio::time::pause();
    let (mut machine, recorder) =
        machine_with(MockOutcomeRequester::new().with_latency(Duration::from_secs(2)));

    machine.handle(GestureEvent::Begin).await;
    machine.handle(GestureEvent::Update(70.0)).await;
    machine.handle(GestureEvent::End).await;

    assert_eq!(machine.state(), InteractionState::Success);
    assert_eq!(recorder.count(&Effect::ShowSuccess), 1);
}

#[tokio::test]
async fn outage_on_the_success_branch_is_reported_as_failure() {
    let (mut machine, recorder) =
        machine_with(MockOutcomeRequester::new().with_outage("connection reset"));

    machine.handle(GestureEvent::Begin).await;
    machine.handle(GestureEvent::Update(70.0)).await;
    machine.handle(GestureEvent::End).await;

    assert_eq!(machine.state(), InteractionState::Failure);
    assert_eq!(recorder.count(&Effect::ShowSuccess), 0);
    assert_eq!(recorder.count(&Effect::ShowFailure), 1);
    assert!(machine
        .history()
        .passed_through(InteractionState::Committing));
}

#[tokio::test]
async fn contradicting_confirmation_overrides_the_requested_branch() {
    // A collaborator that answers the success endpoint with a refusal.
    let (mut machine, recorder) = machine_with(
        MockOutcomeRequester::new().with_body(Outcome::Success, r#"{"success": false}"#),
    );

    machine.handle(GestureEvent::Begin).await;
    machine.handle(GestureEvent::Update(70.0)).await;
    machine.handle(GestureEvent::End).await;

    assert_eq!(machine.state(), InteractionState::Failure);
    assert_eq!(recorder.count(&Effect::ShowFailure), 1);
}

#[tokio::test]
async fn reset_allows_a_fresh_cycle_after_failure() {
    let bounds = ViewBounds::new(0.0, 100.0).unwrap();
    let mut tracker = GestureTracker::new(bounds);
    let (mut machine, recorder) = machine_with(MockOutcomeRequester::new());

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(10.0)).await;
    machine.handle(tracker.end()).await;
    assert_eq!(machine.state(), InteractionState::Failure);

    assert!(machine.reset());
    tracker.sync(0.0);

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(72.0)).await;
    machine.handle(tracker.end()).await;

    assert_eq!(machine.state(), InteractionState::Success);
    assert_eq!(recorder.count(&Effect::ShowSuccess), 1);
    assert_eq!(recorder.count(&Effect::ShowFailure), 1);
}
