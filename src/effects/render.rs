//! The render/view capability boundary.
//!
//! The machine owns canonical state and drives a [`RenderSink`]; the view
//! layer is a rendering subscriber with no state of its own. How an
//! implementation moves, snaps, animates, or presents notices is entirely
//! its business.

use tracing::info;

/// Rendering effects the machine invokes at state transitions.
///
/// Implementations must not call back into the machine; they receive
/// effects and apply them to whatever surface they manage.
pub trait RenderSink: Send {
    /// Move the drag indicator to the given offset.
    fn move_indicator(&mut self, offset: f64);

    /// Snap the indicator to the commit target position.
    fn snap_to_target(&mut self);

    /// Snap the indicator back to its start position.
    fn snap_to_start(&mut self);

    /// Start the pending-confirmation animation.
    fn show_pending_animation(&mut self);

    /// Show the success presentation and hide the indicator and target.
    fn show_success(&mut self);

    /// Show the failure notice.
    fn show_failure(&mut self);

    /// Enable or disable gesture input at the view layer.
    fn set_input_enabled(&mut self, enabled: bool);
}

/// A headless sink that logs every effect.
///
/// Useful as the view layer for demos and diagnostics when no real
/// surface is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRender;

impl RenderSink for TracingRender {
    fn move_indicator(&mut self, offset: f64) {
        info!(offset, "render: move indicator");
    }

    fn snap_to_target(&mut self) {
        info!("render: snap to target");
    }

    fn snap_to_start(&mut self) {
        info!("render: snap to start");
    }

    fn show_pending_animation(&mut self) {
        info!("render: pending animation");
    }

    fn show_success(&mut self) {
        info!("render: show success");
    }

    fn show_failure(&mut self) {
        info!("render: show failure");
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        info!(enabled, "render: set input enabled");
    }
}
