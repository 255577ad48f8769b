//! Per-frame sweep control.
//!
//! A single substep can carry a fast body clean through a thin obstacle
//! (tunneling) whenever the frame's displacement exceeds roughly half
//! the body's own size. The controller plans enough substeps up front
//! that no single step can skip an obstacle, and refines further when a
//! trial run shows contact is imminent.

use crate::api::config::WorldConfig;
use crate::components::body::Body;
use crate::components::obstacle::Obstacle;
use crate::core::world::integrate_substep;

/// Substep distance used when a coarse trial reports a collision.
/// Trades performance for precision exactly when contact happens.
pub const FINE_SWEEP_UNIT: f32 = 0.5;

/// Number of substeps needed so no single step moves the body further
/// than `unit`. The planned displacement is approximated before moving
/// anything as `|velocity + gravity|` for the frame.
///
/// A non-positive `unit` (zero-size body) or zero displacement degrades
/// to a single substep; there is no division by zero.
pub(crate) fn plan_substeps(body: &Body, gravity: glam::Vec2, unit: f32) -> u32 {
    let length = (body.velocity + gravity).length();
    if unit <= 0.0 || length <= 0.0 {
        return 1;
    }
    (length / unit).ceil().max(1.0) as u32
}

/// Run one frame as `substeps` equal substeps, ORing collision results
/// into the body's flag.
fn run_frame(body: &mut Body, obstacles: &[Obstacle], gravity: glam::Vec2, substeps: u32) {
    let substeps = substeps.max(1);
    let dt = 1.0 / substeps as f32;
    body.collided = false;
    for _ in 0..substeps {
        if integrate_substep(body, obstacles, gravity, dt) {
            body.collided = true;
        }
    }
}

/// Advance one body by one frame.
///
/// With sweeping enabled this is a two-pass scheme: the coarse,
/// size-based subdivision first runs against a disposable copy of the
/// body. If that trial stays in free flight its end state is copied
/// onto the real body wholesale; if it hits anything the trial is
/// discarded and the frame re-runs on the real body at [`FINE_SWEEP_UNIT`]
/// resolution. Coarse sweeps stay cheap in flight, fine sweeps only pay
/// off at the moment of contact.
pub(crate) fn advance_body(body: &mut Body, obstacles: &[Obstacle], config: &WorldConfig) {
    let base = config.steps_per_frame.max(1);

    if !config.sweep {
        run_frame(body, obstacles, config.gravity, base);
        return;
    }

    let coarse_unit = body.aabb.size.min_element() / 2.0;
    let coarse = base * plan_substeps(body, config.gravity, coarse_unit);

    let mut trial = *body;
    run_frame(&mut trial, obstacles, config.gravity, coarse);

    if trial.collided {
        let fine = base * plan_substeps(body, config.gravity, FINE_SWEEP_UNIT);
        log::trace!(
            "contact imminent: refining {} coarse substeps to {}",
            coarse,
            fine
        );
        run_frame(body, obstacles, config.gravity, fine);
    } else {
        *body = trial;
    }
}
