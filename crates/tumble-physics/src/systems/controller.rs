//! Jump/walk state machine layered on top of a body.
//!
//! Runs once per frame *before* `World::advance()`. The transitions it
//! takes this frame read the collision flag produced by the *previous*
//! frame's integration — a one-frame feedback loop. Breaking that loop
//! either levitates the body permanently (controller never learns it
//! left the ground) or makes landings jitter (controller reacts to a
//! half-applied frame), so the ordering is part of the contract.

use crate::api::config::ControllerConfig;
use crate::components::body::Body;
use crate::input::snapshot::InputState;

/// The three controller states. No other state exists; the enum makes
/// anything else unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    /// Resting on a surface; vertical velocity pinned to zero.
    Standing,
    /// Airborne, gravity accumulating through the integrator.
    Falling,
    /// Actively ascending while the jump button is held.
    Jumping,
}

/// Called on every state transition. Injectable so embedders can drive
/// sound, animation or debug overlays without the kernel knowing.
pub type TransitionHook = Box<dyn FnMut(JumpState, JumpState)>;

/// Per-body jump/walk controller.
pub struct JumpController {
    state: JumpState,
    jump_frame: u32,
    config: ControllerConfig,
    hook: Option<TransitionHook>,
}

impl JumpController {
    /// A controller starts airborne; the first landing puts it in
    /// `Standing`.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            state: JumpState::Falling,
            jump_frame: 0,
            config,
            hook: None,
        }
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Install a transition hook, replacing any previous one.
    pub fn set_transition_hook(&mut self, hook: impl FnMut(JumpState, JumpState) + 'static) {
        self.hook = Some(Box::new(hook));
    }

    fn transition(&mut self, to: JumpState) {
        let from = self.state;
        log::debug!("jump state {:?} -> {:?}", from, to);
        if let Some(hook) = self.hook.as_mut() {
            hook(from, to);
        }
        self.state = to;
    }

    /// Consume one frame of input and write velocity overrides into the
    /// body. Call before advancing the world.
    pub fn apply(&mut self, body: &mut Body, input: &InputState) {
        // Horizontal control: exactly one direction held moves, neither
        // or both cancels out.
        body.velocity.x = match (input.left, input.right) {
            (true, false) => -self.config.horizontal_speed,
            (false, true) => self.config.horizontal_speed,
            _ => 0.0,
        };

        self.step_vertical(body, input);
    }

    fn step_vertical(&mut self, body: &mut Body, input: &InputState) {
        match self.state {
            JumpState::Standing => {
                body.velocity.y = 0.0;
                if !body.collided {
                    // Ground vanished under us (walked off a ledge).
                    self.transition(JumpState::Falling);
                } else if input.jump_pressed {
                    self.transition(JumpState::Jumping);
                    body.collided = false;
                    // Re-evaluate in the same frame so the jump velocity
                    // lands this frame, not the next.
                    self.step_vertical(body, input);
                }
            }
            JumpState::Jumping => {
                if body.collided {
                    // Hit something while ascending (a ceiling).
                    self.jump_frame = 0;
                    self.transition(JumpState::Falling);
                } else if input.jump_held {
                    body.velocity.y = self.config.jump_velocity;
                    self.jump_frame += 1;
                    if self.jump_frame > self.config.max_jump_frames {
                        // Ballistic cutoff: the jump ends no matter how
                        // long the button is held.
                        self.jump_frame = 0;
                        self.transition(JumpState::Falling);
                    }
                } else {
                    // Released early: variable jump height.
                    self.jump_frame = 0;
                    self.transition(JumpState::Falling);
                }
            }
            JumpState::Falling => {
                if body.collided {
                    self.transition(JumpState::Standing);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::WorldConfig;
    use crate::components::obstacle::Obstacle;
    use crate::core::math::Aabb;
    use crate::core::world::World;
    use std::cell::RefCell;
    use std::rc::Rc;

    const IDLE: InputState = InputState {
        left: false,
        right: false,
        jump_held: false,
        jump_pressed: false,
    };

    const JUMP_EDGE: InputState = InputState {
        left: false,
        right: false,
        jump_held: true,
        jump_pressed: true,
    };

    const JUMP_HELD: InputState = InputState {
        left: false,
        right: false,
        jump_held: true,
        jump_pressed: false,
    };

    fn standing_controller() -> (JumpController, Body) {
        let mut ctl = JumpController::new(ControllerConfig::default());
        let mut body = Body::new(Aabb::new(4.0, 27.0, 3.0, 3.0));
        body.collided = true; // resting on something last frame
        ctl.apply(&mut body, &IDLE);
        assert_eq!(ctl.state(), JumpState::Standing);
        (ctl, body)
    }

    #[test]
    fn landing_moves_falling_to_standing() {
        let mut ctl = JumpController::new(ControllerConfig::default());
        let mut body = Body::new(Aabb::new(0.0, 0.0, 3.0, 3.0));
        ctl.apply(&mut body, &IDLE);
        assert_eq!(ctl.state(), JumpState::Falling, "airborne until first contact");

        body.collided = true;
        ctl.apply(&mut body, &IDLE);
        assert_eq!(ctl.state(), JumpState::Standing);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn jump_activates_in_the_same_frame() {
        let (mut ctl, mut body) = standing_controller();
        ctl.apply(&mut body, &JUMP_EDGE);
        // No one-frame lag: the press frame already carries the jump
        // velocity and the state change.
        assert_eq!(ctl.state(), JumpState::Jumping);
        assert_eq!(body.velocity.y, ctl.config().jump_velocity);
        assert!(!body.collided, "press clears the stale contact flag");
    }

    #[test]
    fn walking_off_a_ledge_starts_falling() {
        let (mut ctl, mut body) = standing_controller();
        body.collided = false; // last frame found no support
        ctl.apply(&mut body, &IDLE);
        assert_eq!(ctl.state(), JumpState::Falling);
    }

    #[test]
    fn ballistic_cutoff_limits_jump_height() {
        let (mut ctl, mut body) = standing_controller();
        ctl.apply(&mut body, &JUMP_EDGE);

        let max = ctl.config().max_jump_frames;
        // Hold the button well past the cutoff; contact never happens.
        for _ in 0..max {
            ctl.apply(&mut body, &JUMP_HELD);
        }
        assert_eq!(ctl.state(), JumpState::Falling, "held jump must still cut off");
        // Gravity owns the velocity again from here on.
        let vy = body.velocity.y;
        ctl.apply(&mut body, &JUMP_HELD);
        assert_eq!(body.velocity.y, vy, "no more forced velocity after cutoff");
    }

    #[test]
    fn releasing_early_ends_the_jump() {
        let (mut ctl, mut body) = standing_controller();
        ctl.apply(&mut body, &JUMP_EDGE);
        ctl.apply(&mut body, &JUMP_HELD);
        assert_eq!(ctl.state(), JumpState::Jumping);

        ctl.apply(&mut body, &IDLE);
        assert_eq!(ctl.state(), JumpState::Falling, "variable jump height");
    }

    #[test]
    fn ceiling_hit_cancels_ascent() {
        let (mut ctl, mut body) = standing_controller();
        ctl.apply(&mut body, &JUMP_EDGE);

        body.collided = true; // integrator reported a hit while rising
        ctl.apply(&mut body, &JUMP_HELD);
        assert_eq!(ctl.state(), JumpState::Falling);
    }

    #[test]
    fn horizontal_input_resolves_conflicts_to_zero() {
        let mut ctl = JumpController::new(ControllerConfig::default());
        let mut body = Body::new(Aabb::new(0.0, 0.0, 3.0, 3.0));

        let left = InputState { left: true, ..IDLE };
        ctl.apply(&mut body, &left);
        assert_eq!(body.velocity.x, -ctl.config().horizontal_speed);

        let right = InputState { right: true, ..IDLE };
        ctl.apply(&mut body, &right);
        assert_eq!(body.velocity.x, ctl.config().horizontal_speed);

        let both = InputState { left: true, right: true, ..IDLE };
        ctl.apply(&mut body, &both);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn transition_hook_sees_every_change() {
        let seen: Rc<RefCell<Vec<(JumpState, JumpState)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut ctl = JumpController::new(ControllerConfig::default());
        ctl.set_transition_hook(move |from, to| sink.borrow_mut().push((from, to)));

        let mut body = Body::new(Aabb::new(0.0, 0.0, 3.0, 3.0));
        body.collided = true;
        ctl.apply(&mut body, &IDLE); // Falling -> Standing
        ctl.apply(&mut body, &JUMP_EDGE); // Standing -> Jumping

        let log = seen.borrow();
        assert_eq!(
            &log[..],
            &[
                (JumpState::Falling, JumpState::Standing),
                (JumpState::Standing, JumpState::Jumping),
            ]
        );
    }

    #[test]
    fn full_loop_jump_and_land() {
        // Controller and world wired the intended way: apply input,
        // advance, repeat. The body jumps off a floor and comes back
        // down onto it.
        let mut world = World::new(WorldConfig::default());
        world.spawn_obstacle(Obstacle::new(Aabb::new(0.0, 30.0, 30.0, 3.0)));
        let id = world.spawn_body(Body::new(Aabb::new(4.0, 27.0, 3.0, 3.0)));
        let mut ctl = JumpController::new(ControllerConfig::default());

        // Settle onto the floor first.
        for _ in 0..5 {
            ctl.apply(world.body_mut(id).unwrap(), &IDLE);
            world.advance();
        }
        assert_eq!(ctl.state(), JumpState::Standing);
        let rest_y = world.body(id).unwrap().pos().y;

        // Press and hold for a short hop.
        ctl.apply(world.body_mut(id).unwrap(), &JUMP_EDGE);
        world.advance();
        assert!(world.body(id).unwrap().pos().y < rest_y, "body should rise");
        for _ in 0..2 {
            ctl.apply(world.body_mut(id).unwrap(), &JUMP_HELD);
            world.advance();
        }

        // Release and wait for the landing.
        let mut landed = false;
        for _ in 0..60 {
            ctl.apply(world.body_mut(id).unwrap(), &IDLE);
            world.advance();
            if ctl.state() == JumpState::Standing {
                landed = true;
                break;
            }
        }
        assert!(landed, "body must land again");
        let body = world.body(id).unwrap();
        assert!(body.aabb.bottom() <= 30.0);
        assert_eq!(body.velocity.y, 0.0);
    }
}
