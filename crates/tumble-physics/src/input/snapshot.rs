/// One frame of controller input for one body.
/// Plain data — the kernel never polls devices; an embedding input
/// collaborator fills this in each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move-left button currently held.
    pub left: bool,
    /// Move-right button currently held.
    pub right: bool,
    /// Jump button currently held.
    pub jump_held: bool,
    /// True only on the frame the jump button went from released to
    /// pressed (the "jump edge").
    pub jump_pressed: bool,
}

/// Derives jump edges from raw held flags by comparing against the
/// previous frame, so embedders that only know "is the key down" can
/// still produce correct `InputState`s.
#[derive(Debug, Clone, Default)]
pub struct ButtonTracker {
    prev_jump: bool,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn this frame's held flags into a full snapshot.
    pub fn snapshot(&mut self, left: bool, right: bool, jump: bool) -> InputState {
        let jump_pressed = jump && !self.prev_jump;
        self.prev_jump = jump;
        InputState {
            left,
            right,
            jump_held: jump,
            jump_pressed,
        }
    }
}
