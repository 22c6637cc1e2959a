/// Input sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    /// The window asked to close.
    pub quit: bool,
    /// The jump key is held down.
    pub jump: bool,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user closed the window.
    Quit,
    /// The manual player hit an obstacle.
    Collision,
    /// No agent of the population is left alive.
    Extinct,
}

/// State of a session after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session keeps going.
    Running,
    /// The session has ended and must not be ticked again.
    Terminated(Termination),
}

impl SessionStatus {
    /// Whether the session has ended.
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated(_))
    }
}
