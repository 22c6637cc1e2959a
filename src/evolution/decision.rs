//! Decision functions and what they observe.

/// What an agent sees each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Horizontal position of the agent's player.
    pub x: f32,
    /// Horizontal distance from the player to the relevant obstacle.
    pub distance: f32,
}

impl Observation {
    /// Network input vector.
    pub fn to_inputs(&self) -> [f32; 2] {
        [self.x, self.distance]
    }
}

/// Number of values in an [`Observation`].
pub const NUM_INPUTS: usize = 2;
/// Number of values a decision function produces.
pub const NUM_OUTPUTS: usize = 1;

/// Maps an observation to a jump signal.
///
/// Values above the jump threshold make the agent jump.
pub trait DecisionFn {
    /// Evaluates the decision for one tick.
    fn decide(&self, observation: &Observation) -> f32;
}

impl<F> DecisionFn for F
where
    F: Fn(&Observation) -> f32,
{
    fn decide(&self, observation: &Observation) -> f32 {
        self(observation)
    }
}
