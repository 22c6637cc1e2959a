//! Events produced while processing one tick.
//!
//! The world records what happened during a pass over the obstacles instead
//! of acting on it immediately. Callers apply removals and rewards after the
//! pass, so no collection is modified while it is being traversed.

/// Something that happened to an obstacle during one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// An obstacle was passed by a player for the first time.
    ObstaclePassed {
        /// Index of the obstacle before retirements were applied.
        obstacle: usize,
    },
    /// A player touched an obstacle.
    Collision {
        /// Index of the player in the slice handed to the world.
        player: usize,
        /// Index of the obstacle before retirements were applied.
        obstacle: usize,
    },
    /// An obstacle scrolled off the left edge and was removed.
    ObstacleRetired {
        /// Last horizontal position of the obstacle.
        x: f32,
    },
    /// A replacement obstacle was created.
    ObstacleSpawned {
        /// Horizontal position of the new obstacle.
        x: f32,
    },
}

/// Queue of the events of one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    events: Vec<TickEvent>,
}

impl TickReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the report.
    pub fn push(&mut self, event: TickEvent) {
        self.events.push(event);
    }

    /// All events in the order they happened.
    pub fn events(&self) -> &[TickEvent] {
        &self.events
    }

    /// Whether any obstacle was passed during the tick.
    pub fn any_passed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::ObstaclePassed { .. }))
    }

    /// Indices of the players that collided, sorted and without duplicates.
    pub fn collided_players(&self) -> Vec<usize> {
        let mut players: Vec<usize> = self
            .events
            .iter()
            .filter_map(|e| match e {
                TickEvent::Collision { player, .. } => Some(*player),
                _ => None,
            })
            .collect();
        players.sort_unstable();
        players.dedup();
        players
    }
}
