//! Boss behaviour states and the event-driven transition table.

/// Where the boss is in its spawn, land, roam, leap cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BossState {
    /// Growing in at the spawn point with simulation off.
    #[default]
    Spawn,
    /// Airborne, gravity off, watching for a surface along its velocity.
    Fall,
    /// Stuck to a surface, rocking along it until the next jump.
    Roam,
    /// Squashing against the surface before a launch.
    Charge,
}

/// What a state tick reports back to the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BossEvent {
    SpawnSettled,
    Landed,
    TargetChosen,
    Launched,
    Respawn,
}

impl BossState {
    pub const ALL: [BossState; 4] = [
        BossState::Spawn,
        BossState::Fall,
        BossState::Roam,
        BossState::Charge,
    ];
}

/// Next state for `event` in `state`. Events a state does not expect leave
/// it where it is.
pub fn transition(state: BossState, event: BossEvent) -> BossState {
    use BossEvent::*;
    use BossState::*;
    match (state, event) {
        (_, Respawn) => Spawn,
        (Spawn, SpawnSettled) => Fall,
        (Fall, Landed) => Roam,
        (Roam, TargetChosen) => Charge,
        (Charge, Launched) => Fall,
        (s, _) => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_follows_table() {
        let mut s = BossState::default();
        assert_eq!(s, BossState::Spawn);
        s = transition(s, BossEvent::SpawnSettled);
        assert_eq!(s, BossState::Fall);
        s = transition(s, BossEvent::Landed);
        assert_eq!(s, BossState::Roam);
        s = transition(s, BossEvent::TargetChosen);
        assert_eq!(s, BossState::Charge);
        s = transition(s, BossEvent::Launched);
        assert_eq!(s, BossState::Fall);
    }

    #[test]
    fn unexpected_events_are_ignored() {
        assert_eq!(transition(BossState::Spawn, BossEvent::Landed), BossState::Spawn);
        assert_eq!(transition(BossState::Fall, BossEvent::Launched), BossState::Fall);
        assert_eq!(transition(BossState::Roam, BossEvent::SpawnSettled), BossState::Roam);
        assert_eq!(transition(BossState::Charge, BossEvent::TargetChosen), BossState::Charge);
    }

    #[test]
    fn respawn_from_anywhere() {
        for s in BossState::ALL {
            assert_eq!(transition(s, BossEvent::Respawn), BossState::Spawn);
        }
    }
}
