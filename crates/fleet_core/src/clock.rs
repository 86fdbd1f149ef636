use bevy_ecs::prelude::Resource;

/// Logical tick counter. The runner advances it once before each schedule run,
/// so during a tick `now()` is the 1-based number of that tick.
#[derive(Debug, Default, Clone, Copy, Resource)]
pub struct SimulationClock {
    now: u64,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn advance(&mut self) -> u64 {
        self.now += 1;
        self.now
    }
}

/// Last tick to run. When present, the runner refuses to advance past it.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationEndTick(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_one_tick_at_a_time() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.advance(), 2);
        assert_eq!(clock.now(), 2);
    }
}
