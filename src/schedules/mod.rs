/*!
Restart schedules.

A schedule meters out an allowance of backtracks.
The expander reports every backtrack; when the allowance runs dry the current
descent is abandoned, nogoods recording the abandoned work are posted on the
way up, and the runner begins a fresh descent from the root.

The trade is the usual one: restarting forgets a possibly unlucky branching
prefix, while the nogoods make sure no subtree is ever explored twice.

Whether a schedule [might restart](RestartsSchedule::might_restart) at all is
a static property, decided at construction --- the runner only sizes the
watch tables and pays the propagation overhead when it might.

Two restarting schedules are provided:
- [LubyRestartsSchedule] recharges the allowance with successive terms of the
  [luby sequence](crate::generic::luby), scaled by a multiplier.
- [GeometricRestartsSchedule] recharges the allowance with a geometrically
  growing value.
*/

use crate::generic::luby::{Luby, LubyTerm};

/// The restart policy consulted by the expander and runner.
pub trait RestartsSchedule {
    /// Whether this schedule could ever request a restart.
    ///
    /// Nogood learning and watch propagation are only set up when so.
    fn might_restart(&self) -> bool;

    /// Note a backtrack.
    fn did_a_backtrack(&mut self);

    /// Whether the current descent should be abandoned.
    fn should_restart(&self) -> bool;

    /// Note a descent has ended; recharge the backtrack allowance.
    fn did_a_restart(&mut self);
}

/// Never restarts.
pub struct NoRestartsSchedule;

impl RestartsSchedule for NoRestartsSchedule {
    fn might_restart(&self) -> bool {
        false
    }

    fn did_a_backtrack(&mut self) {}

    fn should_restart(&self) -> bool {
        false
    }

    fn did_a_restart(&mut self) {}
}

/// Restarts when a luby-scheduled backtrack allowance runs dry.
pub struct LubyRestartsSchedule {
    luby: Luby,
    multiplier: LubyTerm,
    backtracks_remaining: LubyTerm,
}

impl LubyRestartsSchedule {
    /// A multiplier giving frequent early restarts without swamping easy
    /// instances in nogoods.
    pub const DEFAULT_MULTIPLIER: LubyTerm = 660;

    pub fn new(multiplier: LubyTerm) -> Self {
        let mut luby = Luby::default();
        let backtracks_remaining = multiplier * luby.next().unwrap_or(1);
        Self {
            luby,
            multiplier,
            backtracks_remaining,
        }
    }
}

impl Default for LubyRestartsSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MULTIPLIER)
    }
}

impl RestartsSchedule for LubyRestartsSchedule {
    fn might_restart(&self) -> bool {
        true
    }

    fn did_a_backtrack(&mut self) {
        self.backtracks_remaining = self.backtracks_remaining.saturating_sub(1);
    }

    fn should_restart(&self) -> bool {
        self.backtracks_remaining == 0
    }

    fn did_a_restart(&mut self) {
        self.backtracks_remaining = self.multiplier * self.luby.next().unwrap_or(1);
    }
}

/// Restarts when a geometrically growing backtrack allowance runs dry.
pub struct GeometricRestartsSchedule {
    value: f64,
    multiplier: f64,
    backtracks_remaining: u64,
}

impl GeometricRestartsSchedule {
    pub const DEFAULT_INITIAL_VALUE: f64 = 100.0;
    pub const DEFAULT_MULTIPLIER: f64 = 1.5;

    pub fn new(initial_value: f64, multiplier: f64) -> Self {
        Self {
            value: initial_value,
            multiplier,
            backtracks_remaining: initial_value as u64,
        }
    }
}

impl Default for GeometricRestartsSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_VALUE, Self::DEFAULT_MULTIPLIER)
    }
}

impl RestartsSchedule for GeometricRestartsSchedule {
    fn might_restart(&self) -> bool {
        true
    }

    fn did_a_backtrack(&mut self) {
        self.backtracks_remaining = self.backtracks_remaining.saturating_sub(1);
    }

    fn should_restart(&self) -> bool {
        self.backtracks_remaining == 0
    }

    fn did_a_restart(&mut self) {
        self.value *= self.multiplier;
        self.backtracks_remaining = self.value as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_restarts() {
        let mut schedule = NoRestartsSchedule;
        assert!(!schedule.might_restart());
        for _ in 0..100 {
            schedule.did_a_backtrack();
        }
        assert!(!schedule.should_restart());
    }

    #[test]
    fn luby_allowances() {
        // with multiplier 1, allowances follow the luby sequence: 1, 1, 2, …
        let mut schedule = LubyRestartsSchedule::new(1);
        assert!(schedule.might_restart());

        assert!(!schedule.should_restart());
        schedule.did_a_backtrack();
        assert!(schedule.should_restart());

        schedule.did_a_restart();
        schedule.did_a_backtrack();
        assert!(schedule.should_restart());

        schedule.did_a_restart();
        schedule.did_a_backtrack();
        assert!(!schedule.should_restart());
        schedule.did_a_backtrack();
        assert!(schedule.should_restart());
    }

    #[test]
    fn geometric_allowances() {
        let mut schedule = GeometricRestartsSchedule::new(2.0, 2.0);

        schedule.did_a_backtrack();
        assert!(!schedule.should_restart());
        schedule.did_a_backtrack();
        assert!(schedule.should_restart());

        schedule.did_a_restart();
        for _ in 0..3 {
            schedule.did_a_backtrack();
        }
        assert!(!schedule.should_restart());
        schedule.did_a_backtrack();
        assert!(schedule.should_restart());
    }
}
