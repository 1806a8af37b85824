/// Drops boundary events that arrive too soon after a boundary transition.
///
/// A single trackpad fling delivers dozens of wheel events; without the
/// guard the second event of the fling already lands on the next region's
/// boundary and the wheel skips a view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryGuard {
    cooldown_ms: f64,
    last_transition_ms: Option<f64>,
}

impl BoundaryGuard {
    /// Create a guard; a cooldown of `0.0` disables it
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms: cooldown_ms.max(0.0),
            last_transition_ms: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cooldown_ms > 0.0
    }

    /// Whether a boundary event at `now_ms` may cause a transition
    pub fn allows(&self, now_ms: f64) -> bool {
        match self.last_transition_ms {
            Some(last) if self.is_enabled() => now_ms - last >= self.cooldown_ms,
            _ => true,
        }
    }

    /// Record a boundary transition at `now_ms`
    pub fn record(&mut self, now_ms: f64) {
        self.last_transition_ms = Some(now_ms);
    }
}
