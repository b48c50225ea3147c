use crate::tristate::Tristate;

/// Edge-triggered D latch core shared by the standalone flip-flop and the
/// dual-latch chip: persisted Q/Q̄ plus the clock value sampled on the
/// previous tick. Asynchronous set/reset override the clocked path; with
/// both asserted, both outputs are forced True.
#[derive(Debug, Clone)]
pub struct LatchCore {
    q: Tristate,
    q_bar: Tristate,
    last_clock: Tristate,
}

impl LatchCore {
    pub fn new() -> Self {
        LatchCore {
            q: Tristate::False,
            q_bar: Tristate::True,
            last_clock: Tristate::Undefined,
        }
    }

    /// Applies one tick's worth of sampled inputs. Data is captured only
    /// on a False→True transition of the clock relative to the previous
    /// tick's sample.
    pub fn step(&mut self, clock: Tristate, data: Tristate, set: Tristate, reset: Tristate) {
        if set == Tristate::True && reset == Tristate::True {
            self.q = Tristate::True;
            self.q_bar = Tristate::True;
        } else if reset == Tristate::True {
            self.q = Tristate::False;
            self.q_bar = Tristate::True;
        } else if set == Tristate::True {
            self.q = Tristate::True;
            self.q_bar = Tristate::False;
        } else if self.last_clock == Tristate::False && clock == Tristate::True {
            self.q = data;
            self.q_bar = !data;
        }
        self.last_clock = clock;
    }

    pub fn q(&self) -> Tristate {
        self.q
    }

    pub fn q_bar(&self) -> Tristate {
        self.q_bar
    }
}

impl Default for LatchCore {
    fn default() -> Self {
        LatchCore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tristate::Tristate::{False, True, Undefined};

    #[test]
    fn test_captures_on_rising_edge_only() {
        let mut latch = LatchCore::new();
        latch.step(False, True, False, False);
        assert_eq!(latch.q(), False); // no edge yet
        latch.step(True, True, False, False);
        assert_eq!(latch.q(), True); // rising edge captures
        assert_eq!(latch.q_bar(), False);
        latch.step(True, False, False, False);
        assert_eq!(latch.q(), True); // held while clock stays high
        latch.step(False, False, False, False);
        assert_eq!(latch.q(), True); // held through falling edge
    }

    #[test]
    fn test_undefined_to_true_is_not_an_edge() {
        let mut latch = LatchCore::new();
        latch.step(True, True, False, False);
        assert_eq!(latch.q(), False);
    }

    #[test]
    fn test_async_set_and_reset() {
        let mut latch = LatchCore::new();
        latch.step(False, Undefined, True, False);
        assert_eq!((latch.q(), latch.q_bar()), (True, False));
        latch.step(False, Undefined, False, True);
        assert_eq!((latch.q(), latch.q_bar()), (False, True));
        // Both asserted forces both outputs high.
        latch.step(False, Undefined, True, True);
        assert_eq!((latch.q(), latch.q_bar()), (True, True));
    }

    #[test]
    fn test_undefined_data_captured_as_undefined() {
        let mut latch = LatchCore::new();
        latch.step(False, Undefined, False, False);
        latch.step(True, Undefined, False, False);
        assert_eq!(latch.q(), Undefined);
        assert_eq!(latch.q_bar(), Undefined);
    }
}
