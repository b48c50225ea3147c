use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Output pin for each counter bit, Q1 (bit 0) through Q12 (bit 11).
const BITS: [usize; 12] = [8, 6, 5, 4, 3, 2, 1, 12, 11, 13, 14, 0];

const PIN_CLK: usize = 9;
const PIN_RESET: usize = 10;

/// 4040 12-bit binary ripple counter, 16 pins with power on 7 and 15.
/// Advances on falling clock edges; reset is asynchronous and dominant.
pub struct RippleCounter4040 {
    base: BaseComponent,
    count: u16,
    last_clock: Tristate,
}

impl RippleCounter4040 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..16).map(|_| Pin::electrical("")).collect();
        for pin in BITS {
            pins[pin] = Pin::output("Q");
        }
        pins[PIN_CLK] = Pin::input("CLK");
        pins[PIN_RESET] = Pin::input("RESET");
        pins[7] = Pin::electrical("VSS");
        pins[15] = Pin::electrical("VDD");
        RippleCounter4040 {
            base: BaseComponent::new(name, pins),
            count: 0,
            last_clock: Tristate::Undefined,
        }
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    fn bit_output(&self, pin: usize) -> Option<Tristate> {
        BITS.iter()
            .position(|&p| p == pin)
            .map(|bit| Tristate::from_bool((self.count >> bit) & 1 == 1))
    }
}

impl Component for RippleCounter4040 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        self.bit_output(pin)
            .ok_or_else(|| Error::out_of_range(self.base.name(), pin))
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);

        let mut eval = Evaluation::rooted_at(self.base.name());
        let clock = self.base.input_state(PIN_CLK, &mut eval)?;
        let reset = self.base.input_state(PIN_RESET, &mut eval)?;

        if reset == Tristate::True {
            self.count = 0;
        } else if self.last_clock == Tristate::True && clock == Tristate::False {
            self.count = (self.count + 1) & 0xFFF;
        }
        self.last_clock = clock;

        for pin in BITS {
            let value = self.bit_output(pin).unwrap_or(Tristate::Undefined);
            self.base.propagate_output(pin, value)?;
        }
        Ok(())
    }
}
