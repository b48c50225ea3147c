use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Data input pin for each channel X0..X7.
const CHANNELS: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 8];

const PIN_INHIBIT: usize = 9;
const PIN_A: usize = 10; // select LSB
const PIN_B: usize = 11;
const PIN_C: usize = 12; // select MSB
const PIN_OUT: usize = 13;
const PIN_DISABLE: usize = 14; // three-state disable, active high

/// 4512 8-input data selector, 16 pins with power on 7 and 15. The
/// output mirrors the addressed channel; inhibit forces it low, the
/// three-state disable pin forces high impedance, and an undefined
/// select address yields an undefined output.
pub struct Selector4512 {
    base: BaseComponent,
}

impl Selector4512 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..16).map(|_| Pin::electrical("")).collect();
        for pin in CHANNELS {
            pins[pin] = Pin::input("X");
        }
        pins[PIN_INHIBIT] = Pin::input("INH");
        pins[PIN_A] = Pin::input("A");
        pins[PIN_B] = Pin::input("B");
        pins[PIN_C] = Pin::input("C");
        pins[PIN_DISABLE] = Pin::input("OE|");
        pins[PIN_OUT] = Pin::output("Z");
        pins[7] = Pin::electrical("VSS");
        pins[15] = Pin::electrical("VDD");
        Selector4512 {
            base: BaseComponent::new(name, pins),
        }
    }
}

impl Component for Selector4512 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        if pin != PIN_OUT {
            return Err(Error::out_of_range(self.base.name(), pin));
        }
        if self.base.input_state(PIN_DISABLE, eval)? == Tristate::True {
            return Ok(Tristate::Undefined);
        }
        if self.base.input_state(PIN_INHIBIT, eval)? == Tristate::True {
            return Ok(Tristate::False);
        }

        let a = self.base.input_state(PIN_A, eval)?;
        let b = self.base.input_state(PIN_B, eval)?;
        let c = self.base.input_state(PIN_C, eval)?;
        match (a.to_bool(), b.to_bool(), c.to_bool()) {
            (Some(a), Some(b), Some(c)) => {
                let address = usize::from(a) | usize::from(b) << 1 | usize::from(c) << 2;
                self.base.input_state(CHANNELS[address], eval)
            }
            _ => Ok(Tristate::Undefined),
        }
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        let mut eval = Evaluation::rooted_at(self.base.name());
        let value = self.compute_output(PIN_OUT, &mut eval)?;
        self.base.propagate_output(PIN_OUT, value)
    }
}
