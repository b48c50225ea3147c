use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Minimal decade counter: CLK 0, RESET 1, low count bit on 2, terminal
/// count (nine) on 3. Advances on rising clock edges and wraps mod 10.
pub struct Counter {
    base: BaseComponent,
    count: u8,
    last_clock: Tristate,
}

impl Counter {
    pub const PIN_CLK: usize = 0;
    pub const PIN_RESET: usize = 1;
    pub const PIN_BIT0: usize = 2;
    pub const PIN_NINE: usize = 3;

    pub const MODULUS: u8 = 10;

    pub fn new(name: String) -> Self {
        Counter {
            base: BaseComponent::new(
                name,
                vec![
                    Pin::input("CLK"),
                    Pin::input("RESET"),
                    Pin::output("B0"),
                    Pin::output("TC"),
                ],
            ),
            count: 0,
            last_clock: Tristate::Undefined,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}

impl Component for Counter {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        match pin {
            Self::PIN_BIT0 => Ok(Tristate::from_bool(self.count % 2 == 1)),
            Self::PIN_NINE => Ok(Tristate::from_bool(self.count == Self::MODULUS - 1)),
            _ => Err(Error::out_of_range(self.base.name(), pin)),
        }
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);

        let mut eval = Evaluation::rooted_at(self.base.name());
        let clock = self.base.input_state(Self::PIN_CLK, &mut eval)?;
        let reset = self.base.input_state(Self::PIN_RESET, &mut eval)?;

        if reset == Tristate::True {
            self.count = 0;
        } else if self.last_clock == Tristate::False && clock == Tristate::True {
            self.count = (self.count + 1) % Self::MODULUS;
        }
        self.last_clock = clock;

        let bit0 = self.compute_output(Self::PIN_BIT0, &mut eval)?;
        let nine = self.compute_output(Self::PIN_NINE, &mut eval)?;
        self.base.propagate_output(Self::PIN_BIT0, bit0)?;
        self.base.propagate_output(Self::PIN_NINE, nine)
    }
}
