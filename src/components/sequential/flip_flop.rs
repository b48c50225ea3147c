use crate::component::{BaseComponent, Component};
use crate::components::sequential::latch::LatchCore;
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Standalone edge-triggered D flip-flop: CLK 0, D 1, SET 2, RESET 3,
/// Q 4, Q̄ 5.
pub struct FlipFlop {
    base: BaseComponent,
    latch: LatchCore,
}

impl FlipFlop {
    pub const PIN_CLK: usize = 0;
    pub const PIN_D: usize = 1;
    pub const PIN_SET: usize = 2;
    pub const PIN_RESET: usize = 3;
    pub const PIN_Q: usize = 4;
    pub const PIN_Q_BAR: usize = 5;

    pub fn new(name: String) -> Self {
        FlipFlop {
            base: BaseComponent::new(
                name,
                vec![
                    Pin::input("CLK"),
                    Pin::input("D"),
                    Pin::input("SET"),
                    Pin::input("RESET"),
                    Pin::output("Q"),
                    Pin::output("Q|"),
                ],
            ),
            latch: LatchCore::new(),
        }
    }
}

impl Component for FlipFlop {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        match pin {
            Self::PIN_Q => Ok(self.latch.q()),
            Self::PIN_Q_BAR => Ok(self.latch.q_bar()),
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
        let data = self.base.input_state(Self::PIN_D, &mut eval)?;
        let set = self.base.input_state(Self::PIN_SET, &mut eval)?;
        let reset = self.base.input_state(Self::PIN_RESET, &mut eval)?;

        self.latch.step(clock, data, set, reset);

        self.base.propagate_output(Self::PIN_Q, self.latch.q())?;
        self.base.propagate_output(Self::PIN_Q_BAR, self.latch.q_bar())
    }
}
