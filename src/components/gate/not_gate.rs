use crate::component::{BaseComponent, Component};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Inverter: input on pin 0, inverted result on pin 1.
pub struct NotGate {
    base: BaseComponent,
}

impl NotGate {
    pub const PIN_A: usize = 0;
    pub const PIN_Y: usize = 1;

    pub fn new(name: String) -> Self {
        NotGate {
            base: BaseComponent::new(name, vec![Pin::input("A"), Pin::output("Y")]),
        }
    }
}

impl Component for NotGate {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, _pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        Ok(!self.base.input_state(Self::PIN_A, eval)?)
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        let mut eval = Evaluation::rooted_at(self.base.name());
        let value = self.compute_output(Self::PIN_Y, &mut eval)?;
        self.base.propagate_output(Self::PIN_Y, value)
    }
}
