use crate::component::{BaseComponent, Component, Role, Writable};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Externally driven source: one output pin presenting the last value
/// written through the circuit's input queue.
pub struct Input {
    base: BaseComponent,
    value: Tristate,
}

impl Input {
    pub fn new(name: String) -> Self {
        Input {
            base: BaseComponent::new(name, vec![Pin::output("")]),
            value: Tristate::Undefined,
        }
    }
}

impl Writable for Input {
    fn set_value(&mut self, value: Tristate) {
        self.value = value;
        self.base.set_pin_state(0, value);
    }
}

impl Component for Input {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, _pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        Ok(self.value)
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        self.base.propagate_output(0, self.value)
    }

    fn writable(&mut self) -> Option<&mut dyn Writable> {
        Some(self)
    }

    fn role(&self) -> Role {
        Role::Input
    }
}
