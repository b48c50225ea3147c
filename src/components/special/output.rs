use crate::component::{BaseComponent, Component, Role};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Observation probe: a single input pin whose value is whatever drives
/// it. Listed in the `output(s):` section of the circuit display.
pub struct Output {
    base: BaseComponent,
}

impl Output {
    pub fn new(name: String) -> Self {
        Output {
            base: BaseComponent::new(name, vec![Pin::input("")]),
        }
    }
}

impl Component for Output {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, _pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        // No output pins; the probe's only pin is an input.
        Ok(Tristate::Undefined)
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        Ok(())
    }

    fn role(&self) -> Role {
        Role::Output
    }
}
