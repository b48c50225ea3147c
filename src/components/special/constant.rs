use crate::component::{BaseComponent, Component};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Fixed source (`true` / `false` catalog entries): one output pin that
/// always presents the same value.
pub struct Constant {
    base: BaseComponent,
    value: Tristate,
}

impl Constant {
    pub fn new(name: String, value: Tristate) -> Self {
        let mut base = BaseComponent::new(name, vec![Pin::output("")]);
        base.set_pin_state(0, value);
        Constant { base, value }
    }
}

impl Component for Constant {
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
}
