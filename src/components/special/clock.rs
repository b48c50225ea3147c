use crate::component::{BaseComponent, Component, Role, Writable};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Free-running source: toggles its output every tick. A queued external
/// write replaces the value for one tick and suppresses that tick's
/// toggle. An undefined clock stays undefined until seeded.
pub struct Clock {
    base: BaseComponent,
    value: Tristate,
    value_was_set: bool,
}

impl Clock {
    pub fn new(name: String) -> Self {
        Clock {
            base: BaseComponent::new(name, vec![Pin::output("")]),
            value: Tristate::Undefined,
            value_was_set: false,
        }
    }
}

impl Writable for Clock {
    fn set_value(&mut self, value: Tristate) {
        self.value = value;
        self.value_was_set = true;
        self.base.set_pin_state(0, value);
    }
}

impl Component for Clock {
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
        if self.value_was_set {
            self.value_was_set = false;
        } else if self.value.is_defined() {
            self.value = !self.value;
        }
        self.base.propagate_output(0, self.value)
    }

    fn writable(&mut self) -> Option<&mut dyn Writable> {
        Some(self)
    }

    fn role(&self) -> Role {
        Role::Clock
    }
}
