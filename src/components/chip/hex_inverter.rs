use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Inverter stages as (input, output) pin pairs.
const STAGES: [(usize, usize); 6] = [(0, 1), (2, 3), (4, 5), (8, 7), (10, 9), (12, 11)];

/// 4069 hex inverter, 14 pins with power on 6 and 13.
pub struct HexInverter4069 {
    base: BaseComponent,
}

impl HexInverter4069 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..14).map(|_| Pin::electrical("")).collect();
        for (a, y) in STAGES {
            pins[a] = Pin::input("A");
            pins[y] = Pin::output("Y");
        }
        pins[6] = Pin::electrical("VSS");
        pins[13] = Pin::electrical("VDD");
        HexInverter4069 {
            base: BaseComponent::new(name, pins),
        }
    }
}

impl Component for HexInverter4069 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        for (a, y) in STAGES {
            if y == pin {
                return Ok(!self.base.input_state(a, eval)?);
            }
        }
        Err(Error::out_of_range(self.base.name(), pin))
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        let mut eval = Evaluation::rooted_at(self.base.name());
        for (_, y) in STAGES {
            let value = self.compute_output(y, &mut eval)?;
            self.base.propagate_output(y, value)?;
        }
        Ok(())
    }
}
