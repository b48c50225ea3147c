use crate::component::{BaseComponent, Component};
use crate::components::sequential::LatchCore;
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Per-half pin assignments, datasheet order.
struct Half {
    clock: usize,
    data: usize,
    set: usize,
    reset: usize,
    q: usize,
    q_bar: usize,
}

const HALVES: [Half; 2] = [
    Half {
        clock: 2,
        data: 4,
        set: 5,
        reset: 3,
        q: 0,
        q_bar: 1,
    },
    Half {
        clock: 10,
        data: 8,
        set: 7,
        reset: 9,
        q: 12,
        q_bar: 11,
    },
];

/// 4013 dual D flip-flop: two owned latch cores behind the 14-pin
/// datasheet layout (power on 6 and 13). The package resolves its own
/// input pins each tick and forwards the sampled values to each core.
pub struct DualFlipFlop4013 {
    base: BaseComponent,
    latches: [LatchCore; 2],
}

impl DualFlipFlop4013 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..14).map(|_| Pin::electrical("")).collect();
        for half in &HALVES {
            pins[half.clock] = Pin::input("CLK");
            pins[half.data] = Pin::input("D");
            pins[half.set] = Pin::input("SET");
            pins[half.reset] = Pin::input("RESET");
            pins[half.q] = Pin::output("Q");
            pins[half.q_bar] = Pin::output("Q|");
        }
        pins[6] = Pin::electrical("VSS");
        pins[13] = Pin::electrical("VDD");
        DualFlipFlop4013 {
            base: BaseComponent::new(name, pins),
            latches: [LatchCore::new(), LatchCore::new()],
        }
    }
}

impl Component for DualFlipFlop4013 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        for (latch, half) in self.latches.iter().zip(&HALVES) {
            if pin == half.q {
                return Ok(latch.q());
            }
            if pin == half.q_bar {
                return Ok(latch.q_bar());
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
        for (latch, half) in self.latches.iter_mut().zip(&HALVES) {
            let clock = self.base.input_state(half.clock, &mut eval)?;
            let data = self.base.input_state(half.data, &mut eval)?;
            let set = self.base.input_state(half.set, &mut eval)?;
            let reset = self.base.input_state(half.reset, &mut eval)?;
            latch.step(clock, data, set, reset);
        }
        for index in 0..HALVES.len() {
            let half = &HALVES[index];
            self.base.propagate_output(half.q, self.latches[index].q())?;
            self.base
                .propagate_output(half.q_bar, self.latches[index].q_bar())?;
        }
        Ok(())
    }
}
