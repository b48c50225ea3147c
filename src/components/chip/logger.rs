use std::fs::OpenOptions;
use std::io::Write as _;

use tracing::warn;

use crate::component::{BaseComponent, Component};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

const DATA_PINS: usize = 8;
const PIN_CLK: usize = 8;
const PIN_INHIBIT: usize = 9;

const LOG_PATH: &str = "log.bin";

/// Write-side probe: samples eight data pins on each rising clock edge
/// and, unless inhibited, appends the assembled byte to `log.bin`. A
/// tick with any undefined data bit is skipped. Write failures are
/// reported through the logging layer and never abort the simulation.
pub struct Logger {
    base: BaseComponent,
    last_clock: Tristate,
}

impl Logger {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..DATA_PINS).map(|_| Pin::input("D")).collect();
        pins.push(Pin::input("CLK"));
        pins.push(Pin::input("INH"));
        Logger {
            base: BaseComponent::new(name, pins),
            last_clock: Tristate::Undefined,
        }
    }

    fn append(&self, byte: u8) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_PATH)
            .and_then(|mut file| file.write_all(&[byte]));
        if let Err(error) = result {
            warn!(component = self.base.name(), %error, "failed to append to {LOG_PATH}");
        }
    }
}

impl Component for Logger {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, _pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        // All pins are inputs; nothing is ever derived.
        Ok(Tristate::Undefined)
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);

        let mut eval = Evaluation::rooted_at(self.base.name());
        let clock = self.base.input_state(PIN_CLK, &mut eval)?;
        let inhibit = self.base.input_state(PIN_INHIBIT, &mut eval)?;

        let mut byte = 0u8;
        for bit in 0..DATA_PINS {
            match self.base.input_state(bit, &mut eval)?.to_bool() {
                Some(true) => byte |= 1 << bit,
                Some(false) => {}
                None => {
                    self.last_clock = clock;
                    return Ok(());
                }
            }
        }

        if inhibit == Tristate::False && self.last_clock != Tristate::True && clock == Tristate::True
        {
            self.append(byte);
        }
        self.last_clock = clock;
        Ok(())
    }
}
