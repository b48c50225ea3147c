use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Parallel output pin for each storage bit, Q1 (bit 0) through Q8.
const PARALLEL: [usize; 8] = [3, 4, 5, 6, 13, 12, 11, 10];

const PIN_STROBE: usize = 0;
const PIN_DATA: usize = 1;
const PIN_CLK: usize = 2;
const PIN_QS: usize = 8;
const PIN_QS_DELAYED: usize = 9;
const PIN_OE: usize = 14;

/// 4094 8-stage shift-and-store register, 16 pins with power on 7 and
/// 15. Serial data shifts in on rising clock edges; a rising strobe edge
/// snapshots the shift register into the storage register that drives the
/// parallel outputs. Output-enable low puts the parallel outputs (only)
/// into high impedance; the serial pins keep driving so packages can be
/// cascaded.
pub struct ShiftRegister4094 {
    base: BaseComponent,
    shift: u8,
    storage: u8,
    serial: Tristate,
    serial_delayed: Tristate,
    last_clock: Tristate,
    last_strobe: Tristate,
}

impl ShiftRegister4094 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..16).map(|_| Pin::electrical("")).collect();
        pins[PIN_STROBE] = Pin::input("STR");
        pins[PIN_DATA] = Pin::input("D");
        pins[PIN_CLK] = Pin::input("CP");
        pins[PIN_OE] = Pin::input("OE");
        for pin in PARALLEL {
            pins[pin] = Pin::output("Q");
        }
        pins[PIN_QS] = Pin::output("QS");
        pins[PIN_QS_DELAYED] = Pin::output("QS'");
        pins[7] = Pin::electrical("VSS");
        pins[15] = Pin::electrical("VDD");
        ShiftRegister4094 {
            base: BaseComponent::new(name, pins),
            shift: 0,
            storage: 0,
            serial: Tristate::False,
            serial_delayed: Tristate::False,
            last_clock: Tristate::Undefined,
            last_strobe: Tristate::Undefined,
        }
    }

    fn storage_bit(&self, pin: usize) -> Option<Tristate> {
        PARALLEL
            .iter()
            .position(|&p| p == pin)
            .map(|bit| Tristate::from_bool((self.storage >> bit) & 1 == 1))
    }
}

impl Component for ShiftRegister4094 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        match pin {
            PIN_QS => Ok(self.serial),
            PIN_QS_DELAYED => Ok(self.serial_delayed),
            _ => {
                let bit = self
                    .storage_bit(pin)
                    .ok_or_else(|| Error::out_of_range(self.base.name(), pin))?;
                if self.base.input_state(PIN_OE, eval)? != Tristate::True {
                    return Ok(Tristate::Undefined);
                }
                Ok(bit)
            }
        }
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);

        let mut eval = Evaluation::rooted_at(self.base.name());
        let strobe = self.base.input_state(PIN_STROBE, &mut eval)?;
        let data = self.base.input_state(PIN_DATA, &mut eval)?;
        let clock = self.base.input_state(PIN_CLK, &mut eval)?;

        if self.last_clock == Tristate::False && clock == Tristate::True {
            self.shift = (self.shift << 1) | u8::from(data == Tristate::True);
            self.serial_delayed = self.serial;
            self.serial = Tristate::from_bool((self.shift >> 7) & 1 == 1);
        }
        if self.last_strobe == Tristate::False && strobe == Tristate::True {
            self.storage = self.shift;
        }
        self.last_clock = clock;
        self.last_strobe = strobe;

        for pin in PARALLEL.into_iter().chain([PIN_QS, PIN_QS_DELAYED]) {
            let value = self.compute_output(pin, &mut eval)?;
            self.base.propagate_output(pin, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_bit_mapping() {
        let mut register = ShiftRegister4094::new("sr".to_string());
        register.storage = 0b0000_0001;
        assert_eq!(register.storage_bit(3), Some(Tristate::True)); // Q1
        assert_eq!(register.storage_bit(4), Some(Tristate::False)); // Q2
        register.storage = 0b1000_0000;
        assert_eq!(register.storage_bit(10), Some(Tristate::True)); // Q8
    }

    #[test]
    fn test_parallel_outputs_need_output_enable() {
        // OE is unlinked (Undefined), so parallel outputs read high-Z
        // while the serial pins keep their driven values.
        let register = ShiftRegister4094::new("sr".to_string());
        let mut eval = Evaluation::new();
        assert_eq!(register.compute(3, &mut eval).unwrap(), Tristate::Undefined);
        let mut eval = Evaluation::new();
        assert_eq!(
            register.compute(PIN_QS, &mut eval).unwrap(),
            Tristate::False
        );
    }
}
