use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Decoded output pin for each count value (Q0..Q9).
const DECODED: [usize; 10] = [2, 1, 3, 6, 9, 0, 4, 5, 8, 10];

const PIN_CARRY: usize = 11;
const PIN_CP1: usize = 12; // clock enable, active low
const PIN_CP0: usize = 13; // clock
const PIN_MR: usize = 14; // master reset

/// 4017 decade counter with one-of-ten decoded outputs, 16 pins with
/// power on 7 and 15. Advances on a rising CP0 edge while CP1 is low, or
/// a falling CP1 edge while CP0 is high; MR forces the count to zero.
/// The carry output is high for counts 0 through 4.
pub struct DecadeCounter4017 {
    base: BaseComponent,
    count: u8,
    last_cp0: Tristate,
    last_cp1: Tristate,
}

impl DecadeCounter4017 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..16).map(|_| Pin::electrical("")).collect();
        for pin in DECODED {
            pins[pin] = Pin::output("Q");
        }
        pins[PIN_CARRY] = Pin::output("Q5-9");
        pins[PIN_CP1] = Pin::input("CP1");
        pins[PIN_CP0] = Pin::input("CP0");
        pins[PIN_MR] = Pin::input("MR");
        pins[7] = Pin::electrical("VSS");
        pins[15] = Pin::electrical("VDD");
        DecadeCounter4017 {
            base: BaseComponent::new(name, pins),
            count: 0,
            last_cp0: Tristate::Undefined,
            last_cp1: Tristate::Undefined,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    fn decode(&self, pin: usize) -> Tristate {
        if pin == PIN_CARRY {
            return Tristate::from_bool(self.count <= 4);
        }
        Tristate::from_bool(DECODED[self.count as usize] == pin)
    }
}

impl Component for DecadeCounter4017 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, _eval: &mut Evaluation) -> Result<Tristate> {
        if pin == PIN_CARRY || DECODED.contains(&pin) {
            return Ok(self.decode(pin));
        }
        Err(Error::out_of_range(self.base.name(), pin))
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);

        let mut eval = Evaluation::rooted_at(self.base.name());
        let cp0 = self.base.input_state(PIN_CP0, &mut eval)?;
        let cp1 = self.base.input_state(PIN_CP1, &mut eval)?;
        let mr = self.base.input_state(PIN_MR, &mut eval)?;

        if mr == Tristate::True {
            self.count = 0;
        } else {
            let rising_cp0 =
                self.last_cp0 == Tristate::False && cp0 == Tristate::True && cp1 == Tristate::False;
            let falling_cp1 =
                self.last_cp1 == Tristate::True && cp1 == Tristate::False && cp0 == Tristate::True;
            if rising_cp0 || falling_cp1 {
                self.count = (self.count + 1) % 10;
            }
        }
        self.last_cp0 = cp0;
        self.last_cp1 = cp1;

        for pin in DECODED.into_iter().chain([PIN_CARRY]) {
            let value = self.decode(pin);
            self.base.propagate_output(pin, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_table_is_one_hot() {
        let mut counter = DecadeCounter4017::new("dec".to_string());
        for count in 0..10u8 {
            counter.count = count;
            let high: Vec<usize> = DECODED
                .into_iter()
                .filter(|&pin| counter.decode(pin) == Tristate::True)
                .collect();
            assert_eq!(high, vec![DECODED[count as usize]]);
        }
    }

    #[test]
    fn test_carry_covers_first_half() {
        let mut counter = DecadeCounter4017::new("dec".to_string());
        for count in 0..10u8 {
            counter.count = count;
            assert_eq!(
                counter.decode(PIN_CARRY),
                Tristate::from_bool(count <= 4),
                "count {count}"
            );
        }
    }
}
