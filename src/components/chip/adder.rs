use crate::component::{BaseComponent, Component};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// Operand pins, least significant word first.
const A: [usize; 4] = [6, 4, 2, 0];
const B: [usize; 4] = [5, 3, 1, 14];
const SUM: [usize; 4] = [9, 10, 11, 12];

const PIN_CIN: usize = 8;
const PIN_COUT: usize = 13;

/// 4008 4-bit full adder with carry in and carry out, 16 pins with power
/// on 7 and 15. Any undefined operand bit makes the affected sum and the
/// carry undefined.
pub struct Adder4008 {
    base: BaseComponent,
}

impl Adder4008 {
    pub fn new(name: String) -> Self {
        let mut pins: Vec<Pin> = (0..16).map(|_| Pin::electrical("")).collect();
        for pin in A.into_iter().chain(B) {
            pins[pin] = Pin::input("");
        }
        pins[PIN_CIN] = Pin::input("CIN");
        for pin in SUM {
            pins[pin] = Pin::output("S");
        }
        pins[PIN_COUT] = Pin::output("COUT");
        pins[7] = Pin::electrical("VSS");
        pins[15] = Pin::electrical("VDD");
        Adder4008 {
            base: BaseComponent::new(name, pins),
        }
    }

    fn full_add(a: Tristate, b: Tristate, carry: Tristate) -> (Tristate, Tristate) {
        match (a.to_bool(), b.to_bool(), carry.to_bool()) {
            (Some(a), Some(b), Some(c)) => {
                let sum = a ^ b ^ c;
                let carry = (a && b) || (c && (a ^ b));
                (Tristate::from_bool(sum), Tristate::from_bool(carry))
            }
            _ => (Tristate::Undefined, Tristate::Undefined),
        }
    }

    /// Ripples the carry through all four stages and returns the sums
    /// plus the final carry.
    fn add(&self, eval: &mut Evaluation) -> Result<([Tristate; 4], Tristate)> {
        let mut carry = self.base.input_state(PIN_CIN, eval)?;
        let mut sums = [Tristate::Undefined; 4];
        for bit in 0..4 {
            let a = self.base.input_state(A[bit], eval)?;
            let b = self.base.input_state(B[bit], eval)?;
            let (sum, next_carry) = Self::full_add(a, b, carry);
            sums[bit] = sum;
            carry = next_carry;
        }
        Ok((sums, carry))
    }
}

impl Component for Adder4008 {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        let (sums, carry) = self.add(eval)?;
        if pin == PIN_COUT {
            return Ok(carry);
        }
        SUM.iter()
            .position(|&p| p == pin)
            .map(|bit| sums[bit])
            .ok_or_else(|| Error::out_of_range(self.base.name(), pin))
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        let mut eval = Evaluation::rooted_at(self.base.name());
        let (sums, carry) = self.add(&mut eval)?;
        for bit in 0..4 {
            self.base.propagate_output(SUM[bit], sums[bit])?;
        }
        self.base.propagate_output(PIN_COUT, carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tristate::Tristate::{False, True, Undefined};

    #[test]
    fn test_full_add_truth_table() {
        assert_eq!(Adder4008::full_add(False, False, False), (False, False));
        assert_eq!(Adder4008::full_add(True, False, False), (True, False));
        assert_eq!(Adder4008::full_add(True, True, False), (False, True));
        assert_eq!(Adder4008::full_add(True, True, True), (True, True));
    }

    #[test]
    fn test_full_add_undefined_poisons_result() {
        assert_eq!(
            Adder4008::full_add(Undefined, True, False),
            (Undefined, Undefined)
        );
        assert_eq!(
            Adder4008::full_add(True, False, Undefined),
            (Undefined, Undefined)
        );
    }
}
