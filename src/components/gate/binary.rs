use crate::component::{BaseComponent, Component};
use crate::error::Result;
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// The boolean function a two-input gate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOp {
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

impl GateOp {
    pub fn apply(self, a: Tristate, b: Tristate) -> Tristate {
        match self {
            GateOp::And => a & b,
            GateOp::Or => a | b,
            GateOp::Xor => a ^ b,
            GateOp::Nand => !(a & b),
            GateOp::Nor => !(a | b),
        }
    }
}

/// Two-input gate: A on pin 0, B on pin 1, result on pin 2.
pub struct Gate {
    base: BaseComponent,
    op: GateOp,
}

impl Gate {
    pub const PIN_A: usize = 0;
    pub const PIN_B: usize = 1;
    pub const PIN_Y: usize = 2;

    pub fn new(name: String, op: GateOp) -> Self {
        Gate {
            base: BaseComponent::new(name, vec![Pin::input("A"), Pin::input("B"), Pin::output("Y")]),
            op,
        }
    }
}

impl Component for Gate {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, _pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        let a = self.base.input_state(Self::PIN_A, eval)?;
        let b = self.base.input_state(Self::PIN_B, eval)?;
        Ok(self.op.apply(a, b))
    }

    fn simulate(&mut self, tick: u64) -> Result<()> {
        if self.base.already_ticked(tick) {
            return Ok(());
        }
        self.base.mark_tick(tick);
        let mut eval = Evaluation::rooted_at(self.base.name());
        let value = self.compute_output(Self::PIN_Y, &mut eval)?;
        self.base.propagate_output(Self::PIN_Y, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tristate::Tristate::{False, True, Undefined};

    #[test]
    fn test_gate_ops() {
        assert_eq!(GateOp::And.apply(True, True), True);
        assert_eq!(GateOp::And.apply(True, False), False);
        assert_eq!(GateOp::Or.apply(False, False), False);
        assert_eq!(GateOp::Or.apply(False, True), True);
        assert_eq!(GateOp::Xor.apply(True, True), False);
        assert_eq!(GateOp::Xor.apply(True, False), True);
        assert_eq!(GateOp::Nand.apply(True, True), False);
        assert_eq!(GateOp::Nand.apply(False, Undefined), True);
        assert_eq!(GateOp::Nor.apply(False, False), True);
        assert_eq!(GateOp::Nor.apply(True, Undefined), False);
    }

    #[test]
    fn test_gate_ops_with_undefined() {
        assert_eq!(GateOp::And.apply(True, Undefined), Undefined);
        assert_eq!(GateOp::And.apply(False, Undefined), False);
        assert_eq!(GateOp::Or.apply(False, Undefined), Undefined);
        assert_eq!(GateOp::Or.apply(True, Undefined), True);
        assert_eq!(GateOp::Xor.apply(Undefined, Undefined), Undefined);
    }

    #[test]
    fn test_unlinked_gate_computes_undefined() {
        let gate = Gate::new("g".to_string(), GateOp::And);
        let mut eval = Evaluation::new();
        assert_eq!(gate.compute(Gate::PIN_Y, &mut eval).unwrap(), Undefined);
    }
}
