use crate::component::{BaseComponent, Component};
use crate::components::gate::GateOp;
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Pin;
use crate::tristate::Tristate;

/// One gate unit of a quad package: input pins A and B, output pin Y.
const SECTIONS: [(usize, usize, usize); 4] = [(0, 1, 2), (4, 5, 3), (7, 8, 9), (11, 12, 10)];

/// Quad two-input gate package (4001 NOR, 4011 NAND, 4030 XOR, 4071 OR,
/// 4081 AND). All five share the 14-pin layout above, with power on 6
/// and 13. Each output forwards the package's resolved input values to
/// an owned gate unit.
pub struct QuadGate {
    base: BaseComponent,
    units: [GateOp; 4],
}

impl QuadGate {
    pub fn new(name: String, op: GateOp) -> Self {
        let mut pins: Vec<Pin> = (0..14).map(|_| Pin::electrical("")).collect();
        for (a, b, y) in SECTIONS {
            pins[a] = Pin::input("A");
            pins[b] = Pin::input("B");
            pins[y] = Pin::output("Y");
        }
        pins[6] = Pin::electrical("VSS");
        pins[13] = Pin::electrical("VDD");
        QuadGate {
            base: BaseComponent::new(name, pins),
            units: [op; 4],
        }
    }
}

impl Component for QuadGate {
    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn compute_output(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        for (unit, (a, b, y)) in self.units.iter().zip(SECTIONS) {
            if y == pin {
                let a = self.base.input_state(a, eval)?;
                let b = self.base.input_state(b, eval)?;
                return Ok(unit.apply(a, b));
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
        for (_, _, y) in SECTIONS {
            let value = self.compute_output(y, &mut eval)?;
            self.base.propagate_output(y, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::PinKind;

    #[test]
    fn test_pin_layout() {
        let quad = QuadGate::new("q".to_string(), GateOp::Nor);
        for (a, b, y) in SECTIONS {
            assert_eq!(quad.base().pin(a).unwrap().kind(), PinKind::Input);
            assert_eq!(quad.base().pin(b).unwrap().kind(), PinKind::Input);
            assert_eq!(quad.base().pin(y).unwrap().kind(), PinKind::Output);
        }
        assert_eq!(quad.base().pin(6).unwrap().kind(), PinKind::Electrical);
        assert_eq!(quad.base().pin(13).unwrap().kind(), PinKind::Electrical);
    }

    #[test]
    fn test_power_pins_compute_undefined() {
        let quad = QuadGate::new("q".to_string(), GateOp::Nand);
        for pin in [6, 13] {
            let mut eval = Evaluation::new();
            assert_eq!(quad.compute(pin, &mut eval).unwrap(), Tristate::Undefined);
        }
    }

    #[test]
    fn test_unlinked_nor_section_reads_undefined() {
        // NOR(U, U) is Undefined; NAND(U, U) likewise.
        let quad = QuadGate::new("q".to_string(), GateOp::Nor);
        let mut eval = Evaluation::new();
        assert_eq!(quad.compute(2, &mut eval).unwrap(), Tristate::Undefined);
    }
}
