//! Combinational catalog chips wired through real netlists.

use rusty_logic::{parser, Tristate};

#[test]
fn test_quad_gate_sections() {
    // 4081 quad AND: section 1 on pins 1,2 -> 3, section 4 on 12,13 -> 11.
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4081 quad
output s1
output s4
.links:
vcc:1 quad:1
gnd:1 quad:2
vcc:1 quad:12
vcc:1 quad:13
quad:3 s1:1
quad:11 s4:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("s1", 0).unwrap(), Tristate::False);
    assert_eq!(circuit.compute("s4", 0).unwrap(), Tristate::True);
}

#[test]
fn test_quad_nor_and_nand() {
    let mut circuit = parser::parse_str(
        ".chipsets:
false gnd
4001 nor4
4011 nand4
output qnor
output qnand
.links:
gnd:1 nor4:1
gnd:1 nor4:2
gnd:1 nand4:1
gnd:1 nand4:2
nor4:3 qnor:1
nand4:3 qnand:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("qnor", 0).unwrap(), Tristate::True);
    assert_eq!(circuit.compute("qnand", 0).unwrap(), Tristate::True);
}

#[test]
fn test_hex_inverter_stages() {
    // Stage 1: pin 1 -> 2; stage 4: pin 9 -> 8.
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4069 hex
output y1
output y4
.links:
vcc:1 hex:1
gnd:1 hex:9
hex:2 y1:1
hex:8 y4:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("y1", 0).unwrap(), Tristate::False);
    assert_eq!(circuit.compute("y4", 0).unwrap(), Tristate::True);
}

#[test]
fn test_adder_sums_with_carry() {
    // 3 + 1: A = 0011, B = 0001 -> sum 0100, no carry out.
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4008 add
output s0
output s1
output s2
output s3
output cout
.links:
vcc:1 add:7
vcc:1 add:5
gnd:1 add:3
gnd:1 add:1
vcc:1 add:6
gnd:1 add:4
gnd:1 add:2
gnd:1 add:15
gnd:1 add:9
add:10 s0:1
add:11 s1:1
add:12 s2:1
add:13 s3:1
add:14 cout:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("s0", 0).unwrap(), Tristate::False);
    assert_eq!(circuit.compute("s1", 0).unwrap(), Tristate::False);
    assert_eq!(circuit.compute("s2", 0).unwrap(), Tristate::True);
    assert_eq!(circuit.compute("s3", 0).unwrap(), Tristate::False);
    assert_eq!(circuit.compute("cout", 0).unwrap(), Tristate::False);
}

#[test]
fn test_adder_carry_out() {
    // 15 + 1 overflows into the carry.
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4008 add
output s0
output cout
.links:
vcc:1 add:7
vcc:1 add:5
vcc:1 add:3
vcc:1 add:1
vcc:1 add:6
gnd:1 add:4
gnd:1 add:2
gnd:1 add:15
gnd:1 add:9
add:10 s0:1
add:14 cout:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("s0", 0).unwrap(), Tristate::False);
    assert_eq!(circuit.compute("cout", 0).unwrap(), Tristate::True);
}

#[test]
fn test_adder_undefined_operand_poisons_output() {
    // B0 left unlinked: every sum depends on the ripple carry.
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
4008 add
output s0
.links:
vcc:1 add:7
add:10 s0:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("s0", 0).unwrap(), Tristate::Undefined);
}

#[test]
fn test_selector_addresses_channels() {
    // Address 2 (A=0, B=1, C=0) selects X2 on pin 3.
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4512 mux
output z
.links:
vcc:1 mux:3
gnd:1 mux:11
vcc:1 mux:12
gnd:1 mux:13
gnd:1 mux:10
gnd:1 mux:15
mux:14 z:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("z", 0).unwrap(), Tristate::True);
}

#[test]
fn test_selector_inhibit_and_disable() {
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
input inh
input dis
4512 mux
output z
.links:
vcc:1 mux:1
gnd:1 mux:11
gnd:1 mux:12
gnd:1 mux:13
inh:1 mux:10
dis:1 mux:15
mux:14 z:1
",
    )
    .unwrap();

    circuit.set_value("inh", Tristate::False).unwrap();
    circuit.set_value("dis", Tristate::False).unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("z", 0).unwrap(), Tristate::True);

    // Inhibit forces the output low.
    circuit.set_value("inh", Tristate::True).unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("z", 0).unwrap(), Tristate::False);

    // Three-state disable wins over everything.
    circuit.set_value("dis", Tristate::True).unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("z", 0).unwrap(), Tristate::Undefined);
}

#[test]
fn test_selector_undefined_address() {
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4512 mux
output z
.links:
vcc:1 mux:1
gnd:1 mux:10
gnd:1 mux:15
mux:14 z:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    // Select lines unlinked: the addressed channel is unknowable.
    assert_eq!(circuit.compute("z", 0).unwrap(), Tristate::Undefined);
}

#[test]
fn test_xor_quad_4030() {
    let mut circuit = parser::parse_str(
        ".chipsets:
true vcc
false gnd
4030 quad
output y
.links:
vcc:1 quad:1
gnd:1 quad:2
quad:3 y:1
",
    )
    .unwrap();
    circuit.simulate().unwrap();
    assert_eq!(circuit.compute("y", 0).unwrap(), Tristate::True);
}
