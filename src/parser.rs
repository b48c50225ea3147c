//! Netlist text loader.
//!
//! Two sections introduced by `.chipsets:` and `.links:`; chipset lines
//! are `<type> <name>`, link lines are `<name1>:<pin1> <name2>:<pin2>`
//! with 1-indexed pin numbers; `#` starts a comment. Loading is
//! fail-fast: the circuit is built fresh and only returned when the
//! whole file applied, so a malformed file never leaves partial state
//! behind.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Chipsets,
    Links,
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<Circuit> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .map_err(|error| Error::parsing(0, format!("cannot open netlist file: {error}")))?;
    parse_str(&source)
}

pub fn parse_str(source: &str) -> Result<Circuit> {
    let mut circuit = Circuit::new();
    let mut section = Section::None;
    let mut links = 0usize;

    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        match line {
            ".chipsets:" => {
                section = Section::Chipsets;
                continue;
            }
            ".links:" => {
                section = Section::Links;
                continue;
            }
            _ => {}
        }

        match section {
            Section::None => {
                return Err(Error::parsing(
                    number,
                    format!("statement outside of a section: {line}"),
                ))
            }
            Section::Chipsets => parse_chipset(&mut circuit, number, line)?,
            Section::Links => {
                parse_link(&mut circuit, number, line)?;
                links += 1;
            }
        }
    }

    if circuit.is_empty() {
        return Err(Error::parsing(0, "no chipsets found in the netlist"));
    }
    debug!(components = circuit.len(), links, "netlist loaded");
    Ok(circuit)
}

fn parse_chipset(circuit: &mut Circuit, number: usize, line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(type_name), Some(name), None) => circuit.add_component(type_name, name),
        _ => Err(Error::parsing(
            number,
            format!("invalid chipset definition: {line}"),
        )),
    }
}

fn parse_link(circuit: &mut Circuit, number: usize, line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let (end1, end2) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(end1), Some(end2), None) => (end1, end2),
        _ => {
            return Err(Error::parsing(
                number,
                format!("invalid link definition: {line}"),
            ))
        }
    };
    let (name1, pin1) = parse_endpoint(number, end1)?;
    let (name2, pin2) = parse_endpoint(number, end2)?;
    circuit.set_link(name1, pin1, name2, pin2)
}

/// Splits `name:pin` and converts the 1-indexed file pin to the
/// 0-indexed model; pin number 0 is malformed, not a wraparound.
fn parse_endpoint(number: usize, token: &str) -> Result<(&str, usize)> {
    let (name, pin) = token
        .split_once(':')
        .ok_or_else(|| Error::parsing(number, format!("invalid link endpoint: {token}")))?;
    if name.is_empty() {
        return Err(Error::parsing(
            number,
            format!("invalid link endpoint: {token}"),
        ));
    }
    let pin: usize = pin
        .parse()
        .map_err(|_| Error::parsing(number, format!("invalid pin number: {token}")))?;
    let pin = pin
        .checked_sub(1)
        .ok_or_else(|| Error::parsing(number, format!("pin numbers start at 1: {token}")))?;
    Ok((name, pin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tristate::Tristate;

    const BASIC: &str = "\
# and gate demo
.chipsets:
input a
input b
and gate
output out

.links:
a:1 gate:1
b:1 gate:2
gate:3 out:1
";

    #[test]
    fn test_parses_sections_and_comments() {
        let circuit = parse_str(BASIC).unwrap();
        assert_eq!(circuit.len(), 4);
        assert!(circuit.component("gate").is_ok());
    }

    #[test]
    fn test_parsed_circuit_simulates() {
        let mut circuit = parse_str(BASIC).unwrap();
        circuit.set_value("a", Tristate::True).unwrap();
        circuit.set_value("b", Tristate::True).unwrap();
        circuit.simulate().unwrap();
        assert_eq!(circuit.compute("out", 0).unwrap(), Tristate::True);
    }

    #[test]
    fn test_statement_outside_section() {
        let err = parse_str("input a\n").unwrap_err();
        assert!(matches!(err, Error::Parsing { line: 1, .. }));
    }

    #[test]
    fn test_invalid_chipset_line() {
        let err = parse_str(".chipsets:\ninput\n").unwrap_err();
        assert!(matches!(err, Error::Parsing { line: 2, .. }));
    }

    #[test]
    fn test_extra_tokens_rejected() {
        let err = parse_str(".chipsets:\ninput a b\n").unwrap_err();
        assert!(matches!(err, Error::Parsing { .. }));
    }

    #[test]
    fn test_link_without_colon() {
        let err = parse_str(".chipsets:\ninput a\n.links:\na1 a:1\n").unwrap_err();
        assert!(matches!(err, Error::Parsing { line: 4, .. }));
    }

    #[test]
    fn test_pin_zero_is_malformed() {
        let err = parse_str(".chipsets:\ninput a\nand g\n.links:\na:0 g:1\n").unwrap_err();
        assert!(matches!(err, Error::Parsing { line: 5, .. }));
    }

    #[test]
    fn test_unknown_type_aborts_load() {
        let err = parse_str(".chipsets:\nwarp w\n").unwrap_err();
        assert!(matches!(err, Error::UnknownComponentType(_)));
    }

    #[test]
    fn test_duplicate_name_aborts_load() {
        let err = parse_str(".chipsets:\ninput a\ninput a\n").unwrap_err();
        assert!(matches!(err, Error::DuplicateComponent(_)));
    }

    #[test]
    fn test_link_to_unknown_component_aborts_load() {
        let err = parse_str(".chipsets:\ninput a\n.links:\na:1 ghost:1\n").unwrap_err();
        assert!(matches!(err, Error::UnknownComponent(_)));
    }

    #[test]
    fn test_empty_netlist_rejected() {
        assert!(matches!(
            parse_str("# nothing here\n"),
            Err(Error::Parsing { .. })
        ));
        assert!(matches!(
            parse_str(".chipsets:\n.links:\n"),
            Err(Error::Parsing { .. })
        ));
    }
}
