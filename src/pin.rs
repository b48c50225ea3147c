use std::fmt;

use crate::component::WeakComponent;
use crate::tristate::Tristate;

/// What a pin means to its component. The kind is part of the component's
/// identity and never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKind {
    Input,
    Output,
    /// Power / ground; carries no logical value.
    Electrical,
}

impl PinKind {
    pub fn to_str(self) -> &'static str {
        match self {
            PinKind::Input => "INPUT",
            PinKind::Output => "OUTPUT",
            PinKind::Electrical => "ELECTRICAL",
        }
    }
}

/// One half of a wire: a non-owning reference to the peer component plus
/// the peer's pin index. The peer name is carried alongside the weak
/// handle so the evaluation guard can test identity without locking.
/// The circuit-level link operation creates these in matched pairs.
#[derive(Clone)]
pub struct Link {
    pub name: String,
    pub component: WeakComponent,
    pub pin: usize,
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.pin)
    }
}

/// A typed terminal of a component. `state` is the last value written
/// through propagation, kept for inspection only; demand evaluation never
/// reads it.
#[derive(Debug)]
pub struct Pin {
    kind: PinKind,
    label: &'static str,
    state: Tristate,
    links: Vec<Link>,
}

impl Pin {
    pub fn new(kind: PinKind, label: &'static str) -> Self {
        Pin {
            kind,
            label,
            state: Tristate::Undefined,
            links: Vec::new(),
        }
    }

    pub fn input(label: &'static str) -> Self {
        Pin::new(PinKind::Input, label)
    }

    pub fn output(label: &'static str) -> Self {
        Pin::new(PinKind::Output, label)
    }

    pub fn electrical(label: &'static str) -> Self {
        Pin::new(PinKind::Electrical, label)
    }

    pub fn kind(&self) -> PinKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn state(&self) -> Tristate {
        self.state
    }

    pub fn set_state(&mut self, state: Tristate) {
        self.state = state;
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl Default for Pin {
    fn default() -> Self {
        Pin::new(PinKind::Electrical, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_creation() {
        let pin = Pin::input("CLK");
        assert_eq!(pin.kind(), PinKind::Input);
        assert_eq!(pin.label(), "CLK");
        assert_eq!(pin.state(), Tristate::Undefined);
        assert!(pin.links().is_empty());
    }

    #[test]
    fn test_pin_state_cache() {
        let mut pin = Pin::output("Q");
        pin.set_state(Tristate::True);
        assert_eq!(pin.state(), Tristate::True);
        pin.set_state(Tristate::False);
        assert_eq!(pin.state(), Tristate::False);
    }

    #[test]
    fn test_default_pin_is_electrical() {
        let pin = Pin::default();
        assert_eq!(pin.kind(), PinKind::Electrical);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PinKind::Input.to_str(), "INPUT");
        assert_eq!(PinKind::Output.to_str(), "OUTPUT");
        assert_eq!(PinKind::Electrical.to_str(), "ELECTRICAL");
    }
}
