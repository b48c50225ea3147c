use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::{Link, Pin, PinKind};
use crate::tristate::Tristate;

/// Shared handle to a component owned by a circuit.
pub type SharedComponent = Arc<Mutex<Box<dyn Component>>>;

/// Non-owning handle stored inside links.
pub type WeakComponent = Weak<Mutex<Box<dyn Component>>>;

/// Locks a component handle. The core is single-threaded, so a poisoned
/// lock can only come from an unwound panic; the data is recovered rather
/// than surfaced as a second failure.
pub fn lock(component: &SharedComponent) -> MutexGuard<'_, Box<dyn Component>> {
    component.lock().unwrap_or_else(PoisonError::into_inner)
}

/// How a component participates in the circuit's display listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Clock,
    Output,
    Chip,
}

/// Capability exposed by components whose value can be driven from the
/// outside (inputs and clocks). Capability dispatch goes through
/// [`Component::writable`] instead of downcasting.
pub trait Writable {
    fn set_value(&mut self, value: Tristate);
}

/// Shared state and wiring behavior every component variant builds on.
pub struct BaseComponent {
    name: String,
    pins: Vec<Pin>,
    last_tick: u64,
}

impl BaseComponent {
    pub fn new(name: String, pins: Vec<Pin>) -> Self {
        BaseComponent {
            name,
            pins,
            last_tick: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn pin(&self, pin: usize) -> Result<&Pin> {
        self.pins
            .get(pin)
            .ok_or_else(|| Error::out_of_range(&self.name, pin))
    }

    pub fn kind_of(&self, pin: usize) -> Result<PinKind> {
        self.pin(pin).map(Pin::kind)
    }

    /// Appends one direction of a wire. The circuit-level operation is
    /// responsible for creating the matching reverse link.
    pub fn add_link(&mut self, pin: usize, link: Link) -> Result<()> {
        if pin >= self.pins.len() {
            return Err(Error::out_of_range(&self.name, pin));
        }
        self.pins[pin].add_link(link);
        Ok(())
    }

    /// Refreshes a pin's cached state without touching links.
    pub fn set_pin_state(&mut self, pin: usize, state: Tristate) {
        if let Some(p) = self.pins.get_mut(pin) {
            p.set_state(state);
        }
    }

    /// Resolves the value currently presented on one of this component's
    /// input pins: the first live link wins, later links are shadowed.
    /// Unlinked inputs and links back into a frame still being resolved
    /// read as `Undefined`.
    pub fn input_state(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        for link in self.pin(pin)?.links() {
            if let Some(peer) = link.component.upgrade() {
                if eval.is_visiting(&link.name) {
                    return Ok(Tristate::Undefined);
                }
                return lock(&peer).compute(link.pin, eval);
            }
        }
        Ok(Tristate::Undefined)
    }

    /// Pushes a freshly computed output value to this pin's cache and to
    /// the cache of every linked peer pin. Peers only refresh display
    /// state here; their own `simulate` is never invoked.
    pub fn propagate_output(&mut self, pin: usize, state: Tristate) -> Result<()> {
        if pin >= self.pins.len() {
            return Err(Error::out_of_range(&self.name, pin));
        }
        self.pins[pin].set_state(state);
        let links: Vec<Link> = self.pins[pin].links().to_vec();
        for link in links {
            if link.name == self.name {
                // Feedback onto one of our own pins; the lock is already held.
                self.set_pin_state(link.pin, state);
            } else if let Some(peer) = link.component.upgrade() {
                lock(&peer).refresh_pin(link.pin, state);
            }
        }
        Ok(())
    }

    pub fn already_ticked(&self, tick: u64) -> bool {
        self.last_tick == tick
    }

    pub fn mark_tick(&mut self, tick: u64) {
        self.last_tick = tick;
    }
}

/// The polymorphic contract every chip implements.
///
/// Variants supply `compute_output` (pure derivation of an output pin) and
/// `simulate` (once-per-tick state mutation). The provided `compute`
/// implements the shared evaluation protocol: pin validation, kind
/// routing, and the reentrancy bracket that makes arbitrary feedback
/// cycles terminate.
pub trait Component: Send {
    fn base(&self) -> &BaseComponent;

    fn base_mut(&mut self) -> &mut BaseComponent;

    /// Derives the current value of one of this component's output pins.
    /// Only called with in-range pins of kind `Output`.
    fn compute_output(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate>;

    /// Advances persisted state for `tick`. Implementations return
    /// immediately when `tick` was already simulated.
    fn simulate(&mut self, tick: u64) -> Result<()>;

    fn writable(&mut self) -> Option<&mut dyn Writable> {
        None
    }

    fn role(&self) -> Role {
        Role::Chip
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn pin_count(&self) -> usize {
        self.base().pin_count()
    }

    fn set_link(&mut self, pin: usize, link: Link) -> Result<()> {
        self.base_mut().add_link(pin, link)
    }

    fn refresh_pin(&mut self, pin: usize, state: Tristate) {
        self.base_mut().set_pin_state(pin, state);
    }

    /// Demand-evaluates one pin. Electrical pins are always `Undefined`;
    /// input pins resolve through their first live link; output pins are
    /// derived by the variant. Re-entry into a component whose frame is
    /// still on the call stack resolves to `Undefined`, which bounds
    /// evaluation on cyclic netlists.
    fn compute(&self, pin: usize, eval: &mut Evaluation) -> Result<Tristate> {
        let kind = self.base().kind_of(pin)?;
        if !eval.enter(self.base().name()) {
            return Ok(Tristate::Undefined);
        }
        let result = match kind {
            PinKind::Electrical => Ok(Tristate::Undefined),
            PinKind::Input => self.base().input_state(pin, eval),
            PinKind::Output => self.compute_output(pin, eval),
        };
        eval.leave(self.base().name());
        result
    }
}
