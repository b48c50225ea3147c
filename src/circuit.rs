use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::component::{lock, Component, Role, SharedComponent};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::pin::Link;
use crate::registry::ComponentRegistry;
use crate::tristate::Tristate;

/// The netlist: exclusive owner of every component, tick scheduler, and
/// wiring/input API. Links between components are weak; dropping the
/// circuit (or calling [`Circuit::clear`]) invalidates them all at once.
pub struct Circuit {
    components: HashMap<String, SharedComponent>,
    registry: ComponentRegistry,
    tick: u64,
    pending: HashMap<String, Tristate>,
}

impl std::fmt::Debug for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Circuit")
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .field("tick", &self.tick)
            .field("pending", &self.pending)
            .finish()
    }
}

impl Circuit {
    pub fn new() -> Self {
        Circuit::with_registry(ComponentRegistry::new())
    }

    pub fn with_registry(registry: ComponentRegistry) -> Self {
        Circuit {
            components: HashMap::new(),
            registry,
            tick: 0,
            pending: HashMap::new(),
        }
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    /// Constructs a component through the registry and takes ownership.
    pub fn add_component(&mut self, type_name: &str, name: &str) -> Result<()> {
        if self.components.contains_key(name) {
            return Err(Error::DuplicateComponent(name.to_string()));
        }
        let component = self.registry.create(type_name, name)?;
        debug!(type_name, name, "adding component");
        self.components
            .insert(name.to_string(), Arc::new(Mutex::new(component)));
        Ok(())
    }

    pub fn component(&self, name: &str) -> Result<SharedComponent> {
        self.components
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownComponent(name.to_string()))
    }

    /// Wires `name1:pin1` to `name2:pin2` in both directions. Both ends
    /// are validated before either is touched, so a failed call leaves
    /// the netlist exactly as it was.
    pub fn set_link(&mut self, name1: &str, pin1: usize, name2: &str, pin2: usize) -> Result<()> {
        let c1 = self.component(name1)?;
        let c2 = self.component(name2)?;

        let link_to_2 = Link {
            name: name2.to_string(),
            component: Arc::downgrade(&c2),
            pin: pin2,
        };
        let link_to_1 = Link {
            name: name1.to_string(),
            component: Arc::downgrade(&c1),
            pin: pin1,
        };

        if Arc::ptr_eq(&c1, &c2) {
            // Feedback wire onto the same component: lock it once.
            let mut guard = lock(&c1);
            if pin1 >= guard.pin_count() {
                return Err(Error::out_of_range(name1, pin1));
            }
            if pin2 >= guard.pin_count() {
                return Err(Error::out_of_range(name2, pin2));
            }
            guard.set_link(pin1, link_to_2)?;
            guard.set_link(pin2, link_to_1)?;
        } else {
            let mut g1 = lock(&c1);
            let mut g2 = lock(&c2);
            if pin1 >= g1.pin_count() {
                return Err(Error::out_of_range(name1, pin1));
            }
            if pin2 >= g2.pin_count() {
                return Err(Error::out_of_range(name2, pin2));
            }
            g1.set_link(pin1, link_to_2)?;
            g2.set_link(pin2, link_to_1)?;
        }
        Ok(())
    }

    /// Queues an external value for a writable component. The value takes
    /// effect at the start of the next `simulate` call; queueing twice
    /// for the same component keeps the latest value.
    pub fn set_value(&mut self, name: &str, value: Tristate) -> Result<()> {
        let component = self.component(name)?;
        if lock(&component).writable().is_none() {
            return Err(Error::NotWritable(name.to_string()));
        }
        self.pending.insert(name.to_string(), value);
        Ok(())
    }

    /// Runs one tick: applies every queued input value, advances the tick
    /// counter, then simulates every component. Iteration order over the
    /// component map is unspecified and must not affect outcomes.
    pub fn simulate(&mut self) -> Result<()> {
        for (name, value) in std::mem::take(&mut self.pending) {
            if let Some(component) = self.components.get(&name) {
                let mut guard = lock(component);
                if let Some(writable) = guard.writable() {
                    writable.set_value(value);
                }
            }
        }

        self.tick += 1;
        debug!(tick = self.tick, "simulating circuit");
        for component in self.components.values() {
            lock(component).simulate(self.tick)?;
        }
        Ok(())
    }

    /// Top-level demand evaluation of one pin, with a fresh cycle guard.
    pub fn compute(&self, name: &str, pin: usize) -> Result<Tristate> {
        let component = self.component(name)?;
        let mut eval = Evaluation::new();
        let value = lock(&component).compute(pin, &mut eval)?;
        Ok(value)
    }

    /// Renders the current tick and every input/output component value,
    /// sorted by name.
    pub fn render(&self) -> Result<String> {
        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        for (name, component) in &self.components {
            match lock(component).role() {
                Role::Input | Role::Clock => inputs.push(name.clone()),
                Role::Output => outputs.push(name.clone()),
                Role::Chip => {}
            }
        }
        inputs.sort();
        outputs.sort();

        let mut text = format!("tick: {}\n", self.tick);
        text.push_str("input(s):\n");
        for name in &inputs {
            text.push_str(&format!("  {}: {}\n", name, self.compute(name, 0)?));
        }
        text.push_str("output(s):\n");
        for name in &outputs {
            text.push_str(&format!("  {}: {}\n", name, self.compute(name, 0)?));
        }
        Ok(text)
    }

    pub fn display(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn components(&self) -> impl Iterator<Item = (&String, &SharedComponent)> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Tears the whole netlist down: releases every component, which
    /// invalidates all links, and resets the tick counter and the
    /// pending-input queue.
    pub fn clear(&mut self) {
        self.components.clear();
        self.pending.clear();
        self.tick = 0;
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Circuit::new()
    }
}
