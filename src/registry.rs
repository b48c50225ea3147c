use std::collections::HashMap;

use crate::component::Component;
use crate::components::chip::{
    Adder4008, DecadeCounter4017, DualFlipFlop4013, HexInverter4069, Logger, QuadGate,
    RippleCounter4040, Selector4512, ShiftRegister4094,
};
use crate::components::gate::{Gate, GateOp, NotGate};
use crate::components::sequential::{Counter, FlipFlop};
use crate::components::special::{Clock, Constant, Input, Output};
use crate::error::{Error, Result};
use crate::tristate::Tristate;

/// Constructor for one catalog entry.
pub type Constructor = fn(String) -> Box<dyn Component>;

/// String-keyed component factory. The default catalog is registered at
/// construction; callers may extend it with their own types.
pub struct ComponentRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        let mut registry = ComponentRegistry {
            constructors: HashMap::new(),
        };
        registry.register_default_components();
        registry
    }

    fn register_default_components(&mut self) {
        self.register("input", |name| Box::new(Input::new(name)));
        self.register("output", |name| Box::new(Output::new(name)));
        self.register("clock", |name| Box::new(Clock::new(name)));
        self.register("true", |name| Box::new(Constant::new(name, Tristate::True)));
        self.register("false", |name| {
            Box::new(Constant::new(name, Tristate::False))
        });

        self.register("and", |name| Box::new(Gate::new(name, GateOp::And)));
        self.register("or", |name| Box::new(Gate::new(name, GateOp::Or)));
        self.register("xor", |name| Box::new(Gate::new(name, GateOp::Xor)));
        self.register("nand", |name| Box::new(Gate::new(name, GateOp::Nand)));
        self.register("nor", |name| Box::new(Gate::new(name, GateOp::Nor)));
        self.register("not", |name| Box::new(NotGate::new(name)));

        self.register("flipflop", |name| Box::new(FlipFlop::new(name)));
        self.register("counter", |name| Box::new(Counter::new(name)));

        self.register("4001", |name| Box::new(QuadGate::new(name, GateOp::Nor)));
        self.register("4011", |name| Box::new(QuadGate::new(name, GateOp::Nand)));
        self.register("4030", |name| Box::new(QuadGate::new(name, GateOp::Xor)));
        self.register("4071", |name| Box::new(QuadGate::new(name, GateOp::Or)));
        self.register("4081", |name| Box::new(QuadGate::new(name, GateOp::And)));

        self.register("4008", |name| Box::new(Adder4008::new(name)));
        self.register("4013", |name| Box::new(DualFlipFlop4013::new(name)));
        self.register("4017", |name| Box::new(DecadeCounter4017::new(name)));
        self.register("4040", |name| Box::new(RippleCounter4040::new(name)));
        self.register("4069", |name| Box::new(HexInverter4069::new(name)));
        self.register("4094", |name| Box::new(ShiftRegister4094::new(name)));
        self.register("4512", |name| Box::new(Selector4512::new(name)));

        self.register("logger", |name| Box::new(Logger::new(name)));
    }

    pub fn register(&mut self, type_name: &str, constructor: Constructor) {
        self.constructors.insert(type_name.to_string(), constructor);
    }

    pub fn create(&self, type_name: &str, name: &str) -> Result<Box<dyn Component>> {
        let constructor = self
            .constructors
            .get(type_name)
            .ok_or_else(|| Error::UnknownComponentType(type_name.to_string()))?;
        Ok(constructor(name.to_string()))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        ComponentRegistry::new()
    }
}
