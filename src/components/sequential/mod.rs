//! Sequential building blocks: the edge-triggered latch core, the
//! standalone flip-flop, and the minimal decade counter.

pub mod counter;
pub mod flip_flop;
pub mod latch;

pub use counter::Counter;
pub use flip_flop::FlipFlop;
pub use latch::LatchCore;
