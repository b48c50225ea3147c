//! The component catalog. Everything here implements the
//! [`Component`](crate::component::Component) contract and is registered
//! under its catalog identifier in the
//! [`ComponentRegistry`](crate::registry::ComponentRegistry).

pub mod chip;
pub mod gate;
pub mod sequential;
pub mod special;
