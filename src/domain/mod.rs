// Domain layer: core models, the fixed vocabulary and ports (interfaces).
// No external dependencies beyond std/serde/async-trait.

pub mod model;
pub mod ports;
pub mod vocabulary;
