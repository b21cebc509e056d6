// Domain layer: value types and ports. No console or filesystem access here.

pub mod model;
pub mod ports;
