// Domain layer: entity models and ports (gateway interfaces).

pub mod model;
pub mod ports;
