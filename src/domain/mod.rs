// Domain layer: the person record and the ports adapters implement.

pub mod model;
pub mod ports;
