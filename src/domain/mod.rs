// Domain layer: request/result models and ports. No network or config code here.

pub mod model;
pub mod ports;
