// Domain layer: wire models and ports (interfaces). No transport or config details here.

pub mod model;
pub mod ports;
