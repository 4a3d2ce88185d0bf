// Domain layer: request/response models and the completion port.

pub mod model;
pub mod ports;
