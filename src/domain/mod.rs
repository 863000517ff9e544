// Domain layer: input collections, build output and the ports around the core.

pub mod model;
pub mod ports;
