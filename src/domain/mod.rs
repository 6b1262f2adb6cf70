// Domain layer: records fetched from the course API and the ports used to reach it.

pub mod model;
pub mod ports;
