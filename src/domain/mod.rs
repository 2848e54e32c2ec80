// Domain layer: form inputs, the business model record and the ports the pipeline runs against.

pub mod model;
pub mod ports;
