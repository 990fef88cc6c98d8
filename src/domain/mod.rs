// Domain layer: catalog models and the console port. No I/O lives here.

pub mod model;
pub mod ports;
