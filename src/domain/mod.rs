// Domain layer: the absence sentinel, the dynamic payload model and the access port.

pub mod model;
pub mod ports;
pub mod sentinel;
pub mod value;
