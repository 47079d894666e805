// Domain layer: vacancy/salary models, ports and pure services. No HTTP here.

pub mod model;
pub mod ports;

pub mod services;
