// Domain layer: the property cell and the scenario model built on top of it.

pub mod property;
pub mod scenario;
