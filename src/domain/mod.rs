// Domain layer: the catalog record and the resource port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
