// Domain layer - entities, value objects, survey catalog, report math.
// No dependencies on other layers.

pub mod catalog;
pub mod entities;
pub mod reporting;
pub mod value_objects;
