mod registry;
#[cfg(test)]
mod tests;
pub mod types;

pub use registry::{occupancy_consistent, BuildingRegistry};
pub use types::{BuildingId, BuildingInstance};
