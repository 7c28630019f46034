mod catalog;
mod tooltip;
pub mod types;


pub use catalog::BlueprintCatalog;
pub use tooltip::{tooltip_lines, tooltip_text};
pub use types::{Blueprint, BlueprintId, Cost, ResourceKind, ResourceRates};
