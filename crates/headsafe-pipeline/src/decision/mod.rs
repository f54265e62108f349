pub mod label;
pub mod scorer;
pub mod threshold;

pub use label::{decide, ImpactLabel};
pub use scorer::score;
pub use threshold::ThresholdControl;
