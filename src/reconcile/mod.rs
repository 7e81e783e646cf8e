pub mod aggregator;
pub mod normalizer;
pub mod reconciler;

pub use aggregator::{sum_points, PointsSum, UserId};
pub use normalizer::{normalize, SourceKind};
pub use reconciler::{find_mismatches, Mismatch};
