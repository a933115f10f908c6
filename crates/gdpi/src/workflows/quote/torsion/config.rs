use serde::{Deserialize, Serialize};

/// Dollar ceilings for torsion-spring work on a standard 16x7 door.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionBenchmarks {
    /// Oil-tempered springs quoted without any other torsion-system part.
    pub springs_only_ceiling: f64,
    /// Springs bundled with cables, bearings, drums, shaft, or anchors.
    pub springs_plus_parts_ceiling: f64,
}

impl Default for TorsionBenchmarks {
    fn default() -> Self {
        Self {
            springs_only_ceiling: 675.0,
            springs_plus_parts_ceiling: 700.0,
        }
    }
}
