//! Run configuration types deserialized from `vfpga.toml`.

use serde::Deserialize;

/// The resolved configuration for one back-end invocation.
///
/// Only `[fabric]` is required; every other section has spec-matching
/// defaults, so a minimal `[fabric]`-only file is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Fabric dimensions and hard-block column placement.
    pub fabric: FabricConfig,
    /// Placer PRNG seed and annealing schedule overrides.
    #[serde(default)]
    pub placement: PlacementConfig,
    /// Router iteration cap and congestion-cost schedule.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Timing analyzer delay overrides.
    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_bram_column() -> u32 {
    3
}

fn default_dsp_column() -> u32 {
    7
}

/// Fabric dimensions and the columns holding hard-block tiles.
#[derive(Debug, Clone, Deserialize)]
pub struct FabricConfig {
    /// Fabric width in tiles.
    pub width: u32,
    /// Fabric height in tiles.
    pub height: u32,
    /// Column index holding BRAM tiles.
    #[serde(default = "default_bram_column")]
    pub bram_column: u32,
    /// Column index holding DSP tiles.
    #[serde(default = "default_dsp_column")]
    pub dsp_column: u32,
}

/// PRNG seed and annealing schedule overrides for the placer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Seed for the placer's PRNG. Fixing this makes a run reproducible.
    pub seed: u64,
    /// Overrides the `100 * sqrt(N)` initial temperature when set.
    pub initial_temp_override: Option<f64>,
    /// Per-outer-step temperature multiplier.
    pub cooling_rate: f64,
    /// Inner moves per temperature step, as a multiplier of block count.
    pub moves_per_temp_multiplier: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            initial_temp_override: None,
            cooling_rate: 0.95,
            moves_per_temp_multiplier: 10,
        }
    }
}

/// Iteration cap and congestion-cost schedule for the router.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Iteration cap before routing is declared divergent.
    pub max_iterations: usize,
    /// Starting present-congestion cost multiplier.
    pub initial_pres_fac: f64,
    /// Per-iteration growth factor applied to the present-congestion cost.
    pub pres_fac_growth: f64,
    /// Per-iteration increment applied to a contended node's history cost.
    pub hist_fac: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            initial_pres_fac: 0.5,
            pres_fac_growth: 1.5,
            hist_fac: 1.0,
        }
    }
}

/// Delay constant overrides for static timing analysis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// The 4-LUT logic delay, in picoseconds.
    pub lut_delay_ps: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            lut_delay_ps: 200.0,
        }
    }
}
