//! The parse → pack → place → route → time → report flow driven by `vfpga run`.

use std::path::{Path, PathBuf};

use vfpga_diagnostics::DiagnosticSink;
use vfpga_fabric::Fabric;
use vfpga_pnr::{AnnealingSchedule, RoutingSchedule};

use crate::GlobalArgs;

/// Name of the run configuration file a project directory is recognised by.
const MANIFEST_NAME: &str = "vfpga.toml";

/// Walks up from `start` to the nearest ancestor holding the run
/// configuration file.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_NAME).exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            format!(
                "no {MANIFEST_NAME} found in {} or any parent directory",
                start.display()
            )
            .into()
        })
}

/// Resolves the project root directory from global CLI args.
///
/// An explicit `--config` wins: a file path resolves to its parent
/// directory, a directory path resolves to itself. Absent that, walks up
/// from the current directory looking for the run configuration file.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let Some(config_arg) = global.config.as_deref() else {
        return find_project_root(&std::env::current_dir()?);
    };

    let path = PathBuf::from(config_arg);
    if path.is_file() {
        Ok(path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    } else {
        Ok(path)
    }
}

/// Renders all diagnostics from a sink to stderr, severity-prefixed.
///
/// Returns the number of diagnostics rendered.
pub fn render_diagnostics(sink: &DiagnosticSink) -> usize {
    let diagnostics = sink.diagnostics();
    for diag in &diagnostics {
        eprintln!("{diag}");
    }
    diagnostics.len()
}

/// Runs the full parse → pack → place → route → time flow for one netlist.
///
/// Reads `netlist_path` as Yosys-style JSON, packs it into logic blocks,
/// builds the fabric described by `config`, places and routes the design,
/// then runs static timing analysis over the result. Diagnostics collected
/// along the way are rendered to stderr by the caller; this function returns
/// the final [`vfpga_timing::TimingResult`].
pub fn run_flow(
    netlist_path: &Path,
    config: &vfpga_config::RunConfig,
    sink: &DiagnosticSink,
) -> Result<vfpga_timing::TimingResult, Box<dyn std::error::Error>> {
    let netlist_text = std::fs::read_to_string(netlist_path)?;
    let cells = vfpga_netlist::parse_netlist_json(&netlist_text)?;
    let blocks = vfpga_netlist::pack(&cells);

    let fabric = Fabric::new(
        config.fabric.width,
        config.fabric.height,
        config.fabric.bram_column,
        config.fabric.dsp_column,
    )?;

    let annealing = AnnealingSchedule {
        cooling_rate: config.placement.cooling_rate,
        moves_per_temp_multiplier: config.placement.moves_per_temp_multiplier,
        initial_temp_override: config.placement.initial_temp_override,
    };
    let placement = vfpga_pnr::place(&fabric, &blocks, config.placement.seed, &annealing, sink)?;

    let routing = RoutingSchedule {
        max_iterations: config.routing.max_iterations,
        initial_pres_fac: config.routing.initial_pres_fac,
        pres_fac_growth: config.routing.pres_fac_growth,
        hist_fac: config.routing.hist_fac,
    };
    let routed = vfpga_pnr::route(&fabric, &blocks, &placement, &routing, sink)?;

    let result = vfpga_timing::analyze(&fabric, &routed, config.timing.lut_delay_ps)?;
    Ok(result)
}
