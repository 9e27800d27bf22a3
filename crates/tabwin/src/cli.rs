//! Command-line interface definitions for tabwin.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use tabwin_geom::{Bounds, CloneMode, WindowKey};

/// Command-line interface for the `tabwin` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tabwin",
    about = "Compute window bounds for moving browser tabs into new windows",
    version
)]
pub struct Cli {
    /// Logging controls shared across tabwin binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Which command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the configured ratios against a display work area.
    Resolve(ResolveArgs),
    /// Compute the bounds of a window cloned beside SOURCE.
    Clone(CloneArgs),
    /// Print the effective option set as JSON.
    Options(OptionsArgs),
    /// Run a RON scenario against the simulated browser.
    Simulate(SimulateArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Display work area as `left,top,width,height`.
    #[arg(long, value_name = "L,T,W,H", allow_hyphen_values = true)]
    pub display: Bounds,

    /// Only resolve this window (original|new); both when omitted.
    #[arg(long, value_name = "WINDOW")]
    pub window: Option<WindowKey>,

    /// Option set (JSON) to resolve against instead of the defaults.
    #[arg(long, value_name = "PATH")]
    pub options: Option<PathBuf>,
}

/// Arguments for the `clone` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CloneArgs {
    /// Bounds of the window being cloned, `left,top,width,height`.
    #[arg(long, value_name = "L,T,W,H", allow_hyphen_values = true)]
    pub source: Bounds,

    /// Display work area, `left,top,width,height`.
    #[arg(long, value_name = "L,T,W,H", allow_hyphen_values = true)]
    pub display: Bounds,

    /// Clone mode: no|same|horizontal|vertical, with or without the
    /// `clone-mode-` prefix.
    #[arg(long, value_name = "MODE", default_value = "horizontal")]
    pub mode: CloneMode,
}

/// Arguments for the `options` subcommand.
#[derive(Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Option set (JSON) to validate and normalize; defaults when omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Scenario file in RON syntax.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,
}
