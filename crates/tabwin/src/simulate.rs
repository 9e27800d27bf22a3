//! Implementation for the `simulate` subcommand.

use std::{collections::BTreeMap, fs, sync::Arc};

use ron::{Options, extensions::Extensions};
use serde::{Deserialize, Serialize};
use tabwin_engine::{
    Action, DisplayInfo, Engine, Outcome, SimBrowser, SimSetup, TabId, WindowInfo,
};
use tabwin_options::{MemoryStore, OptionKey, OptionValue, OptionsStore};
use tokio::runtime::Builder;
use tracing::info;

use crate::{
    cli::SimulateArgs,
    error::{Error, Result},
};

/// A browser state, an option set and one action to run against them.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub displays: Vec<DisplayInfo>,
    #[serde(default)]
    pub windows: Vec<WindowInfo>,
    #[serde(default)]
    pub current_tab: Option<TabId>,
    /// Option overrides keyed by option name, e.g. `"clone-mode"`.
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
    pub action: Action,
}

/// What the action produced and the browser state it left behind.
#[derive(Debug, Serialize)]
pub struct Report {
    pub outcome: Outcome,
    pub windows: Vec<WindowInfo>,
}

/// Parse a scenario from RON text.
pub fn parse_scenario(text: &str) -> Result<Scenario> {
    Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .with_default_extension(Extensions::UNWRAP_VARIANT_NEWTYPES)
        .from_str(text)
        .map_err(|e| Error::scenario(e.to_string()))
}

/// Run a parsed scenario to completion on a single-threaded runtime.
pub fn execute(scenario: Scenario) -> Result<Report> {
    let changes = scenario
        .options
        .into_iter()
        .map(|(name, value)| name.parse::<OptionKey>().map(|key| (key, value)))
        .collect::<tabwin_options::Result<Vec<_>>>()?;
    let store = Arc::new(MemoryStore::default());
    store.update(&changes)?;

    let sim = SimBrowser::new(SimSetup {
        displays: scenario.displays,
        windows: scenario.windows,
        current_tab: scenario.current_tab,
    });
    let engine = Engine::new(Arc::new(sim.clone()), store);
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let outcome = runtime.block_on(engine.run(scenario.action))?;
    info!(calls = sim.calls().len(), "scenario finished");
    Ok(Report {
        outcome,
        windows: sim.windows_now(),
    })
}

/// Load, run and report a scenario file.
pub fn run(args: &SimulateArgs) -> Result<String> {
    info!(path = %args.scenario.display(), "loading scenario");
    let text = fs::read_to_string(&args.scenario)?;
    let report = execute(parse_scenario(&text)?)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
