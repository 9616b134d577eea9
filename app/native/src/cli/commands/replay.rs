//! Replays a script of UI events against a site.
//!
//! Time in a replay is virtual: `advance` steps move a manual clock, so a
//! script reproduces debounce behaviour exactly and instantly.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::context::SiteOptions;
use crate::cli::output;
use crate::error::GitinbitError;
use crate::site::Site;
use crate::state::{UiState, ViewKind};
use crate::throttle::ManualClock;

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum Step {
    /// Report a new viewport width.
    Resize { width: u32 },
    /// Move the clock forward and fire due timers.
    Advance { ms: u64 },
    /// Enter a view.
    View { view: ViewKind },
    /// Dispatch a raw action.
    Dispatch { action: serde_json::Value },
}

/// What happened while replaying.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub initial: UiState,
    /// State after every notification, in order.
    pub changes: Vec<UiState>,
    /// Steps the store rejected, with the reason.
    pub rejected: Vec<String>,
    #[serde(rename = "final")]
    pub final_state: UiState,
}

/// Parses a script.
///
/// # Errors
///
/// Returns an error if the script is not a JSON array of steps.
pub fn parse_script(json: &str) -> Result<Vec<Step>, GitinbitError> { Ok(serde_json::from_str(json)?) }

/// Runs `steps` against `site`, advancing `clock` for `advance` steps.
pub fn replay(site: &mut Site<ManualClock>, clock: &ManualClock, steps: &[Step]) -> ReplayReport {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let subscription = site.store().subscribe(move |state| sink.borrow_mut().push(*state));

    let initial = site.state();
    let mut rejected = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        tracing::debug!(index, step = ?step, "replaying step");
        match step {
            Step::Resize { width } => site.resize(*width),
            Step::Advance { ms } => {
                clock.advance(Duration::from_millis(*ms));
                site.tick();
            }
            Step::View { view } => site.enter_view(*view),
            Step::Dispatch { action } => {
                if let Err(err) = site.store().dispatch_raw(action) {
                    rejected.push(format!("step {index}: {err}"));
                }
            }
        }
    }

    site.store().unsubscribe(subscription);
    let changes = changes.take();
    ReplayReport { initial, changes, rejected, final_state: site.state() }
}

fn read_script(path: &Path) -> Result<String, GitinbitError> {
    if path == Path::new("-") {
        let mut script = String::new();
        io::stdin().read_to_string(&mut script)?;
        return Ok(script);
    }
    Ok(fs::read_to_string(path)?)
}

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the script or the site cannot be loaded.
pub fn execute(options: &SiteOptions, script: &Path, width: u32) -> Result<(), GitinbitError> {
    let steps = parse_script(&read_script(script)?)?;
    let clock = ManualClock::new();
    let mut site = options.load_site(clock.clone(), width)?;

    let report = replay(&mut site, &clock, &steps);
    site.shutdown();
    output::print_json(&report)
}
