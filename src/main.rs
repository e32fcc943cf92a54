//! lockscreen-fix - display topology switcher
//!
//! CLI entry point, invoked by an external lock-event hook with a single
//! action argument.

use clap::Parser;

use lockscreen_fix::log::default_log_dir;
use lockscreen_fix::{run, Action, RunLogger, SystemDisplayController};

/// Display topology switcher for workstation lock/unlock transitions.
///
/// The invoking hook has no way to consume output or a failure signal, so
/// the whole surface is one positional keyword: no flags, no help text, and
/// exit code 0 on every path.
#[derive(Parser, Debug)]
#[command(
    name = "lockscreen-fix",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Lock-event action: `lock` clones the displays, `unlock` restores the
    /// extended topology after a short settle delay
    #[arg(value_enum, ignore_case = true)]
    action: Option<Action>,

    /// Only the first argument selects the action; whatever the hook passes
    /// after it is accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

fn main() {
    // Unrecognized tokens, flag-like arguments, and a missing argument are
    // all the same silent no-op: no display call, no log entry, exit 0.
    let Ok(cli) = Cli::try_parse() else { return };
    let Some(action) = cli.action else { return };

    let logger = default_log_dir().map(RunLogger::new);
    run(action, &SystemDisplayController, logger.as_ref());
}
