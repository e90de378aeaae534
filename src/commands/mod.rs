pub type CmdResult<T> = retable::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod apply;
pub mod plan;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (retable::Result<serde_json::Value>, i32) {
    crate::tty::status("retable is working...");

    match command {
        crate::Commands::Apply(args) => dispatch!(args, global, apply),
        crate::Commands::Plan(args) => dispatch!(args, plan),
    }
}
