use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::Console;
use crate::views::Route;

/// Resolve a console path against the stored session
pub fn handle(path: &str, console: &mut Console) -> anyhow::Result<()> {
    let requested = Route::parse(path);
    let resolved = console.resolve(requested.clone());

    let message = match &resolved {
        Route::NotFound(path) => format!("{}: page not found", path),
        route if *route == requested => format!("{} is open", route),
        route => format!("{} redirects to {}", requested, route),
    };
    output_success(
        &console.output_format,
        &message,
        Some(json!({
            "requested": requested.path(),
            "resolved": resolved.path(),
            "authenticated": console.state.auth.is_authenticated(),
        })),
    )
}
