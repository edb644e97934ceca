//! Process-wide output flags.
//!
//! The streamed reply itself always goes to stdout so it can be piped.
//! Everything else (spinner, warnings) respects these flags: `--quiet`
//! suppresses progress, `NO_COLOR` turns styling off.

use std::sync::OnceLock;

static FLAGS: OnceLock<Flags> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
struct Flags {
    quiet: bool,
    color: bool,
}

/// Records the CLI flags. Only the first call has any effect.
pub fn init(quiet: bool) {
    let _ = FLAGS.set(Flags {
        quiet,
        color: color_from_env(),
    });
}

pub fn quiet() -> bool {
    flags().quiet
}

pub fn colors_enabled() -> bool {
    flags().color
}

fn flags() -> Flags {
    *FLAGS.get_or_init(|| Flags {
        quiet: false,
        color: color_from_env(),
    })
}

// https://no-color.org/
fn color_from_env() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
