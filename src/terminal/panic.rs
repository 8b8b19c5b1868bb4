//! Panic hook that restores the terminal before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then defers to the
/// previously installed hook.
///
/// Call after `color_eyre::install()` so its report is the one chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
