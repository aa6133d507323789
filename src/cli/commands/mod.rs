pub mod allocation;
pub mod preferences;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command, in the order `help` lists them.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in allocation::definitions()
        .into_iter()
        .chain(preferences::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
