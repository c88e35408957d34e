//! Commands listing implementation

use anyhow::Result;
use std::path::Path;

use voxdial::Config;

/// Print the registry: phrases in match order, then contacts
pub fn commands_command(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let resolver = config.resolver()?;
    let registry = resolver.registry();

    println!("Commands ({}):\n", registry.all_commands().len());
    for entry in registry.all_commands() {
        println!("  {:<12} {}", entry.phrase, entry.target);
    }

    let contacts = registry.contacts();
    println!("\nContacts ({}):\n", contacts.len());
    for contact in contacts {
        println!("  call {:<7} tel:{}", contact.name, contact.phone_number);
    }

    println!(
        "\nFuzzy threshold: {} | platform: {}",
        resolver.matcher().threshold(),
        config.platform()
    );

    Ok(())
}
