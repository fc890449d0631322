use std::io::{self, IsTerminal};

use stockroom_cli::{CliConfig, Shell, demo};
use stockroom_inventory::MaterialService;

fn main() -> anyhow::Result<()> {
    let (config, warnings) = CliConfig::from_env();
    stockroom_observability::init(config.log_format);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let seed = if config.seed_demo {
        demo::catalogue()?
    } else {
        Vec::new()
    };
    let service = MaterialService::with_materials(config.service.clone(), seed)?;

    tracing::info!(
        materials = service.repository().len(),
        initial_capacity = config.service.initial_capacity,
        "stockroom shell started"
    );

    let mut shell = Shell::new(service, config.output, io::stdout());
    if io::stdin().is_terminal() {
        shell.run_interactive()
    } else {
        shell.run(io::stdin().lock())
    }
}
