use anyhow::Context;

use backpack_cli::BackpackConfig;

fn main() -> anyhow::Result<()> {
    let (config, problems) = BackpackConfig::from_env();
    backpack_observability::init_with(&config.tracing);

    for problem in &problems {
        tracing::warn!("{problem}; using default");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    backpack_cli::run(stdin.lock(), stdout.lock(), &config).context("interactive session failed")
}
