use anyhow::Context;

use stockbook_cli::{Session, ShellConfig, StdinInput, StdoutSink};
use stockbook_infra::FileItemStore;

fn main() -> anyhow::Result<()> {
    let mut config = ShellConfig::from_env();
    stockbook_observability::init(config.log_format);

    // First positional argument overrides the configured data file.
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_data_file(path);
    }

    tracing::info!(
        data_file = %config.data_file.display(),
        policy = ?config.load_policy,
        output = ?config.output,
        log_format = ?config.log_format,
        "starting session"
    );

    let store = FileItemStore::new(&config.data_file).with_policy(config.load_policy);
    let mut input = StdinInput::new(std::io::stdin().lock());
    let mut output = StdoutSink::new(std::io::stdout().lock());

    let report = Session::from_config(store, &config).run(&mut input, &mut output);

    output.flush().context("failed to flush console output")?;

    if report.store_errors > 0 {
        tracing::warn!(
            store_errors = report.store_errors,
            data_file = %config.data_file.display(),
            "data file could not be fully written or read"
        );
    }
    Ok(())
}
