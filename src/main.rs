use anyhow::Context;
use interburbulator::tools::signal::{self, Finish};
use interburbulator::{tools, AppConfig};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_args(std::env::args_os()).with_env_log_filter();
    tools::logging::init(&config.log_filter);

    let mode = config.mode;
    let session = move || {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        interburbulator::run(mode, &mut stdin.lock(), &mut stdout.lock())
    };

    // Ctrl-C is a normal way out: no message, exit status 0.
    match signal::until_interrupted(session, signal::ctrl_c()).await? {
        Finish::Completed(written) => written.context("failed to write to stdout")?,
        Finish::Interrupted => debug!("interrupted by user"),
    }
    Ok(())
}
