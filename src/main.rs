// SPDX-License-Identifier: MPL-2.0
use iced_sentiment::app::{self, paths, Flags};
use iced_sentiment::ui::theming::ThemeMode;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_sentiment=info";

const HELP: &str = "\
iced_sentiment - check the sentiment of a piece of text

USAGE:
  iced_sentiment [OPTIONS]

OPTIONS:
  --live                  Call the MeaningCloud API (needs MEANINGCLOUD_API_KEY)
  --test-mode             Use random sentiments instead of the API
  --config-dir <DIR>      Directory containing settings.toml
  --theme <MODE>          light, dark or system
  -h, --help              Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(error = %err, "invalid arguments");
            eprint!("{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "application failed");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        live: args.contains("--live"),
        test_mode: args.contains("--test-mode"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    })
}
