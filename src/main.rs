// SPDX-License-Identifier: MPL-2.0
use click_to_save::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
ClickToSave: pick a remote image and save it as PNG or JPEG

USAGE:
  click_to_save [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <id>              Interface language (e.g. en-US, fr)
  --data-dir <dir>         Directory for state and the default Images folder
  --config-dir <dir>       Directory containing settings.toml

ENVIRONMENT:
  CLICK_TO_SAVE_DATA_DIR   Same as --data-dir (the flag wins)
  CLICK_TO_SAVE_CONFIG_DIR Same as --config-dir (the flag wins)
  RUST_LOG                 Log filter (default: info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
