// SPDX-License-Identifier: MPL-2.0
use storefront::app::{self, paths, Flags};

const HELP: &str = "\
Storefront

USAGE:
  storefront [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, es)
  --data-dir <DIR>       Directory for pictures and the log file
  --config-dir <DIR>     Directory holding settings.toml
  --backend-url <URL>    Use the HTTP backend at URL
  --offline              Use the in-memory backend
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring arguments {remaining:?}");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        offline: args.contains("--offline"),
    })
}
