// SPDX-License-Identifier: MPL-2.0
use focal_lens::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
focal_lens: focal length equivalence calculator

USAGE:
  focal_lens [OPTIONS] [IMAGE]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --sensor <id>        Sensor: full-frame, aps-c-canon, aps-c-nikon-sony,
                       micro-four-thirds, one-inch
  --focal <mm>         Physical focal length in millimeters
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help

ARGS:
  <IMAGE>              Image shown in the field-of-view preview
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        sensor: args.opt_value_from_str("--sensor")?,
        focal: args.opt_value_from_str("--focal")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        image_path: args.opt_free_from_os_str(|raw| Ok::<_, String>(PathBuf::from(raw)))?,
    };

    for extra in args.finish() {
        log::warn!("Ignoring unexpected argument {extra:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,focal_lens=info"))
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
