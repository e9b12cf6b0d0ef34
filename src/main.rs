// SPDX-License-Identifier: MPL-2.0
use iced_dashboard::app::{self, Flags};
use iced_dashboard::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Invalid --lang value: {err}");
        None
    });
    let role = args.opt_value_from_str("--role").unwrap_or_else(|err| {
        eprintln!("Invalid --role value: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Invalid --config-dir value: {err}");
        None
    });

    config::init_cli_override(config_dir);

    app::run(Flags { lang, role })
}
