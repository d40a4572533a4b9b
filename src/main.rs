// SPDX-License-Identifier: MPL-2.0
use nightfeed::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
    };

    app::run(flags)
}
