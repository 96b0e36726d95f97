// SPDX-License-Identifier: MPL-2.0
use iced_shelf::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        catalog_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .map(PathBuf::from),
    };

    app::run(flags)
}
