mod args;
mod value_enum;

use clap::Parser;

use dirlist_domain::config::Config;

pub use args::Args;
pub use value_enum::FormatArg;

/// Parse CLI arguments and materialise a domain [`Config`].
pub fn load_config() -> Config {
    build_config(Args::parse())
}

/// Convert parsed CLI arguments into a domain configuration.
pub fn build_config(args: Args) -> Config {
    Config {
        root: args.root,
        include_hash: args.hash,
        include_subfolders: args.recursive,
        keep_going: args.keep_going,
        quiet: args.quiet,
        format: args.format.into(),
        sort_specs: args.sort.map_or_else(Vec::new, |spec| spec.0),
        output: args.output,
        types_file: args.types,
    }
}
