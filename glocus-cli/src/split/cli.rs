use clap::{Arg, Command};

pub const SPLIT_CMD: &str = "split";

pub fn create_split_cli() -> Command {
    Command::new(SPLIT_CMD)
        .author("Databio")
        .about("Split a page of loci into two halves the way an index page split would")
        .arg_required_else_help(true)
        .arg(
            Arg::new("loci")
                .required(true)
                .help("File with one locus per line (optionally gzipped)"),
        )
}
