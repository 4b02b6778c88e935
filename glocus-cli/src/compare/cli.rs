use clap::{Arg, ArgAction, Command};

pub const COMPARE_CMD: &str = "compare";

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .author("Databio")
        .about("Evaluate every relation between two loci, e.g. chr1:100-200 and chr1:150-300")
        .arg_required_else_help(true)
        .arg(Arg::new("a").required(true).help("First locus (contig:start-end)"))
        .arg(Arg::new("b").required(true).help("Second locus (contig:start-end)"))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
}
