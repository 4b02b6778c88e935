use clap::{Arg, Command, arg, value_parser};

pub const SEARCH_CMD: &str = "search";

pub const DEFAULT_LEAF_SIZE: usize = 32;

pub fn create_search_cli() -> Command {
    Command::new(SEARCH_CMD)
        .author("Databio")
        .about("Find loci in a file that stand in a given relation to a query locus")
        .arg_required_else_help(true)
        .arg(
            Arg::new("loci")
                .required(true)
                .help("File with one locus per line (optionally gzipped), or '-' for stdin"),
        )
        .arg(arg!(-q --query <query> "The query locus, e.g. chr1:100-200").required(true))
        .arg(
            arg!(-s --strategy <strategy> "Relation to test: left, over_left, overlap, over_right, right, same, contains, contained_by (or <<, &<, &&, &>, >>, ~=, @>, <@)")
                .required(false),
        )
        .arg(
            arg!(--"leaf-size" <size> "Number of loci per leaf page")
                .value_parser(value_parser!(usize))
                .required(false),
        )
}
