//! Check command implementation.

use crate::cli::{CheckArgs, ShapeArg};
use crate::error::Result;
use crate::output::Formatter;
use kith_parser::RelationshipParser;

/// Execute the check command: parse only and print what was understood.
pub fn execute_check(args: CheckArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", check(&args, formatter)?);
    Ok(())
}

fn check(args: &CheckArgs, formatter: &Formatter) -> Result<String> {
    let parser = RelationshipParser::builtin();
    match args.shape {
        ShapeArg::Add => formatter.format_parsed(&parser.parse_add(&args.args)?),
        ShapeArg::Edit => formatter.format_parsed(&parser.parse_edit(&args.args)?),
        ShapeArg::Delete => formatter.format_parsed(&parser.parse_delete(&args.args)?),
    }
}
