//! Roles command implementation.

use crate::cli::RolesArgs;
use crate::error::Result;
use crate::output::Formatter;
use kith_parser::parse_familial_type;

/// Execute the roles command.
pub fn execute_roles(args: RolesArgs, formatter: &Formatter) -> Result<()> {
    let familial = parse_familial_type(&args.relationship_type)?;
    println!("{}", formatter.format_roles(familial));
    Ok(())
}
