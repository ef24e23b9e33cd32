//! Status command - print release or development

use crate::cli::args::StatusArgs;
use crate::cli::Project;
use crate::error::RelicResult;

/// Execute the status command
pub fn execute(args: StatusArgs, project: &Project) -> RelicResult<()> {
    let record = project.resolve(args.prefix.as_deref())?;
    println!("{}", record.build_status());
    Ok(())
}
