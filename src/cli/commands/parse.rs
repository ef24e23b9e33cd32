//! Parse command - run the descriptor parser on a literal string

use super::info::print_record;
use crate::cli::args::ParseArgs;
use crate::cli::Project;
use crate::error::RelicResult;
use crate::ui::UiContext;
use crate::version::parse_descriptor;

/// Execute the parse command
pub fn execute(args: ParseArgs, project: &Project) -> RelicResult<()> {
    let prefix = project.tag_prefix(args.prefix.as_deref())?;
    let record = parse_descriptor(&args.descriptor, &prefix)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&UiContext::detect(), &record);
    }

    Ok(())
}
