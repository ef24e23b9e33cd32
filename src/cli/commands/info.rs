//! Info command - show the current version

use crate::cli::args::InfoArgs;
use crate::cli::Project;
use crate::error::RelicResult;
use crate::ui::{self, UiContext};
use crate::version::{BuildStatus, VersionRecord};

/// Execute the info command
pub fn execute(args: InfoArgs, project: &Project) -> RelicResult<()> {
    let record = project.resolve(args.prefix.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&UiContext::detect(), &record);
    }

    Ok(())
}

/// Print every field of a record plus its build status
pub(crate) fn print_record(ctx: &UiContext, record: &VersionRecord) {
    ui::section(ctx, &format!("Version {}", record.pep386()));
    ui::key_value(ctx, "short", record.short());
    ui::key_value(ctx, "long", record.long());
    ui::key_value(ctx, "post", record.post());
    ui::key_value(ctx, "commit", record.commit());
    ui::key_value(ctx, "date", record.date());
    ui::key_value(ctx, "dirty", &record.dirty().to_string());

    let status = record.build_status();
    ui::key_value_status(
        ctx,
        "status",
        status.as_str(),
        status == BuildStatus::Release,
    );
}
