use crate::cli::commands::consolidate::read_records;
use crate::cli::parser::Commands;
use crate::core::filter::RecordFilter;
use crate::core::grouper::{NameAndParent, group_records};
use crate::errors::AppResult;
use crate::models::identity::LogicalIdentity;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupView<'a> {
    identity: &'a LogicalIdentity,
    context_ids: Vec<&'a str>,
}

/// Handle the `groups` subcommand: print logical groups as JSON
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Groups {
        input,
        user,
        since,
        until,
    } = cmd
    {
        let filter = RecordFilter::from_args(user, since, until)?;
        let records = filter.apply(read_records(input)?);
        let groups = group_records(&records, &NameAndParent);

        let view: Vec<GroupView> = groups
            .iter()
            .map(|(identity, members)| GroupView {
                identity,
                context_ids: members.iter().map(|m| m.context_id.as_str()).collect(),
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&view)?);
    }
    Ok(())
}
