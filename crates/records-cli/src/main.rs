//! Command-line inspector for academic records workflow statuses
//!
//! Shows how raw backend statuses are displayed: canonical status, label,
//! colour, process stage and progress.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use records_core::{
    canonical_statuses, parse_records, stage_sequence, ResourceType, StatusCatalog, StatusView, WorkflowStatus,
};
use serde::Serialize;

fn cli() -> Command {
    Command::new("records-status")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect academic records workflow statuses")
        .arg(
            Arg::new("resource")
                .long("resource")
                .short('r')
                .value_name("TYPE")
                .help("Resource type: program, major, course, cohort, org_unit"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .short('s')
                .value_name("RAW")
                .conflicts_with("input")
                .help("Raw backend status to describe"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("JSON list response to summarize"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_name("STATUS")
                .requires("input")
                .help("Only show records with this canonical status"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Status alias configuration file"),
        )
        .arg(
            Arg::new("list-statuses")
                .long("list-statuses")
                .help("List canonical statuses with labels and colours")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the process stages of a resource type")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Serialize)]
struct StatusEntry {
    status: WorkflowStatus,
    label: &'static str,
    color: &'static str,
}

#[derive(Serialize)]
struct StageEntry {
    index: usize,
    stage: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct RecordView {
    id: String,
    name: Option<String>,
    #[serde(flatten)]
    view: StatusView,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn resource_arg(matches: &ArgMatches) -> Result<ResourceType> {
    let Some(raw) = matches.get_one::<String>("resource") else {
        bail!("--resource is required");
    };
    raw.parse::<ResourceType>().with_context(|| format!("Invalid --resource '{}'", raw))
}

/// Render the requested output as pretty JSON
fn run(matches: &ArgMatches) -> Result<String> {
    let catalog = match matches.get_one::<String>("config") {
        Some(path) => StatusCatalog::from_file(path)
            .with_context(|| format!("Failed to load alias configuration from {}", path))?,
        None => StatusCatalog::builtin(),
    };

    if matches.get_flag("list-statuses") {
        let entries: Vec<StatusEntry> = canonical_statuses()
            .iter()
            .map(|status| StatusEntry {
                status: *status,
                label: status.label(),
                color: status.color().as_str(),
            })
            .collect();
        return to_json(&entries);
    }

    let resource_type = resource_arg(matches)?;

    if matches.get_flag("list-stages") {
        let entries: Vec<StageEntry> = stage_sequence(resource_type)
            .iter()
            .enumerate()
            .map(|(index, stage)| StageEntry {
                index,
                stage: stage.as_str(),
                label: stage.label_for(resource_type),
            })
            .collect();
        return to_json(&entries);
    }

    if let Some(path) = matches.get_one::<String>("input") {
        let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let records = parse_records(&content).with_context(|| format!("Failed to parse records in {}", path))?;
        log::info!("Loaded {} {} records from {}", records.len(), resource_type, path);

        if let Some(filter) = matches.get_one::<String>("filter") {
            let status: WorkflowStatus = filter.parse().with_context(|| format!("Invalid --filter '{}'", filter))?;
            let views: Vec<RecordView> = catalog
                .filter_by_status(resource_type, &records, status)
                .into_iter()
                .map(|record| RecordView {
                    id: record.id.to_string(),
                    name: record.name.clone(),
                    view: catalog.describe(resource_type, record.status.as_deref()),
                })
                .collect();
            log::info!("{} records match {}", views.len(), status);
            return to_json(&views);
        }

        return to_json(&catalog.summarize(resource_type, &records));
    }

    let raw = matches.get_one::<String>("status").map(String::as_str);
    to_json(&catalog.describe(resource_type, raw))
}

fn main() {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_resource_arg_parses_tag() {
        let matches = cli().get_matches_from(["records-status", "--resource", "org-unit"]);
        assert_eq!(resource_arg(&matches).unwrap(), ResourceType::OrgUnit);
    }

    #[test]
    fn test_resource_arg_required() {
        let matches = cli().get_matches_from(["records-status", "--status", "ACTIVE"]);
        assert!(resource_arg(&matches).is_err());
    }

    #[test]
    fn test_filter_requires_input() {
        let result = cli().try_get_matches_from(["records-status", "--resource", "cohort", "--filter", "DRAFT"]);
        assert!(result.is_err());
    }

    fn run_args(args: &[&str]) -> Result<serde_json::Value> {
        let matches = cli().try_get_matches_from(args.iter().copied())?;
        Ok(serde_json::from_str(&run(&matches)?)?)
    }

    fn input_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes()).expect("Failed to write records");
        file
    }

    const COHORTS: &str = r#"{ "data": [
        { "id": 1, "name": "K68", "status": "RECRUITING", "updated_at": "2024-03-01T00:00:00Z" },
        { "id": 2, "name": "K67", "status": "ACTIVE", "updated_at": "2024-05-01T00:00:00Z" },
        { "id": 3, "name": "K66", "status": "ACTIVE" },
        { "id": 4, "name": "K60", "status": null }
    ] }"#;

    #[test]
    fn test_status_conflicts_with_input() {
        let result = cli().try_get_matches_from([
            "records-status", "--resource", "cohort", "--input", "cohorts.json", "--status", "ACTIVE",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_single_status() {
        let output = run_args(&["records-status", "-r", "course", "-s", "SUBMITTED"]).unwrap();
        assert_eq!(output["status"], "REVIEWING");
        assert_eq!(output["step_index"], 1);
    }

    #[test]
    fn test_input_summary() {
        let file = input_file(COHORTS);
        let path = file.path().to_str().unwrap();

        let output = run_args(&["records-status", "--resource", "cohort", "--input", path]).unwrap();
        assert_eq!(output["total"], 4);
        let counts = output["counts"].as_array().unwrap();
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0]["status"], "DRAFT");
        assert_eq!(counts[0]["count"], 1);
        assert_eq!(counts[1]["count"], 1);
        assert_eq!(counts[4]["status"], "PUBLISHED");
        assert_eq!(counts[4]["count"], 2);
        assert_eq!(output["latest_update"], "2024-05-01T00:00:00Z");
    }

    #[test]
    fn test_input_filter() {
        let file = input_file(COHORTS);
        let path = file.path().to_str().unwrap();

        let output = run_args(&["records-status", "-r", "cohort", "-i", path, "--filter", "published"]).unwrap();
        let views = output.as_array().unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0]["id"], "2");
        assert_eq!(views[0]["name"], "K67");
        assert_eq!(views[1]["stage_label"], "Đang đào tạo");
    }

    #[test]
    fn test_invalid_filter_is_error() {
        let file = input_file(COHORTS);
        let path = file.path().to_str().unwrap();

        assert!(run_args(&["records-status", "-r", "cohort", "-i", path, "--filter", "RECRUITING"]).is_err());
    }

    #[test]
    fn test_list_stages() {
        let output = run_args(&["records-status", "--resource", "major", "--list-stages"]).unwrap();
        let stages = output.as_array().unwrap();
        assert_eq!(stages.len(), 4);
        assert_eq!(stages[0]["stage"], "DRAFT");
        assert_eq!(stages[1]["label"], "Khoa xem xét");
        assert_eq!(stages[3]["index"], 3);
    }

    #[test]
    fn test_list_statuses_needs_no_resource() {
        let output = run_args(&["records-status", "--list-statuses"]).unwrap();
        let statuses = output.as_array().unwrap();
        assert_eq!(statuses.len(), 6);
        assert_eq!(statuses[3]["status"], "REJECTED");
        assert_eq!(statuses[3]["color"], "error");
    }

    #[test]
    fn test_record_view_flattens_status_view() {
        let view = RecordView {
            id: "7".to_string(),
            name: Some("Khóa 2024".to_string()),
            view: StatusCatalog::builtin().describe(ResourceType::Cohort, Some("ACTIVE")),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["status"], "PUBLISHED");
        assert_eq!(json["stage_label"], "Đang đào tạo");
    }
}
