use crate::check::{CheckFinding, CheckReport, Level};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format_check(report: &CheckReport) -> String {
    // Collect unique rules
    let mut rule_map: HashMap<&str, &CheckFinding> = HashMap::new();
    for f in &report.findings {
        rule_map.entry(f.rule_id.as_str()).or_insert(f);
    }

    let mut rule_ids: Vec<&str> = rule_map.keys().copied().collect();
    rule_ids.sort();

    let rule_index: HashMap<&str, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|id| {
            let f = rule_map[id];
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(f.message.clone())
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .findings
        .iter()
        .map(|f| {
            let level = match f.level {
                Level::Error => ResultLevel::Error,
                Level::Warning => ResultLevel::Warning,
            };

            let mut result = SarifResult::builder()
                .message(Message::builder().text(f.message.clone()).build())
                .build();

            result.rule_id = Some(f.rule_id.clone());
            result.level = Some(level);
            result.rule_index = rule_index.get(f.rule_id.as_str()).copied();

            // Findings tied to a record line point at the records file itself;
            // findings about companion files point at those files.
            let (uri, line) = match (&f.path, f.line) {
                (Some(path), _) => (
                    Some(path.to_string_lossy().replace('\\', "/")),
                    None,
                ),
                (None, Some(line)) => (Some(report.records_file.replace('\\', "/")), Some(line)),
                (None, None) => (None, None),
            };

            if let Some(uri) = uri {
                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();

                physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());

                if let Some(line) = line {
                    physical.region = Some(Region::builder().start_line(line as i64).build());
                }

                location.physical_location = Some(physical);
                result.locations = Some(vec![location]);
            }

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("lintdoc")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
