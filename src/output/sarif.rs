use crate::finding::{Rule, ValidationReport};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::BTreeMap;

pub fn format(report: &ValidationReport) -> String {
    let mut rule_ids: Vec<Rule> = report.errors().iter().map(|e| e.rule).collect();
    rule_ids.sort();
    rule_ids.dedup();

    let rule_index: BTreeMap<Rule, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, rule)| (*rule, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|rule| {
            let mut descriptor = ReportingDescriptor::builder().id(rule.id().to_string()).build();
            descriptor.short_description = Some(
                MultiformatMessageString::builder()
                    .text(rule.summary().to_string())
                    .build(),
            );
            descriptor
        })
        .collect();

    let results: Vec<SarifResult> = report
        .errors()
        .iter()
        .map(|e| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(e.message.clone()).build())
                .build();

            result.rule_id = Some(e.rule.id().to_string());
            result.level = Some(ResultLevel::Error);
            result.rule_index = rule_index.get(&e.rule).copied();

            if let Some(ref file) = e.file {
                let uri = file.to_string_lossy().replace('\\', "/");
                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();
                physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
                location.physical_location = Some(physical);
                result.locations = Some(vec![location]);
            }

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("skill-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();
    let run = Run::builder().tool(tool).results(results).build();
    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    let mut json = serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed");
    json.push('\n');
    json
}
