//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity, Span};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// Short descriptions of rules, by ID.
    pub rule_descriptions: HashMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    related_locations: Vec<SarifRelatedLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<SarifProperties>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRelatedLocation {
    id: usize,
    message: SarifMessage,
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_kind: Option<String>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            rule_descriptions: HashMap::new(),
        }
    }

    /// Describe a rule in the driver's rule table.
    pub fn with_rule_description(
        mut self,
        id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.rule_descriptions.insert(id.into(), description.into());
        self
    }

    fn physical_location(span: &Span) -> SarifPhysicalLocation {
        // Spans without a known end use `usize::MAX` as the end column.
        let has_end = span.end_col != usize::MAX;
        SarifPhysicalLocation {
            artifact_location: SarifArtifactLocation {
                uri: span.file.display().to_string(),
            },
            region: Some(SarifRegion {
                start_line: span.start_line,
                start_column: if span.start_col > 1 {
                    Some(span.start_col)
                } else {
                    None
                },
                end_line: has_end.then_some(span.end_line),
                end_column: has_end.then_some(span.end_col),
            }),
        }
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Hint => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let rule_ids: BTreeSet<_> = diagnostics.iter().map(|d| &d.rule_id).collect();

        let rules: Vec<_> = rule_ids
            .iter()
            .map(|id| SarifRule {
                id: id.0.clone(),
                short_description: SarifMessage {
                    text: self
                        .rule_descriptions
                        .get(&id.0)
                        .cloned()
                        .unwrap_or_else(|| format!("Rule {}", id.0)),
                },
            })
            .collect();

        let results: Vec<_> = diagnostics
            .iter()
            .map(|d| {
                let locations = d
                    .span
                    .as_ref()
                    .map(|span| {
                        vec![SarifLocation {
                            physical_location: Self::physical_location(span),
                        }]
                    })
                    .unwrap_or_default();

                let related_locations = d
                    .related
                    .iter()
                    .enumerate()
                    .map(|(id, related)| SarifRelatedLocation {
                        id,
                        message: SarifMessage {
                            text: related.message.clone(),
                        },
                        physical_location: Self::physical_location(&related.span),
                    })
                    .collect();

                let properties = (d.code.is_some() || d.node_kind.is_some()).then(|| {
                    SarifProperties {
                        code: d.code.clone(),
                        node_kind: d.node_kind.map(|kind| kind.to_string()),
                    }
                });

                SarifResult {
                    rule_id: d.rule_id.0.clone(),
                    level: Self::severity_to_level(d.severity),
                    message: SarifMessage {
                        text: d.message.clone(),
                    },
                    locations,
                    related_locations,
                    properties,
                }
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(writer, &log).map_err(std::io::Error::other)?;

        Ok(())
    }
}
