//! Output formatting for inspection results
//!
//! JSON and YAML share the camelCase shape served by the HTTP endpoint.
//! `Dockerfile` prints only the generated artifact.
//!
//! # Example
//!
//! ```no_run
//! use nodepack::cli::output::{OutputFormat, OutputFormatter};
//!
//! let inspection = nodepack::inspect("./app")?;
//! let output = OutputFormatter::new(OutputFormat::Json).format(&inspection)?;
//! println!("{}", output);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use anyhow::{Context, Result};

use crate::detection::types::Inspection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
    /// The generated Dockerfile only
    Dockerfile,
}

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, inspection: &Inspection) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(inspection),
            OutputFormat::Yaml => self.format_yaml(inspection),
            OutputFormat::Human => self.format_human(inspection),
            OutputFormat::Dockerfile => Ok(format!("{}\n", inspection.generated_artifact)),
        }
    }

    fn format_json(&self, inspection: &Inspection) -> Result<String> {
        serde_json::to_string_pretty(inspection)
            .context("Failed to serialize inspection result to JSON")
    }

    fn format_yaml(&self, inspection: &Inspection) -> Result<String> {
        serde_yaml::to_string(inspection).context("Failed to serialize inspection result to YAML")
    }

    fn format_human(&self, inspection: &Inspection) -> Result<String> {
        let c = &inspection.classification;
        let mut output = String::new();

        output.push_str("\u{2713} Node.js Project Inspection\n");
        output.push_str(RULE);
        output.push_str("\n\n");

        output.push_str(&format!(
            "Framework:        {} ({})\n",
            c.framework,
            c.framework.name()
        ));
        output.push_str(&format!("Package Manager:  {}\n", c.package_manager));
        output.push_str(&format!("Node Version:     {}\n\n", c.runtime_version));

        output.push_str("Commands:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} Build:  {}\n",
            c.build_command.as_deref().unwrap_or("(none)")
        ));
        output.push_str(&format!(
            "\u{2514}\u{2500} Start:  {}\n\n",
            c.start_command.as_deref().unwrap_or("(none)")
        ));

        output.push_str("Dockerfile:\n");
        for line in inspection.generated_artifact.lines() {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }

        if inspection.has_warnings() {
            output.push_str("\n\u{26A0} Warnings:\n");
            for warning in &inspection.warnings {
                output.push_str(&format!("  - {}\n", warning));
            }
        }

        Ok(output)
    }
}
