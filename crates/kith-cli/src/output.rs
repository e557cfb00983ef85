//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kith_domain::{FamilialType, Person, PersonId, Relationship};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the people in the directory.
    pub fn format_people(&self, people: &[Person]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = people
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "id": p.id.to_string(),
                            "short_id": p.id.short(),
                            "name": p.name,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if people.is_empty() {
                    return Ok(self.colorize("No people found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name"]);
                for person in people {
                    builder.push_record([person.id.short(), person.name.clone()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(people
                .iter()
                .map(|p| p.id.short())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format relationships, labelling each side with the person's name when known.
    pub fn format_relationships(&self, relationships: &[Relationship], people: &[Person]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = relationships
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "origin": r.origin.to_string(),
                            "origin_role": r.origin_role,
                            "target": r.target.to_string(),
                            "target_role": r.target_role,
                            "type": r.descriptor,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if relationships.is_empty() {
                    return Ok(self.colorize("No relationships found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Person", "Role", "Person", "Role", "Type"]);
                for r in relationships {
                    builder.push_record([
                        label(r.origin, people),
                        r.origin_role.clone().unwrap_or_default(),
                        label(r.target, people),
                        r.target_role.clone().unwrap_or_default(),
                        r.descriptor.clone(),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(relationships
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a parsed command structure as pretty JSON.
    pub fn format_parsed<T: Serialize>(&self, parsed: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(parsed)?)
    }

    /// Format the role vocabulary of a familial type.
    pub fn format_roles(&self, familial: FamilialType) -> String {
        let [first, second] = familial.roles();
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "type": familial.keyword(),
                "roles": [first, second],
                "symmetric": familial.is_symmetric(),
            })
            .to_string(),
            OutputFormat::Quiet => format!("{}\n{}", first, second),
            OutputFormat::Table => {
                let shared = if familial.is_symmetric() {
                    "; both people may share a role"
                } else {
                    ""
                };
                self.info(&format!("{}: {} or {}{}", familial.display_name(), first, second, shared))
            }
        }
    }

    /// Format a person added result.
    pub fn person_added(&self, person: &Person) -> String {
        self.success(&format!("Added {} ({})", person.name, person.id.short()))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn label(id: PersonId, people: &[Person]) -> String {
    match people.iter().find(|p| p.id == id) {
        Some(person) => format!("{} ({})", person.name, id.short()),
        None => id.short(),
    }
}
