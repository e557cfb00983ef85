//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::RolesArgs;
use crate::commands;
use crate::config::{kith_dir, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kith_store::MemoryStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Run the interactive REPL.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Kith REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    if let Err(e) = editor.load_history(&history_path) {
        debug!(error = %e, "No history loaded");
    }

    let mut store = MemoryStore::new();
    let seeded = config.seed(&mut store)?;
    if seeded > 0 {
        println!("{}", formatter.info(&format!("Loaded {} contact(s) from config", seeded)));
    }

    loop {
        match editor.readline("kith> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut store, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Err(e) = editor.save_history(&history_path) {
        warn!(error = %e, path = %history_path.display(), "Failed to save history");
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    List(Option<String>),
    AddPerson(String),
    AddRelation(String),
    EditRelation(String),
    DeleteRelation(String),
    Roles(String),
}

/// Parse a REPL command line.
///
/// Relationship commands keep the raw text after the command word, since
/// roles and identifiers are separated by the slashes inside it.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    if word.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match word.to_lowercase().as_str() {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "list" | "ls" => Ok(ReplCommand::List((!rest.is_empty()).then(|| rest.to_string()))),
        "addperson" | "ap" => Ok(ReplCommand::AddPerson(rest.to_string())),
        "addrelation" | "ar" => Ok(ReplCommand::AddRelation(rest.to_string())),
        "editrelation" | "er" => Ok(ReplCommand::EditRelation(rest.to_string())),
        "deleterelation" | "dr" => Ok(ReplCommand::DeleteRelation(rest.to_string())),
        "roles" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: roles <type>".to_string()));
            }
            Ok(ReplCommand::Roles(rest.to_string()))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            word
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(cmd: ReplCommand, store: &mut MemoryStore, formatter: &Formatter) -> Result<()> {
    debug!(command = ?cmd, "Executing REPL command");
    match cmd {
        ReplCommand::List(filter) => commands::execute_list(filter.as_deref(), store, formatter),
        ReplCommand::AddPerson(name) => commands::execute_add_person(&name, store, formatter),
        ReplCommand::AddRelation(args) => commands::execute_add_relation(&args, store, formatter),
        ReplCommand::EditRelation(args) => commands::execute_edit_relation(&args, store, formatter),
        ReplCommand::DeleteRelation(args) => commands::execute_delete_relation(&args, store, formatter),
        ReplCommand::Roles(relationship_type) => {
            commands::execute_roles(RolesArgs { relationship_type }, formatter)
        }
        ReplCommand::Exit | ReplCommand::Help => Ok(()),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = kith_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  addperson <name>                             - Add a person (alias: ap)");
    println!("  addrelation /<id> [role]/<id> [role]/<type>  - Relate two people (alias: ar)");
    println!("  editrelation /<id> [role]/<id> [role]/<old>/<new>");
    println!("                                               - Change a relationship (alias: er)");
    println!("  deleterelation /<id> [role]/<id> [role]/<type>");
    println!("                                               - Delete one relationship (alias: dr)");
    println!("  deleterelation /<type>                       - Delete a custom type and its relationships");
    println!("  list [id]                                    - List people and relationships (alias: ls)");
    println!("  roles <type>                                 - Show roles for bioparents, siblings or spouses");
    println!("  help, ?                                      - Show this help");
    println!("  exit, quit, q                                - Exit REPL");
    println!();
    println!("  Familial types need a role for both people, e.g.");
    println!("    addrelation /0001 parent/0002 child/bioparents");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exit_and_help() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("Q").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
    }

    #[test]
    fn test_relationship_args_kept_raw() {
        assert_eq!(
            parse_repl_command("addrelation /0001 parent/0002 child/bioparents").unwrap(),
            ReplCommand::AddRelation("/0001 parent/0002 child/bioparents".to_string())
        );
        assert_eq!(
            parse_repl_command("dr   /housemates").unwrap(),
            ReplCommand::DeleteRelation("/housemates".to_string())
        );
    }

    #[test]
    fn test_addperson_keeps_full_name() {
        assert_eq!(
            parse_repl_command("ap Mary Ann Smith").unwrap(),
            ReplCommand::AddPerson("Mary Ann Smith".to_string())
        );
    }

    #[test]
    fn test_list_with_optional_person() {
        assert_eq!(parse_repl_command("ls").unwrap(), ReplCommand::List(None));
        assert_eq!(
            parse_repl_command("list 0002").unwrap(),
            ReplCommand::List(Some("0002".to_string()))
        );
    }

    #[test]
    fn test_roles_requires_type() {
        assert!(matches!(parse_repl_command("roles"), Err(CliError::InvalidInput(_))));
        assert_eq!(
            parse_repl_command("roles siblings").unwrap(),
            ReplCommand::Roles("siblings".to_string())
        );
    }

    #[test]
    fn test_unknown_command() {
        let result = parse_repl_command("frobnicate /0001");
        assert!(matches!(result, Err(CliError::InvalidInput(msg)) if msg.contains("frobnicate")));
    }

    #[test]
    fn test_execute_session() {
        let formatter = Formatter::new(crate::config::OutputFormat::Quiet, false);
        let mut store = MemoryStore::new();

        for line in [
            "ap Alice",
            "ap Bob",
            "ar /0001 sister/0002 brother/siblings",
            "er /0001/0002/siblings/friend",
        ] {
            let cmd = parse_repl_command(line).unwrap();
            execute_repl_command(cmd, &mut store, &formatter).unwrap();
        }

        let cmd = parse_repl_command("dr /0002/0001/friend").unwrap();
        execute_repl_command(cmd, &mut store, &formatter).unwrap();
        assert!(kith_domain::RelationshipStore::relationships(&store)
            .unwrap()
            .is_empty());
    }
}
