//! # rbac-check
//!
//! Evaluates a single access check against an RBAC JSON document and prints
//! the decision.
//!
//! ```text
//! rbac-check --document rbac.json --identity alice \
//!     --resource /Daycare/LittleBee/Playground --permission Bubble/burst
//! ```
//!
//! ## Exit codes
//!
//! - `0` - access granted
//! - `1` - access denied
//! - `2` - invalid input (bad document, malformed scope or permission)
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RBAC_DOCUMENT` - document path when `--document` is omitted
//! - `RUST_LOG` - log filter, overrides `-v`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rbac_authz::RbacDocument;
use tracing::error;

/// Check whether an identity holds a permission at a scope
#[derive(Debug, Parser)]
#[command(name = "rbac-check", version, about)]
struct Cli {
    /// RBAC JSON document with role definitions and assignments
    #[arg(short, long, env = "RBAC_DOCUMENT")]
    document: PathBuf,

    /// Principal id to check
    #[arg(short, long)]
    identity: String,

    /// Rooted scope being accessed, e.g. /Daycare/LittleBee
    #[arg(short, long)]
    resource: String,

    /// Permission requested, e.g. Bubble/burst
    #[arg(short, long)]
    permission: String,

    /// Stop at the first matching role assignment
    #[arg(long)]
    first_match: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Exit {
    Granted = 0,
    Denied = 1,
    InvalidInput = 2,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    exit_code(run(&cli)).into()
}

fn exit_code(outcome: anyhow::Result<bool>) -> Exit {
    match outcome {
        Ok(true) => Exit::Granted,
        Ok(false) => Exit::Denied,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            Exit::InvalidInput
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let engine = RbacDocument::load(&cli.document)
        .and_then(RbacDocument::into_engine)
        .with_context(|| format!("failed to load {}", cli.document.display()))?;

    let decision = engine.check_access_with(
        cli.identity.as_str(),
        &cli.resource,
        &cli.permission,
        |_, _, _| true,
        !cli.first_match,
    )?;

    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(decision.is_granted())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOCUMENT: &str = r#"{
        "roleDefinitions": [
            { "id": "child", "displayName": "Child",
              "assignableScopes": ["/Daycare", "/Playground"],
              "permissions": ["Bubble/view", "Bubble/burst"] }
        ],
        "roleAssignments": [
            { "principalId": "alice", "id": "a-1",
              "roleDefinitionId": "child", "scope": "/Daycare/LittleBee" }
        ]
    }"#;

    fn document(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn check(file: &NamedTempFile, resource: &str, permission: &str) -> Exit {
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "rbac-check",
            "--document",
            path,
            "--identity",
            "alice",
            "--resource",
            resource,
            "--permission",
            permission,
        ]);
        exit_code(run(&cli))
    }

    #[test]
    fn test_granted_exits_zero() {
        let file = document(DOCUMENT);
        let exit = check(&file, "/Daycare/LittleBee/Playground", "Bubble/burst");
        assert_eq!(exit, Exit::Granted);
        assert_eq!(exit as u8, 0);
    }

    #[test]
    fn test_denied_exits_one() {
        let file = document(DOCUMENT);
        let exit = check(&file, "/Daycare/LittleBee", "Purchase/BubbleMachine");
        assert_eq!(exit, Exit::Denied);
        assert_eq!(exit as u8, 1);
    }

    #[test]
    fn test_invalid_request_exits_two() {
        let file = document(DOCUMENT);
        assert_eq!(check(&file, "Daycare", "Bubble/burst"), Exit::InvalidInput);
        assert_eq!(check(&file, "/Daycare", "Bubble/*"), Exit::InvalidInput);
        assert_eq!(Exit::InvalidInput as u8, 2);
    }

    #[test]
    fn test_invalid_document_exits_two() {
        let file = document(r#"{ "roleDefinitions": [ { "id": "", "assignableScopes": ["/"], "permissions": ["*"] } ] }"#);
        assert_eq!(check(&file, "/Daycare", "Bubble/burst"), Exit::InvalidInput);

        let file = document("not json");
        assert_eq!(check(&file, "/Daycare", "Bubble/burst"), Exit::InvalidInput);
    }

    #[test]
    fn test_first_match_flag() {
        let file = document(DOCUMENT);
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "rbac-check",
            "-d",
            path,
            "-i",
            "ALICE",
            "-r",
            "/daycare/littlebee",
            "-p",
            "bubble/view",
            "--first-match",
        ]);
        assert!(cli.first_match);
        assert!(run(&cli).unwrap());
    }
}
