//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn convert_minimal() {
    let cmd = parse(&["mdpost", "convert", "note.md"]);
    match cmd {
        CliCommand::Convert {
            files,
            title,
            date,
            categories,
            tags,
            output_root,
            url_prefix,
            jobs,
        } => {
            assert_eq!(files, vec![PathBuf::from("note.md")]);
            assert!(title.is_none());
            assert!(date.is_none());
            assert!(categories.is_empty());
            assert!(tags.is_empty());
            assert!(output_root.is_none());
            assert!(url_prefix.is_none());
            assert_eq!(jobs, 1);
        }
        other => panic!("expected convert, got {:?}", other),
    }
}

#[test]
fn convert_full_flags() {
    let cmd = parse(&[
        "mdpost",
        "convert",
        "a.md",
        "b.md",
        "--title",
        "My Post",
        "--date",
        "2024-01-01",
        "--categories",
        "dev,rust",
        "--tags",
        "x",
        "--tags",
        "y",
        "--output-root",
        "/blog",
        "--url-prefix",
        "https://cdn.example.com/",
        "--jobs",
        "3",
    ]);
    match cmd {
        CliCommand::Convert {
            files,
            title,
            date,
            categories,
            tags,
            output_root,
            url_prefix,
            jobs,
        } => {
            assert_eq!(files.len(), 2);
            assert_eq!(title.as_deref(), Some("My Post"));
            assert_eq!(date.as_deref(), Some("2024-01-01"));
            assert_eq!(categories, vec!["dev", "rust"]);
            assert_eq!(tags, vec!["x", "y"]);
            assert_eq!(output_root, Some(PathBuf::from("/blog")));
            assert_eq!(url_prefix.as_deref(), Some("https://cdn.example.com/"));
            assert_eq!(jobs, 3);
        }
        other => panic!("expected convert, got {:?}", other),
    }
}

#[test]
fn convert_requires_at_least_one_file() {
    assert!(Cli::try_parse_from(["mdpost", "convert"]).is_err());
}

#[test]
fn completions_parses_shell() {
    let cmd = parse(&["mdpost", "completions", "bash"]);
    assert!(matches!(
        cmd,
        CliCommand::Completions {
            shell: clap_complete::Shell::Bash
        }
    ));
}

#[test]
fn man_parses() {
    assert!(matches!(parse(&["mdpost", "man"]), CliCommand::Man));
}
