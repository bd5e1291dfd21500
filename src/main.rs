//! smartnav - run one navigation command against a Markdown file
//!
//! Usage: smartnav <file.md> <line> <ch> <command>

use anyhow::{bail, Context};
use smartnav::action::Action;
use smartnav::{execute, EditorSurface, LineBuffer, MarkdownSyntax, NoSyntax, Outcome, Position};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("smartnav: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, line, ch, command] = args.as_slice() else {
        let ids: Vec<&str> = Action::ALL.iter().map(|a| a.id()).collect();
        bail!(
            "usage: smartnav <file.md> <line> <ch> <command>\ncommands: {}",
            ids.join(", ")
        );
    };

    let line: usize = line.parse().context("line must be a number")?;
    let ch: usize = ch.parse().context("ch must be a number")?;
    let action: Action = command.parse()?;

    let path = Path::new(path);
    let mut buffer = LineBuffer::from_file(path)?;
    buffer.set_cursor(Position::new(line, ch))?;

    let outcome = match MarkdownSyntax::for_file(path, &buffer.text()) {
        Ok(syntax) => execute(&mut buffer, &syntax, action),
        Err(e) => {
            tracing::warn!(%e, "no syntax tree, tables will not be detected");
            execute(&mut buffer, &NoSyntax, action)
        }
    };

    let cursor = buffer.cursor();
    let status = match outcome {
        Outcome::Moved(_) => "moved",
        Outcome::Delegated => "default",
        Outcome::Unchanged => "unchanged",
    };
    println!("{}:{} {}", cursor.line, cursor.ch, status);
    Ok(())
}
