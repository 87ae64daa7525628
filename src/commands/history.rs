use anyhow::Result;
use chrono::{DateTime, Local};
use std::process::ExitCode;

use sg_app::usecases::history::{
    ClearHistoryUseCase, DeleteHistoryEntryUseCase, ListHistoryUseCase, UndoHistoryChangeUseCase,
    UndoOutcome,
};
use sg_app::usecases::notice::TakePendingNoticeUseCase;
use sg_core::history::HistoryEntry;

use crate::cli::HistoryCommand;
use crate::deps::ShellDeps;

pub async fn run(deps: &ShellDeps, command: Option<HistoryCommand>) -> Result<ExitCode> {
    // Surface whatever a silent gesture left behind, once.
    if let Some(code) = TakePendingNoticeUseCase::new(deps.notice.clone(), deps.clock.clone())
        .execute()
        .await?
    {
        eprintln!("Last archive attempt failed: {}", code.user_message());
    }

    match command.unwrap_or(HistoryCommand::List) {
        HistoryCommand::List => {
            let entries = ListHistoryUseCase::new(deps.history.clone()).execute().await?;
            if entries.is_empty() {
                println!("No archive lookups yet.");
            } else {
                for (position, entry) in entries.iter().enumerate() {
                    print_entry(position + 1, entry);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        HistoryCommand::Delete { position } => {
            let Some(index) = position.checked_sub(1) else {
                eprintln!("Positions start at 1.");
                return Ok(ExitCode::FAILURE);
            };
            let deleted =
                DeleteHistoryEntryUseCase::new(deps.history.clone(), deps.undo.clone(), deps.clock.clone())
                    .execute(index)
                    .await?;
            match deleted {
                Some(entry) => {
                    println!("Deleted {}.", display_name(&entry));
                    println!("Run `snapgate history undo` within 5 seconds to restore it.");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("No history entry at position {position}.");
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        HistoryCommand::Undo => {
            let outcome =
                UndoHistoryChangeUseCase::new(deps.history.clone(), deps.undo.clone(), deps.clock.clone())
                    .execute()
                    .await?;
            match outcome {
                UndoOutcome::RestoredEntry(entry) => {
                    println!("Restored {}.", display_name(&entry));
                    Ok(ExitCode::SUCCESS)
                }
                UndoOutcome::RestoredList(count) => {
                    println!("Restored {count} entries.");
                    Ok(ExitCode::SUCCESS)
                }
                UndoOutcome::Expired => {
                    eprintln!("The undo window has passed.");
                    Ok(ExitCode::FAILURE)
                }
                UndoOutcome::Nothing => {
                    eprintln!("Nothing to undo.");
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        HistoryCommand::Clear => {
            let cleared =
                ClearHistoryUseCase::new(deps.history.clone(), deps.undo.clone(), deps.clock.clone())
                    .execute()
                    .await?;
            if cleared == 0 {
                println!("History is already empty.");
            } else {
                println!("Cleared {cleared} entries.");
                println!("Run `snapgate history undo` within 5 seconds to restore them.");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn display_name(entry: &HistoryEntry) -> String {
    if entry.title.is_empty() {
        entry.url.clone()
    } else {
        format!("\"{}\"", entry.title)
    }
}

fn print_entry(position: usize, entry: &HistoryEntry) {
    let when = DateTime::from_timestamp_millis(entry.timestamp_ms)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    println!(
        "{position}. {} — {} ({when})",
        display_name(entry),
        entry.service
    );
    println!("   {}", entry.url);
    println!("   {}", entry.archive_url);
}
