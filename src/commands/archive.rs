use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;

use sg_app::usecases::notice::StashNoticeUseCase;
use sg_app::PerformArchiveUseCase;

use crate::adapters::document::ArgsDocumentProvider;
use crate::deps::ShellDeps;

pub async fn run(deps: &ShellDeps, url: String, title: String, silent: bool) -> Result<ExitCode> {
    let document = Arc::new(ArgsDocumentProvider::new(url, title));
    let usecase = PerformArchiveUseCase::new(
        document,
        deps.navigation.clone(),
        deps.settings.clone(),
        deps.history.clone(),
        deps.archive_today.clone(),
        deps.wayback.clone(),
        deps.clock.clone(),
        deps.budgets.clone(),
    );

    match usecase.execute().await {
        Ok(success) => {
            if !silent {
                println!("Archived copy: {}", success.archive_url);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(code) => {
            if silent {
                // No surface to show the message on; leave it for the next
                // interactive command.
                StashNoticeUseCase::new(deps.notice.clone(), deps.clock.clone())
                    .execute(code)
                    .await?;
            } else {
                eprintln!("{}", code.user_message());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
