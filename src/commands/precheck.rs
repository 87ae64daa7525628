use anyhow::Result;
use std::process::ExitCode;

use sg_app::usecases::settings::GetSettingsUseCase;
use sg_app::{PrecheckHint, WarmPrecheckUseCase};
use sg_core::archive::{classify, ArchiveService, ResolutionRequest, UrlClass};

use crate::cli::ServiceArg;
use crate::deps::ShellDeps;

pub async fn run(deps: &ShellDeps, url: String, service: Option<ServiceArg>) -> Result<ExitCode> {
    if let UrlClass::Invalid(_) = classify(&url) {
        eprintln!("Cannot archive this type of page.");
        return Ok(ExitCode::FAILURE);
    }

    let service: ArchiveService = match service {
        Some(arg) => arg.into(),
        None => {
            GetSettingsUseCase::new(deps.settings.clone())
                .execute()
                .await?
                .archive
                .service
        }
    };

    let usecase = WarmPrecheckUseCase::new(
        deps.archive_today.clone(),
        deps.wayback.clone(),
        deps.budgets.clone(),
    );
    let hint = usecase.hint(ResolutionRequest::new(url, service)).await;

    match hint {
        PrecheckHint::Snapshot => {
            println!("{service} has a snapshot.");
            Ok(ExitCode::SUCCESS)
        }
        PrecheckHint::NoSnapshot => {
            println!("{service} has no snapshot of this page.");
            Ok(ExitCode::FAILURE)
        }
        PrecheckHint::Unknown => {
            println!("Couldn't reach {service} conclusively; try again.");
            Ok(ExitCode::FAILURE)
        }
    }
}
