use anyhow::Result;
use std::process::ExitCode;

use sg_app::usecases::settings::{GetSettingsUseCase, UpdateSettingsUseCase};
use sg_core::settings::model::Settings;

use crate::cli::ConfigCommand;
use crate::deps::ShellDeps;

pub async fn run(deps: &ShellDeps, command: Option<ConfigCommand>) -> Result<ExitCode> {
    let get = GetSettingsUseCase::new(deps.settings.clone());

    match command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => {
            let settings = get.execute().await?;
            print_settings(&settings);
        }
        ConfigCommand::SetService { service } => {
            let mut settings = get.execute().await?;
            settings.archive.service = service.into();
            save(deps, settings.clone()).await?;
            println!("Archive service: {}", settings.archive.service);
        }
        ConfigCommand::SetNewTab { enabled } => {
            let mut settings = get.execute().await?;
            settings.archive.open_in_new_tab = enabled;
            save(deps, settings).await?;
            println!(
                "Snapshots will open {}.",
                if enabled { "in a new tab" } else { "in place" }
            );
        }
        ConfigCommand::SetDarkMode { enabled } => {
            let mut settings = get.execute().await?;
            settings.general.dark_mode = enabled;
            save(deps, settings).await?;
            println!("Dark mode {}.", if enabled { "on" } else { "off" });
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn save(deps: &ShellDeps, settings: Settings) -> Result<()> {
    UpdateSettingsUseCase::new(deps.settings.clone())
        .execute(settings)
        .await
}

fn print_settings(settings: &Settings) {
    println!("archive.service          {}", settings.archive.service);
    println!("archive.open_in_new_tab  {}", settings.archive.open_in_new_tab);
    println!("general.dark_mode        {}", settings.general.dark_mode);
}
