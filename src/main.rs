//! ATS analyzer: resume ATS-friendliness scoring for AI/ML roles

use anyhow::Context;
use ats_analyzer::cli::{self, Cli, Commands, ConfigAction, RoleAction};
use ats_analyzer::config::Config;
use ats_analyzer::error::{AtsError, Result};
use ats_analyzer::input::InputManager;
use ats_analyzer::output::formatter::{resolve_save_path, save_report_to_file};
use ats_analyzer::output::ReportGenerator;
use ats_analyzer::processing::{all_profiles, analyze, get_profile};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config;
    let config = match &config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            output,
            detailed,
            save,
        } => {
            let role_id = role.unwrap_or_else(|| config.analysis.default_role.clone());
            // Reject an unknown role before touching the file
            let profile = get_profile(&role_id)?;

            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown"])
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsError::OutputFormatting)?,
                None => config.output.format,
            };

            info!("Analyzing {} for role {}", resume.display(), profile.display_name);

            let mut input_manager =
                InputManager::new().with_max_file_size(config.input.max_file_size_bytes);
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Extracted {} characters", resume_text.len());

            let report = analyze(&resume_text, profile.id)?;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                config.output.pretty_json,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(save) => {
                    let path = resolve_save_path(&save, &output_format, &resume);
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Roles { action } => match action {
            RoleAction::List => {
                for profile in all_profiles() {
                    println!("{:<24} {}", profile.id, profile.display_name);
                }
            }
            RoleAction::Show { role } => {
                let profile = get_profile(&role)?;
                println!("{} ({})", profile.display_name, profile.id);
                println!("\nKeywords ({}):\n  {}", profile.keywords.len(), profile.keywords.join(", "));
                println!("\nSkills ({}):\n  {}", profile.skills.len(), profile.skills.join(", "));
                println!(
                    "\nExperience phrases ({}):\n  {}",
                    profile.experience_phrases.len(),
                    profile.experience_phrases.join(", ")
                );
            }
        },

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| AtsError::Configuration(e.to_string()))?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                let written = Config::reset_at(config_path.as_deref())?;
                println!("Configuration reset to defaults at {}", written.display());
            }
            ConfigAction::Path => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}
