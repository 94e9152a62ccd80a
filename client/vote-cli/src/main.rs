//! vote - command-line client for the voting application
//!
//! Every command runs against the backend configured in `~/.vote/config.toml`
//! (or `--server`). JSON results go to stdout; notifications and logs go to
//! stderr.
//!
//! # Examples
//!
//! ```bash
//! # Create an account, then log in
//! vote signup --name Asha --age 34 --address "12 Main St" --aadhar 123456789012 --password pw
//! vote login --aadhar 123456789012 --password pw
//!
//! # Voter
//! vote dashboard --pretty
//! vote vote 65f1c0ffee
//!
//! # Admin
//! vote admin create --name Alice --party Blue --age 44
//! vote admin update 65f1c0ffee --party Teal
//! ```

mod admin_commands;
mod cli;
mod commands;
mod error;
mod logger;


use crate::{
    admin_commands::AdminCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
};

use std::process::ExitCode;

use clap::Parser;
use log::debug;
use serde_json::{Value, json};
use vote_client::{App, ClientError, VoterDashboard};
use vote_config::Config;
use vote_core::{Credentials, Role, SignupRequest, total_votes};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let app = match setup(cli.server.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = execute(&app, cli.command).await;

    let notifications = app.notifications().history();
    for notification in &notifications {
        eprintln!("{}", notification);
    }

    match result.and_then(|value| render(&value, cli.pretty)) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            // Already explained by an error notification
            if !notifications.iter().any(|n| n.is_error()) {
                match &e {
                    CliError::Client(err) => eprintln!("Error: {}", err.user_message()),
                    _ => eprintln!("Error: {}", e),
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Load and validate config, start logging, restore the session.
fn setup(server: Option<&str>) -> CliResult<App> {
    let mut config = Config::load()?;
    if let Some(url) = server {
        config.api.base_url = url.to_string();
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    Ok(App::from_config(&config)?)
}

fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

async fn execute(app: &App, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Signup {
            name,
            age,
            email,
            mobile,
            address,
            aadhar,
            password,
            role,
        } => {
            let request = SignupRequest {
                name,
                age,
                email,
                mobile,
                address,
                aadhar_card_number: aadhar,
                password,
                role: role.parse::<Role>()?,
            };
            app.auth_flow().signup(&request).await?;
            Ok(json!({ "signedUp": true, "next": app.navigator().current().path() }))
        }

        Commands::Login { aadhar, password } => {
            let auth = app.auth_flow();
            let redirect = auth.login(&Credentials::new(aadhar, password)).await?;
            let dashboard = redirect.route();
            // The flow must stay alive until the redirect fires
            redirect.wait().await;
            Ok(json!({
                "role": app.session().role().map(|r| r.to_string()),
                "dashboard": dashboard.path(),
            }))
        }

        Commands::Logout => {
            app.logout()?;
            Ok(json!({ "loggedIn": false }))
        }

        Commands::Whoami => {
            let session = app.session().session();
            Ok(json!({
                "loggedIn": session.is_some(),
                "role": session.as_ref().map(|s| s.role.to_string()),
                "since": session.as_ref().map(|s| s.created_at.to_rfc3339()),
                "dashboard": app.landing_route().path(),
            }))
        }

        Commands::Profile => {
            let mut dashboard = app.voter_dashboard();
            dashboard.load_profile().await?;
            Ok(serde_json::to_value(dashboard.profile())?)
        }

        Commands::Candidates => {
            let mut dashboard = app.voter_dashboard();
            dashboard.load_candidates().await?;
            Ok(serde_json::to_value(dashboard.candidates())?)
        }

        Commands::Counts => {
            let mut dashboard = app.voter_dashboard();
            dashboard.refresh_vote_counts().await?;
            Ok(tally(&dashboard))
        }

        Commands::Dashboard => {
            let mut dashboard = app.voter_dashboard();
            dashboard.mount().await?;
            Ok(json!({
                "profile": dashboard.profile(),
                "profileError": dashboard.profile_error(),
                "candidates": dashboard.candidates(),
                "voteCounts": dashboard.vote_counts(),
                "totalVotes": total_votes(dashboard.vote_counts()),
            }))
        }

        Commands::Vote { candidate_id } => {
            let mut dashboard = app.voter_dashboard();
            dashboard.vote(&candidate_id).await?;
            let mut result = tally(&dashboard);
            result["voted"] = json!(candidate_id.as_str());
            Ok(result)
        }

        Commands::Password { current, new } => {
            let mut dashboard = app.voter_dashboard();
            dashboard.current_password = current;
            dashboard.new_password = new;
            dashboard.change_password().await?;
            Ok(json!({ "passwordChanged": true }))
        }

        Commands::Admin { action } => execute_admin(app, action).await,
    }
}

fn tally(dashboard: &VoterDashboard) -> Value {
    json!({
        "voteCounts": dashboard.vote_counts(),
        "totalVotes": total_votes(dashboard.vote_counts()),
    })
}

/// Run an admin command and print the candidate list it leaves behind.
async fn execute_admin(app: &App, action: AdminCommands) -> CliResult<Value> {
    // The dashboard skips reads without a session; say so instead of printing []
    if !app.session().is_authenticated() {
        return Err(ClientError::not_authenticated().into());
    }

    let mut dashboard = app.admin_dashboard();
    match action {
        AdminCommands::List => dashboard.refresh().await?,

        AdminCommands::Create { name, party, age } => {
            let form = dashboard.form_mut();
            form.name = name;
            form.party = party;
            form.age = age;
            dashboard.submit().await?;
        }

        AdminCommands::Update {
            id,
            name,
            party,
            age,
        } => {
            dashboard.refresh().await?;
            dashboard.begin_edit_by_id(&id)?;
            let form = dashboard.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(party) = party {
                form.party = party;
            }
            if let Some(age) = age {
                form.age = age;
            }
            dashboard.submit().await?;
        }

        AdminCommands::Delete { id } => dashboard.delete(&id).await?,
    }

    Ok(serde_json::to_value(dashboard.candidates())?)
}
