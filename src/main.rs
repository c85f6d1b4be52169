use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rollcall::config::ClientConfig;
use rollcall::errors::ClientError;
use rollcall::screens::{
    DepartmentsScreen, HistoryScreen, InvitationsScreen, JobEditScreen, RosterScreen,
};
use rollcall::services::backend::http::HttpBackend;
use rollcall::services::job_editor::parse_datetime;
use rollcall::services::messages::{parse_direction, parse_status, MessageFilter};
use rollcall::state::{AppState, NoticeLevel};

#[derive(Parser)]
#[command(name = "rollcall", about = "Crew availability and job roster client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a job's invitees grouped by response
    Roster {
        job_id: String,
    },

    /// Move an invitee to another status (confirmed, maybe, declined, no_reply)
    SetStatus {
        job_id: String,
        availability_id: String,
        status: String,
    },

    /// List departments
    Departments,

    /// Create a department
    AddDepartment {
        name: String,
    },

    /// Edit a job's fields
    EditJob {
        job_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Start time ("YYYY-MM-DD HH:MM" or RFC 3339)
        #[arg(long)]
        start: Option<String>,

        /// End time ("YYYY-MM-DD HH:MM" or RFC 3339)
        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Department name, or "none"
        #[arg(long)]
        department: Option<String>,

        /// Required skill (can be used multiple times; replaces the list)
        #[arg(long, action = clap::ArgAction::Append)]
        skill: Vec<String>,
    },

    /// Show message history
    History {
        /// inbound or outbound
        #[arg(long)]
        direction: Option<String>,

        /// sent, delivered or failed
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        job: Option<String>,
    },

    /// Show your invitations
    Invitations,

    /// Answer an invitation
    Respond {
        availability_id: String,
        status: String,
    },

    /// Show your confirmed jobs
    Schedule,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    tracing::debug!(api_url = %config.api_url, "using backend");

    let backend = HttpBackend::new(&config)?;
    let state = Arc::new(AppState::new(config, Arc::new(backend)));

    run(cli.command, Arc::clone(&state)).await;

    let failed = state.notices.has_errors();
    for notice in state.notices.drain() {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("error: {}", notice.message),
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn run(command: Commands, state: Arc<AppState>) {
    match command {
        Commands::Roster { job_id } => {
            let screen = RosterScreen::new(state, &job_id);
            if screen.refresh().await {
                print!("{}", screen.render());
            }
        }
        Commands::SetStatus {
            job_id,
            availability_id,
            status,
        } => {
            let screen = RosterScreen::new(state, &job_id);
            if screen.refresh().await {
                screen.choose_status(&availability_id, &status).await;
                print!("{}", screen.render());
            }
        }
        Commands::Departments => {
            let screen = DepartmentsScreen::new(state);
            if screen.refresh().await {
                print!("{}", screen.render());
            }
        }
        Commands::AddDepartment { name } => {
            let screen = DepartmentsScreen::new(state);
            if screen.add(&name).await {
                print!("{}", screen.render());
            }
        }
        Commands::EditJob {
            job_id,
            name,
            location,
            start,
            end,
            notes,
            department,
            skill,
        } => {
            let mut screen = JobEditScreen::new(Arc::clone(&state), &job_id);
            if !screen.load().await {
                return;
            }
            if let Some(department) = department {
                if !screen.select_department(&department) {
                    return;
                }
            }

            let Some(form) = screen.form_mut() else {
                return;
            };
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(location) = location {
                form.location = location;
            }
            if let Some(notes) = notes {
                form.notes = notes;
            }
            if !skill.is_empty() {
                form.skill_requirements = skill;
            }
            for (raw, slot) in [(start, &mut form.start_time), (end, &mut form.end_time)] {
                let Some(raw) = raw else { continue };
                match parse_datetime(&raw) {
                    Ok(dt) => *slot = Some(dt),
                    Err(e) => {
                        state.notices.error(&e);
                        return;
                    }
                }
            }

            if screen.save().await {
                print!("{}", screen.render());
            }
        }
        Commands::History {
            direction,
            status,
            contact,
            job,
        } => {
            let direction = match direction.as_deref().map(|d| (d, parse_direction(d))) {
                Some((raw, None)) => {
                    state.notices.error(&ClientError::Validation(format!(
                        "unknown direction: {raw}"
                    )));
                    return;
                }
                other => other.and_then(|(_, d)| d),
            };
            let status = match status.as_deref().map(|s| (s, parse_status(s))) {
                Some((raw, None)) => {
                    state.notices.error(&ClientError::Validation(format!(
                        "unknown message status: {raw}"
                    )));
                    return;
                }
                other => other.and_then(|(_, s)| s),
            };
            let filter = MessageFilter {
                direction,
                status,
                contact,
                job,
            };
            let screen = HistoryScreen::new(state);
            if screen.refresh().await {
                print!("{}", screen.render(&filter));
            }
        }
        Commands::Invitations => {
            let screen = InvitationsScreen::new(state);
            if screen.refresh().await {
                print!("{}", screen.render());
            }
        }
        Commands::Respond {
            availability_id,
            status,
        } => {
            let screen = InvitationsScreen::new(state);
            if screen.respond(&availability_id, &status).await {
                print!("{}", screen.render());
            }
        }
        Commands::Schedule => {
            let screen = InvitationsScreen::new(state);
            if screen.refresh().await {
                print!("{}", screen.render_schedule());
            }
        }
    }
}
