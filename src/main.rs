// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Planning command line.
//!
//! Manages activities and constraints on the planning backend for the
//! logged-in user.

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use planning_client::{
    config::Config,
    error::{ClientError, Result},
    models::{
        ActivityInput, NativeActivity, PlanRequest, PlanTask, Priority, Status,
        UnavailabilityInput, UnavailabilityKind, UserId, WriteAck,
    },
    notify::{Notifier, Toast, ToastSink},
    services::Registration,
    session::{Page, SessionState, UserNav},
    time_utils::parse_local_datetime,
    AppState,
};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "planning", version, about = "Planning backend client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        nom: String,
        #[arg(long)]
        prenom: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    #[command(subcommand)]
    Activities(ActivityCommand),
    #[command(subcommand)]
    Constraints(ConstraintCommand),
    /// Workload summary over a period
    Stats {
        /// Start, e.g. 2025-12-22T00:00
        #[arg(long)]
        from: String,
        /// End, e.g. 2025-12-29T00:00
        #[arg(long)]
        to: String,
        /// Per-day fatigue instead of the summary
        #[arg(long)]
        daily: bool,
    },
    /// Scheduling conflicts, most severe first
    Conflicts {
        /// First day, e.g. 2025-12-22 (default: this week)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day, inclusive
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Compute an optimised plan for a period
    Optimise {
        /// Start, e.g. 2025-12-22T08:00
        #[arg(long)]
        from: String,
        /// End, e.g. 2025-12-26T18:00
        #[arg(long)]
        to: String,
        /// Task to place as TITRE:HOURS[:PRIORITE]; repeatable
        #[arg(long = "task", value_parser = parse_task)]
        tasks: Vec<PlanTask>,
        /// Save the plan as the user's activities
        #[arg(long)]
        apply: bool,
    },
}

#[derive(Subcommand)]
enum ActivityCommand {
    List,
    Create(ActivityArgs),
    Update {
        id: u64,
        #[command(flatten)]
        fields: ActivityArgs,
    },
    Delete {
        id: u64,
    },
}

#[derive(Args)]
struct ActivityArgs {
    #[arg(long, required_unless_present = "from_json")]
    titre: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Start, e.g. 2025-12-24T18:00:00
    #[arg(long)]
    debut: Option<String>,
    /// End, e.g. 2025-12-24T19:00:00
    #[arg(long)]
    fin: Option<String>,
    #[arg(long)]
    categorie_id: Option<u64>,
    /// BASSE, NORMALE or HAUTE
    #[arg(long)]
    priorite: Option<Priority>,
    /// PLANIFIE, EN_COURS or TERMINE
    #[arg(long)]
    statut: Option<Status>,
    /// Read the activity from a JSON file (titre/debut/fin or name/start/end)
    #[arg(long, conflicts_with = "titre")]
    from_json: Option<PathBuf>,
}

impl ActivityArgs {
    fn into_input(self) -> Result<ActivityInput> {
        if let Some(path) = self.from_json {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ClientError::Internal(anyhow::anyhow!("{}: {}", path.display(), e)))?;
            return serde_json::from_str(&content)
                .map_err(|e| ClientError::Decode(format!("{}: {}", path.display(), e)));
        }

        Ok(ActivityInput::from(NativeActivity {
            titre: self.titre.unwrap_or_default(),
            description: self.description,
            debut: self.debut,
            fin: self.fin,
            categorie_id: self.categorie_id,
            priorite: self.priorite,
            statut: self.statut,
            user_id: None,
        }))
    }
}

#[derive(Subcommand)]
enum ConstraintCommand {
    List,
    /// Set the minimum nightly sleep in hours
    Sleep { hours: f64 },
    /// Add a weekly unavailability window
    Add {
        /// Day-of-week index
        #[arg(long)]
        day: Option<u8>,
        /// HH:MM
        #[arg(long)]
        start: Option<String>,
        /// HH:MM
        #[arg(long)]
        end: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Remove an unavailability window
    Remove { id: u64 },
}

/// Prints toasts to stderr.
struct TerminalToasts;

impl ToastSink for TerminalToasts {
    fn show(&self, toast: &Toast) {
        eprintln!("[{}] {}", toast.kind, toast.message);
    }
}

/// The command being run, seen as a page of the application.
struct CommandPage {
    path: String,
    show_nav: bool,
    navigated_to: Option<String>,
}

impl CommandPage {
    fn new(command: &Commands) -> Self {
        let name = match command {
            Commands::Login { .. } | Commands::Register { .. } => "login",
            Commands::Logout | Commands::Whoami => "account",
            Commands::Activities(_) => "activities",
            Commands::Constraints(_) => "constraints",
            Commands::Stats { .. } => "stats",
            Commands::Conflicts { .. } => "conflicts",
            Commands::Optimise { .. } => "optimisation",
        };
        Self {
            path: format!("/planning/pages/{}.html", name),
            show_nav: matches!(command, Commands::Whoami),
            navigated_to: None,
        }
    }
}

impl Page for CommandPage {
    fn path(&self) -> &str {
        &self.path
    }

    fn render_user_nav(&mut self, nav: &UserNav) -> bool {
        if self.show_nav {
            println!("Logged in as {}", nav.username);
        }
        self.show_nav
    }

    fn navigate(&mut self, href: &str) {
        self.navigated_to = Some(href.to_string());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let notifier = Notifier::with_sink(Arc::new(TerminalToasts));
    let state = match AppState::new(config, notifier.clone()) {
        Ok(state) => state,
        Err(e) => {
            notifier.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        base_url = %state.config.api_base_url,
        session_file = %state.config.session_file.display(),
        "Configuration loaded"
    );

    let mut page = CommandPage::new(&cli.command);
    match run(&state, &mut page, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            state.notifier.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(state: &AppState, page: &mut CommandPage, command: Commands) -> Result<()> {
    match command {
        Commands::Login { username, password } => {
            let session = state.client.auth().login(&username, &password).await?;
            state.sessions.sign_in(&session)?;
            state
                .notifier
                .success(&format!("Logged in as {}", session.username));
        }
        Commands::Register {
            nom,
            prenom,
            email,
            password,
        } => {
            let registration = Registration {
                nom,
                prenom,
                email,
                password,
            };
            let user_id = state.client.auth().register(&registration).await?;
            state
                .notifier
                .success(&format!("Account created (user {})", user_id));
        }
        Commands::Logout => {
            state.sessions.logout(page)?;
            state.notifier.info("Logged out");
        }
        Commands::Whoami => {
            if !matches!(state.sessions.init(page), SessionState::Active(_)) {
                return Err(ClientError::NotLoggedIn);
            }
        }
        Commands::Activities(command) => {
            let user_id = require_user(state, page)?;
            run_activities(state, user_id, command).await?;
        }
        Commands::Constraints(command) => {
            let user_id = require_user(state, page)?;
            run_constraints(state, user_id, command).await?;
        }
        Commands::Stats { from, to, daily } => {
            let user_id = require_user(state, page)?;
            let (from, to) = (parse_instant(&from)?, parse_instant(&to)?);
            let stats = state.client.stats(user_id);
            if daily {
                for day in stats.daily_fatigue(from, to).await {
                    println!("{}  {:>5.0}", day.date, day.fatigue_index);
                }
            } else {
                print_json(&stats.summary(from, to).await);
            }
        }
        Commands::Conflicts { from, to } => {
            let user_id = require_user(state, page)?;
            let mut conflicts = state.client.conflicts(user_id).list(from, to).await;
            conflicts.sort_by_key(|c| c.severite.rank());
            if conflicts.is_empty() {
                state.notifier.success("No conflicts");
            }
            for c in &conflicts {
                println!("[{}] {}: {}", c.severite, c.kind, c.description);
            }
        }
        Commands::Optimise {
            from,
            to,
            tasks,
            apply,
        } => {
            let user_id = require_user(state, page)?;
            let request = PlanRequest {
                date_debut: parse_instant(&from)?,
                date_fin: parse_instant(&to)?,
                tasks,
            };
            let api = state.client.optimisation(user_id);
            let plan = if apply {
                api.apply(&request).await?
            } else {
                api.generate(&request).await?
            };

            if !plan.is_ok() {
                let reason = plan.error.unwrap_or(plan.status);
                return Err(ClientError::Decode(format!("Optimisation refused: {}", reason)));
            }
            for a in &plan.activities {
                println!("{} -> {} [{}] {}", a.debut, a.fin, a.priorite, a.titre);
            }
            if plan.applied {
                state
                    .notifier
                    .success(&format!("Plan saved ({} activities)", plan.activities.len()));
            } else {
                state.notifier.info("Plan computed; rerun with --apply to save it");
            }
        }
    }
    Ok(())
}

/// `TITRE:HOURS[:PRIORITE]`, e.g. `Rapport:3:HAUTE`. The title may
/// contain colons.
fn parse_task(raw: &str) -> std::result::Result<PlanTask, String> {
    let malformed = || format!("expected TITRE:HOURS[:PRIORITE], got {:?}", raw);
    let (rest, last) = raw.rsplit_once(':').ok_or_else(malformed)?;

    let (titre, hours, priorite) = match last.trim().parse::<u32>() {
        Ok(hours) => (rest, hours, Priority::default()),
        Err(_) => {
            let (titre, hours) = rest.rsplit_once(':').ok_or_else(malformed)?;
            let hours = hours
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid hours: {:?}", hours))?;
            (titre, hours, last.parse::<Priority>()?)
        }
    };

    Ok(PlanTask {
        titre: titre.trim().to_string(),
        duree_heures: hours,
        priorite,
    })
}

async fn run_activities(state: &AppState, user_id: UserId, command: ActivityCommand) -> Result<()> {
    let api = state.client.activities(user_id);
    match command {
        ActivityCommand::List => {
            for a in api.list().await {
                let minutes = a
                    .duration_minutes()
                    .map(|m| format!(" ({} min)", m))
                    .unwrap_or_default();
                println!(
                    "#{:<5} {} -> {} [{}/{}] {}{}",
                    a.id, a.debut, a.fin, a.priorite, a.statut, a.titre, minutes
                );
            }
        }
        ActivityCommand::Create(fields) => {
            let reply = api.create(&fields.into_input()?).await?;
            report_write(state, "Activity created", &reply);
        }
        ActivityCommand::Update { id, fields } => {
            let reply = api.update(id, &fields.into_input()?).await?;
            report_write(state, "Activity updated", &reply);
        }
        ActivityCommand::Delete { id } => {
            let reply = api.delete(id).await?;
            report_write(state, "Activity deleted", &reply);
        }
    }
    Ok(())
}

async fn run_constraints(
    state: &AppState,
    user_id: UserId,
    command: ConstraintCommand,
) -> Result<()> {
    let api = state.client.constraints(user_id);
    match command {
        ConstraintCommand::List => print_json(&api.list().await),
        ConstraintCommand::Sleep { hours } => {
            let reply = api.set_min_sleep(hours).await?;
            report_write(state, "Minimum sleep saved", &reply);
        }
        ConstraintCommand::Add {
            day,
            start,
            end,
            kind,
        } => {
            let entry = UnavailabilityInput {
                day,
                start,
                end,
                kind: kind.map(UnavailabilityKind::from),
            };
            let reply = api.add_unavailability(&entry).await?;
            report_write(state, "Unavailability added", &reply);
        }
        ConstraintCommand::Remove { id } => {
            let reply = api.delete_unavailability(id).await?;
            report_write(state, "Unavailability removed", &reply);
        }
    }
    Ok(())
}

/// Run the session check for `page`; a redirect to login means the
/// command cannot proceed.
fn require_user(state: &AppState, page: &mut CommandPage) -> Result<UserId> {
    match state.sessions.init(page) {
        SessionState::Active(session) => session.user_id.ok_or(ClientError::NotLoggedIn),
        SessionState::Redirected { .. } | SessionState::LoginPage => {
            tracing::debug!(to = ?page.navigated_to, "Session required");
            Err(ClientError::NotLoggedIn)
        }
    }
}

fn report_write(state: &AppState, done: &str, reply: &Value) {
    match WriteAck::from_value(reply) {
        Some(ack) if ack.optimised => state.notifier.warning(&format!(
            "{}; backend re-planned {} activities",
            done,
            ack.count.unwrap_or(ack.rescheduled.len() as u64)
        )),
        Some(ack) if !ack.is_ok() => state.notifier.warning(&format!(
            "{}: {}",
            done,
            ack.error.unwrap_or(ack.status)
        )),
        _ => state.notifier.success(done),
    }
    print_json(reply);
}

fn parse_instant(raw: &str) -> Result<NaiveDateTime> {
    parse_local_datetime(raw)
        .ok_or_else(|| ClientError::Internal(anyhow::anyhow!("Invalid date/time: {}", raw)))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => tracing::warn!(error = %e, "Failed to render JSON"),
    }
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("planning_client=info,warn")),
        )
        .with(format)
        .init();
}
