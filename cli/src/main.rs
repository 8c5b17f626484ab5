//! Attendance portal from the terminal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the same core as the browser client: session, auth gateway, route
//! guard and domain services. The bearer token lives in a file keyed like
//! the browser's `localStorage` entry, so `login` once and every later
//! command reuses it.
//!
//! DESIGN
//! ======
//! Every role-scoped command first runs the guard for the page it mirrors.
//! A denial prints the redirect instead of issuing the data request, which
//! keeps the CLI honest about what the browser would allow.

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use portal::auth::AuthError;
use portal::config::{ConfigError, PortalConfig, TOKEN_STORAGE_KEY};
use portal::error::ApiError;
use portal::guard::{DenyReason, GuardState, RouteGuard};
use portal::http::{ApiClient, FilePart, TransportError};
use portal::pipeline::PipelineError;
use portal::routes::{AppRoute, LOGIN_PATH};
use portal::services::appeals::{self, AppealDecision, AppealRequest, AppealStatus};
use portal::services::assistant::{self, ChatLog};
use portal::services::submissions::{self, UploadTarget};
use portal::services::teacher::{self, LectureAction};
use portal::services::{attendance, lectures};
use portal::session::{FileSessionStore, SharedSession};
use portal::types::{Role, User};
use portal::views::dates::DateRange;
use portal::views::student::{calendar_rows, lecture_cards, subject_code};
use portal::views::teacher::{AnalysisView, DECISION_FILTERS, ReportFilter, ReportRow, UNDERSTANDING_FILTERS, overview_rows};
use portal::AuthGateway;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP transport: {0}")]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("access to {path} denied ({reason:?}); redirecting to {redirect}")]
    Denied { path: String, reason: DenyReason, redirect: &'static str },
    #[error("class `{0}` is not assigned to you")]
    UnknownClass(String),
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message("Request failed."),
            Self::Auth(e) => e.user_message(),
            Self::Pipeline(e) => format!("{} failed: {}", e.step, e.source.user_message("Request failed.")),
            other => other.to_string(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Attendance portal CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "PORTAL_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "student")]
        role: Role,
    },
    Logout,
    Whoami,
    /// Report whether the stored session may open a page path.
    Open { path: String },
    Student(StudentCommand),
    Teacher(TeacherCommand),
}

#[derive(Args, Debug)]
struct StudentCommand {
    #[command(subcommand)]
    command: StudentSubcommand,
}

#[derive(Subcommand, Debug)]
enum StudentSubcommand {
    /// Profile, enrolled classes and today's lectures.
    Today,
    Attendance {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    Submissions,
    Upload {
        file: PathBuf,
        #[arg(long, conflicts_with = "class", required_unless_present = "class")]
        lecture: Option<String>,
        #[arg(long)]
        class: Option<String>,
    },
    Status {
        submission_id: String,
    },
    /// Appeal the attendance recorded in one calendar cell.
    Appeal {
        #[arg(long)]
        date: String,
        #[arg(long)]
        slot: u8,
        /// Subject code, or the calendar label such as "CS101 - Intro".
        #[arg(long)]
        subject: String,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Args, Debug)]
struct TeacherCommand {
    #[command(subcommand)]
    command: TeacherSubcommand,
}

#[derive(Subcommand, Debug)]
enum TeacherSubcommand {
    Schedule,
    /// Assigned classes, or one roster with `--class`.
    Classes {
        #[arg(long)]
        class: Option<String>,
    },
    Lock {
        lecture: String,
        #[arg(long)]
        unlock: bool,
    },
    Start {
        lecture: String,
        #[arg(long)]
        concept: Option<String>,
    },
    Close {
        lecture: String,
    },
    Overview {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    Report {
        lecture: String,
        #[arg(long, default_value = "ALL", ignore_case = true, value_parser = PossibleValuesParser::new(DECISION_FILTERS))]
        decision: String,
        #[arg(long, default_value = "ALL", ignore_case = true, value_parser = PossibleValuesParser::new(UNDERSTANDING_FILTERS))]
        understanding: String,
    },
    Appeals {
        #[arg(long, default_value = "PENDING")]
        status: AppealStatus,
    },
    Resolve {
        appeal: String,
        #[arg(long)]
        decision: AppealDecision,
        #[arg(long)]
        comment: Option<String>,
    },
    Analysis {
        #[arg(long)]
        lecture: String,
        #[arg(long)]
        student: String,
    },
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = PortalConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    let session_file = cli.session_file.unwrap_or_else(default_session_file);
    let session: SharedSession = Arc::new(FileSessionStore::open(session_file));
    let gateway = AuthGateway::new(ApiClient::with_reqwest(&config, session)?);

    match cli.command {
        Command::Login { username, password, role } => {
            let login = gateway.sign_in(&username, &password, role).await?;
            println!(
                "Logged in as {} ({}); home is {}",
                login.username.as_deref().unwrap_or(&username),
                login.role,
                login.role.home_path()
            );
            Ok(())
        }
        Command::Logout => {
            gateway.logout();
            println!("Logged out");
            Ok(())
        }
        Command::Whoami => {
            let user = gateway.current_user().await?;
            print!("{}", render::profile(&user));
            Ok(())
        }
        Command::Open { path } => run_open(&gateway, &path).await,
        Command::Student(student) => run_student(&gateway, student.command).await,
        Command::Teacher(teacher) => run_teacher(&gateway, teacher.command).await,
    }
}

fn default_session_file() -> PathBuf {
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(".attendance-portal").join(TOKEN_STORAGE_KEY)
}

/// Run the guard for `route` and hand back the authorized user.
async fn require(gateway: &AuthGateway, route: &AppRoute) -> Result<User, CliError> {
    let Some(mut guard) = RouteGuard::for_route(route) else {
        return gateway.current_user().await.map_err(CliError::from);
    };
    let state = guard.evaluate(gateway).await.clone();
    match state {
        GuardState::Authorized(user) => Ok(user),
        GuardState::Denied(reason) => Err(CliError::Denied {
            path: route.to_path(),
            reason,
            redirect: guard.redirect().map_or(LOGIN_PATH, |r| r.to),
        }),
        GuardState::Loading => Err(CliError::Denied {
            path: route.to_path(),
            reason: DenyReason::IdentityUnavailable,
            redirect: LOGIN_PATH,
        }),
    }
}

async fn run_open(gateway: &AuthGateway, path: &str) -> Result<(), CliError> {
    let route = AppRoute::from_path(path);
    if route.redirects_to_login() {
        println!("{path}: unknown page; redirecting to {LOGIN_PATH}");
        return Ok(());
    }
    let Some(mut guard) = RouteGuard::for_route(&route) else {
        println!("{}: public page", route.to_path());
        return Ok(());
    };
    let state = guard.evaluate(gateway).await.clone();
    match (state, guard.redirect()) {
        (GuardState::Authorized(user), _) => {
            println!("{}: authorized as {} ({})", route.to_path(), user.display_name(), user.role);
        }
        (state, redirect) => {
            let to = redirect.map_or(LOGIN_PATH, |r| r.to);
            println!("{}: denied ({state:?}); redirecting to {to}", route.to_path());
        }
    }
    Ok(())
}

// =============================================================================
// STUDENT
// =============================================================================

async fn run_student(gateway: &AuthGateway, command: StudentSubcommand) -> Result<(), CliError> {
    let api = gateway.api();
    match command {
        StudentSubcommand::Today => {
            let user = require(gateway, &AppRoute::StudentHome).await?;
            let (today, classes) = futures_util::join!(
                lectures::today_lectures(api, &user.user_id),
                lectures::my_classes(api, &user.user_id)
            );
            print!("{}", render::profile(&user));
            println!();
            print!("{}", render::enrolled_classes(&classes?.classes));
            println!();
            print!("{}", render::lecture_cards(&lecture_cards(&today?.lectures)));
        }
        StudentSubcommand::Attendance { start, end } => {
            let user = require(gateway, &AppRoute::StudentAttendance).await?;
            let range = date_range(start.as_deref(), end.as_deref())?;
            let overview = attendance::student_overview(api, &user.user_id, &range).await?;
            println!("Attendance from {} to {}", range.start_iso(), range.end_iso());
            print!("{}", render::calendar(&calendar_rows(&overview.calendar)));
            println!();
            print!("{}", render::summary(&overview.summary));
        }
        StudentSubcommand::Submissions => {
            require(gateway, &AppRoute::StudentSubmissions).await?;
            let items = submissions::student_submissions(api).await?;
            print!("{}", render::submissions(&items));
        }
        StudentSubcommand::Upload { file, lecture, class } => {
            let user = require(gateway, &AppRoute::StudentHome).await?;
            let target = match (lecture, class) {
                (Some(id), _) => UploadTarget::LectureInstance(id),
                (None, Some(id)) => UploadTarget::Class(id),
                (None, None) => return Err(ApiError::Rejected("pass --lecture or --class".to_owned()).into()),
            };
            let part = read_file_part(&file)?;
            let receipt = submissions::upload_submission(api, &user.user_id, &target, part).await?;
            println!(
                "Uploaded: submission {} ({})",
                receipt.submission_id.as_deref().unwrap_or("-"),
                receipt.status.as_deref().unwrap_or("accepted")
            );
        }
        StudentSubcommand::Status { submission_id } => {
            require(gateway, &AppRoute::StudentSubmissions).await?;
            let status = submissions::submission_status(api, &submission_id).await?;
            print!("{}", render::submission_status(&status));
        }
        StudentSubcommand::Appeal { date, slot, subject, reason } => {
            let user = require(gateway, &AppRoute::StudentAppeal).await?;
            let request = AppealRequest {
                user_id: user.user_id,
                date,
                hour_slot: slot,
                subject_code: subject_code(&subject).to_owned(),
                reason,
            };
            let ack = appeals::appeal_calendar_cell(api, request).await?;
            print_json(&ack)?;
        }
    }
    Ok(())
}

fn date_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange, ApiError> {
    let mut range = DateRange::default_window();
    if let Some(start) = start {
        range = range.with_start(start)?;
    }
    if let Some(end) = end {
        range = range.with_end(end)?;
    }
    Ok(range)
}

fn read_file_part(path: &Path) -> Result<FilePart, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(FilePart { content_type: content_type_for(path).to_owned(), file_name, bytes })
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

// =============================================================================
// TEACHER
// =============================================================================

async fn run_teacher(gateway: &AuthGateway, command: TeacherSubcommand) -> Result<(), CliError> {
    let api = gateway.api();
    match command {
        TeacherSubcommand::Schedule => {
            let user = require(gateway, &AppRoute::TeacherHome).await?;
            let schedule = teacher::teacher_schedule(api, &user.user_id).await?;
            print!("{}", render::schedule(&schedule));
        }
        TeacherSubcommand::Classes { class } => {
            let user = require(gateway, &AppRoute::TeacherClasses).await?;
            let list = teacher::teacher_classes(api, &user.user_id).await?;
            match class {
                None => print!("{}", render::teacher_classes(&list.classes)),
                Some(code) => {
                    let found = list
                        .classes
                        .iter()
                        .find(|c| c.class_code.eq_ignore_ascii_case(&code) || c.class_id == code)
                        .ok_or(CliError::UnknownClass(code))?;
                    print!("{}", render::roster(found));
                }
            }
        }
        TeacherSubcommand::Lock { lecture, unlock } => {
            require(gateway, &AppRoute::TeacherHome).await?;
            let ack = teacher::toggle_lecture_lock(api, &lecture, !unlock).await?;
            print_json(&ack)?;
        }
        TeacherSubcommand::Start { lecture, concept } => {
            let user = require(gateway, &AppRoute::TeacherHome).await?;
            let action = LectureAction::Start { concept };
            let ack = teacher::control_lecture(api, &lecture, &user.user_id, &action).await?;
            print_json(&ack)?;
        }
        TeacherSubcommand::Close { lecture } => {
            let user = require(gateway, &AppRoute::TeacherHome).await?;
            let ack = teacher::control_lecture(api, &lecture, &user.user_id, &LectureAction::Close).await?;
            print_json(&ack)?;
        }
        TeacherSubcommand::Overview { start, end } => {
            let user = require(gateway, &AppRoute::TeacherAttendance).await?;
            let range = date_range(start.as_deref(), end.as_deref())?;
            let overview = attendance::teacher_overview(api, &user.user_id, &range).await?;
            println!("Attendance from {} to {}", range.start_iso(), range.end_iso());
            print!("{}", render::overview(&overview_rows(&overview.lectures)));
        }
        TeacherSubcommand::Report { lecture, decision, understanding } => {
            require(gateway, &AppRoute::TeacherReport(lecture.clone())).await?;
            let report = attendance::lecture_attendance(api, &lecture).await?;
            let filter = ReportFilter {
                decision: decision.to_ascii_uppercase(),
                understanding: understanding.to_ascii_uppercase(),
            };
            let rows: Vec<ReportRow> = filter.apply(&report.students).into_iter().map(ReportRow::from).collect();
            print!("{}", render::report(&rows, report.students.len()));
        }
        TeacherSubcommand::Appeals { status } => {
            let user = require(gateway, &AppRoute::TeacherAppeals).await?;
            let list = appeals::teacher_appeals(api, &user.user_id, status).await?;
            print!("{}", render::appeals(&list.appeals, status));
        }
        TeacherSubcommand::Resolve { appeal, decision, comment } => {
            let user = require(gateway, &AppRoute::TeacherAppeals).await?;
            let ack = appeals::resolve_appeal(api, &appeal, &user.user_id, decision, comment.as_deref()).await?;
            print_json(&ack)?;
        }
        TeacherSubcommand::Analysis { lecture, student } => {
            require(gateway, &AppRoute::TeacherAppeals).await?;
            let analysis = appeals::student_appeal_data(api, &lecture, &student).await?;
            print!("{}", render::analysis(&AnalysisView::from(&analysis)));
        }
        TeacherSubcommand::Chat { message } => {
            let user = require(gateway, &AppRoute::TeacherHome).await?;
            let message = message.join(" ");
            let mut log = ChatLog::default();
            log.push_user(&message);
            log.push_result(assistant::teacher_chat(api, &user.user_id, &message).await);
            print!("{}", render::chat(&log));
        }
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for(Path::new("proof.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("notes.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn report_filters_accept_lowercase() {
        let cli = Cli::try_parse_from(["portal", "teacher", "report", "L1", "--decision", "absent"]).unwrap();
        let Command::Teacher(TeacherCommand { command: TeacherSubcommand::Report { decision, .. } }) = cli.command
        else {
            panic!("expected teacher report");
        };
        assert_eq!(decision.to_ascii_uppercase(), "ABSENT");
    }

    #[test]
    fn upload_requires_a_target() {
        assert!(Cli::try_parse_from(["portal", "student", "upload", "proof.png"]).is_err());
        assert!(
            Cli::try_parse_from(["portal", "student", "upload", "proof.png", "--lecture", "L1", "--class", "C1"])
                .is_err()
        );
    }

    #[test]
    fn role_and_appeal_values_parse() {
        let cli = Cli::try_parse_from(["portal", "login", "--username", "bob", "--password", "x", "--role", "teacher"])
            .unwrap();
        assert!(matches!(cli.command, Command::Login { role: Role::Teacher, .. }));
        let cli = Cli::try_parse_from(["portal", "teacher", "resolve", "7", "--decision", "approve"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Teacher(TeacherCommand {
                command: TeacherSubcommand::Resolve { decision: AppealDecision::Approved, .. }
            })
        ));
    }

    #[test]
    fn date_range_defaults_to_window_and_rejects_inversion() {
        let range = date_range(None, None).unwrap();
        assert_eq!(range, DateRange::default_window());
        assert!(date_range(Some("2024-05-10"), Some("2024-05-01")).is_err());
    }
}
