use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use talentsync_core::{
    models::{
        schedule::{clock_time, ScheduleParameters},
        ApplicationId, InterviewerId,
    },
    scheduling::{generate_schedule, to_scheduled_interviews},
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Generate an interview schedule locally and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "schedule-preview", version)]
struct Cli {
    /// Interviewer id, repeat for several interviewers
    #[arg(long = "interviewer", required = true)]
    interviewers: Vec<String>,

    /// Application id, repeat for several candidates
    #[arg(long = "candidate")]
    candidates: Vec<String>,

    /// Generate `c1..cN` candidate ids instead of listing them
    #[arg(long, conflicts_with = "candidates")]
    candidate_count: Option<usize>,

    /// First day, YYYY-MM-DD
    #[arg(long)]
    start_date: NaiveDate,

    /// Last day, YYYY-MM-DD (defaults to the start date)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    #[arg(long, value_parser = parse_clock, default_value = "10:00")]
    day_start: NaiveTime,

    #[arg(long, value_parser = parse_clock, default_value = "17:00")]
    day_end: NaiveTime,

    /// Interview length in minutes
    #[arg(long, default_value_t = 45)]
    duration: u32,

    /// Schedule on Saturdays and Sundays too
    #[arg(long)]
    include_weekends: bool,

    /// Do not reserve a lunch break
    #[arg(long)]
    no_lunch: bool,

    #[arg(long, value_parser = parse_clock, default_value = "13:00")]
    lunch_start: NaiveTime,

    #[arg(long, value_parser = parse_clock, default_value = "14:00")]
    lunch_end: NaiveTime,

    /// Print the confirmation request body for this job posting instead of the schedule
    #[arg(long)]
    job_posting_id: Option<String>,

    /// Log verbosely to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_clock(raw: &str) -> std::result::Result<NaiveTime, String> {
    clock_time::parse(raw).ok_or_else(|| format!("expected HH:MM, got '{raw}'"))
}

impl Cli {
    fn parameters(&self) -> ScheduleParameters {
        ScheduleParameters {
            daily_start_time: self.day_start,
            daily_end_time: self.day_end,
            interview_duration: self.duration,
            skip_weekends: !self.include_weekends,
            include_lunch_break: !self.no_lunch,
            lunch_start_time: self.lunch_start,
            lunch_end_time: self.lunch_end,
            ..ScheduleParameters::new(self.start_date, self.end_date.unwrap_or(self.start_date))
        }
    }

    fn candidates(&self) -> Vec<ApplicationId> {
        match self.candidate_count {
            Some(count) => (1..=count).map(|n| ApplicationId::new(format!("c{n}"))).collect(),
            None => self.candidates.iter().map(ApplicationId::new).collect(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let interviewers: Vec<InterviewerId> = cli.interviewers.iter().map(InterviewerId::new).collect();
    let candidates = cli.candidates();
    if candidates.is_empty() {
        return Err(eyre!("pass --candidate at least once or --candidate-count"));
    }

    let outcome = generate_schedule(&interviewers, &candidates, &cli.parameters())?;
    info!(
        days = outcome.days.len(),
        interviews = outcome.slot_count(),
        "schedule generated"
    );
    if let Some(shortfall) = outcome.capacity_error() {
        warn!("{shortfall}");
    }

    let json = match &cli.job_posting_id {
        Some(job_posting_id) => {
            let schedules = to_scheduled_interviews(&outcome.days, job_posting_id);
            serde_json::to_string_pretty(&serde_json::json!({ "schedules": schedules }))?
        }
        None => serde_json::to_string_pretty(&outcome)?,
    };
    println!("{json}");

    Ok(())
}
