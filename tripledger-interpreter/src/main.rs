#![warn(clippy::uninlined_format_args)]

use std::{borrow::Cow, env, process};

use tracing_subscriber::EnvFilter;
use tripledger_application::BudgetProcessor;
use tripledger_domain::{
    ParticipantId, ParticipantSet, ParticipantSetError, SettlementService, TripId,
};
use tripledger_infrastructure::{AppConfig, JsonExpenseFile};
use tripledger_presentation::BudgetPresenter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Logs go to stderr so the budget view on stdout stays clean.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Err("Usage: tripledger <expenses.json> [trip-id]".into());
    };
    let trip_id = args.next().map(TripId::new);

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    let file = JsonExpenseFile::load(&path).map_err(|err| err.to_string())?;

    let participants = resolve_participants(&config, &file)?;
    let service = SettlementService::new(config.settlement_policy());
    let processor = BudgetProcessor::new(&file, &participants, service);

    let summary = match &trip_id {
        Some(trip_id) => processor.summarize_trip(trip_id),
        None => processor.summarize_all(),
    }
    .map_err(|err| err.to_string())?;

    print!("{}", BudgetPresenter::render(&summary, &participants));
    Ok(())
}

fn resolve_participants(config: &AppConfig, file: &JsonExpenseFile) -> CliResult<ParticipantSet> {
    let declared: Vec<ParticipantId> = match &config.participants {
        Some(participants) => participants.clone(),
        None => file.participants().to_vec(),
    };

    ParticipantSet::try_new(declared).map_err(|err| match err {
        ParticipantSetError::Empty => Cow::Borrowed(
            "No participants configured; list them in the file's `participants` or TRIPLEDGER_PARTICIPANTS",
        ),
        ParticipantSetError::Duplicate(_) => Cow::Owned(err.to_string()),
    })
}
