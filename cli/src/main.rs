//! CLI entrypoint for agoravote
//!
//! Wires the layers together with dependency injection: the JSON-file
//! document store, the heuristic forecast gateway, and the JSONL audit
//! logger behind the engine's use cases.

mod commands;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use commands::{Cli, Command};
use agora_application::{
    AnnounceWinnerUseCase, AuditLogger, CastVoteInput, CastVoteUseCase, CreateRoomInput,
    CreateRoomUseCase, DocumentStore, EngineConfig, ManageRoomUseCase, NoAuditLogger,
    PredictOutcomeUseCase, RefillQuotaUseCase, RegisterProfileUseCase, ResetSessionUseCase,
    ViewResultsUseCase,
};
use agora_infrastructure::{
    ConfigLoader, HeuristicForecastGateway, JsonFileDocumentStore, JsonlAuditLogger,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load and validate configuration
    let file_config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
    file_config.validate()?;
    let engine_config = file_config.engine.clone();

    // === Dependency Injection ===
    let store_path = cli.store.clone().unwrap_or_else(|| file_config.store.store_path());
    let store = Arc::new(JsonFileDocumentStore::open(&store_path)?);
    info!(store = %store.path().display(), "store ready");

    let audit: Arc<dyn AuditLogger> =
        match JsonlAuditLogger::new(file_config.store.audit_log_path()) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoAuditLogger),
        };

    let now = Utc::now();
    let user = cli.user.clone();

    match cli.command {
        Command::Register { role } => {
            let use_case = RegisterProfileUseCase::new(Arc::clone(&store));
            let profile = use_case.execute(&user, role.into(), now).await?;
            println!("Registered {} as {}", profile.id, profile.role);
        }

        Command::CreateRoom => {
            let use_case = CreateRoomUseCase::new(Arc::clone(&store), engine_config)
                .with_audit(Arc::clone(&audit));
            let output = use_case.execute(CreateRoomInput::new(&user), now).await?;
            println!("Room created: {}", output.room.id);
            println!("Join code:    {}", output.room.code);
            println!("Vote starts left today: {}", output.remaining_starts);
        }

        Command::Rooms => {
            let use_case = ViewResultsUseCase::new(Arc::clone(&store), engine_config);
            let rooms = use_case.rooms_owned_by(&user).await?;
            if rooms.is_empty() {
                println!("No rooms yet.");
            }
            for room in rooms {
                let state = if room.is_voting_open { "open" } else { "closed" };
                println!("{}  {}  [{}]  {}", room.id, room.code, state, room.topic);
            }
        }

        Command::Join { code } => {
            let use_case = ViewResultsUseCase::new(Arc::clone(&store), engine_config);
            let room = use_case.room_by_code(&code).await?;
            println!("Room:         {}", room.id);
            println!("Topic:        {}", room.topic);
            println!("Lecture time: {}", room.lecture_time);
            println!(
                "Voting:       {}",
                if room.is_voting_open { "open" } else { "closed" }
            );
        }

        Command::Cast { room, option } => {
            let use_case = CastVoteUseCase::new(Arc::clone(&store), engine_config)
                .with_audit(Arc::clone(&audit));
            let vote = use_case
                .execute(CastVoteInput::new(&room, &user, &option), now)
                .await?;
            println!("Vote cast for: {}", vote.vote_option);
        }

        Command::Results { room } => {
            let use_case = ViewResultsUseCase::new(Arc::clone(&store), engine_config);
            let results = use_case.results(&room).await?;
            print_results(&results);
        }

        Command::Toggle { room } => {
            let use_case =
                ManageRoomUseCase::new(Arc::clone(&store)).with_audit(Arc::clone(&audit));
            let room = use_case.toggle_voting(&room, &user).await?;
            println!(
                "Voting {}",
                if room.is_voting_open { "opened" } else { "closed" }
            );
        }

        Command::SetDetails {
            room,
            topic,
            lecture_time,
        } => {
            // Unset fields keep their current values.
            let current = store.room(&room).await?;
            let topic = topic.unwrap_or(current.topic);
            let lecture_time = lecture_time.unwrap_or(current.lecture_time);

            let use_case = ManageRoomUseCase::new(Arc::clone(&store));
            let room = use_case
                .update_details(&room, &user, &topic, &lecture_time)
                .await?;
            println!("Topic:        {}", room.topic);
            println!("Lecture time: {}", room.lecture_time);
        }

        Command::Announce { room } => {
            let use_case = AnnounceWinnerUseCase::new(Arc::clone(&store), engine_config)
                .with_audit(Arc::clone(&audit));
            let output = use_case.execute(&room, &user).await?;
            println!("The winner is \"{}\"", output.winner);
            for entry in output.tally.entries() {
                println!("  {}: {}", entry.option, entry.count);
            }
        }

        Command::Reset { room } => {
            let use_case = ResetSessionUseCase::new(Arc::clone(&store), engine_config)
                .with_audit(Arc::clone(&audit));
            let output = use_case.execute(&room, &user, now).await?;
            println!("Session reset: {} votes archived", output.archived_count);
            println!("Vote starts left today: {}", output.remaining_starts);
        }

        Command::RemoveVote { room, voter } => {
            let use_case =
                ManageRoomUseCase::new(Arc::clone(&store)).with_audit(Arc::clone(&audit));
            use_case.remove_vote(&room, &user, &voter).await?;
            println!("Removed vote of {voter}");
        }

        Command::DeleteRoom { room } => {
            let use_case =
                ManageRoomUseCase::new(Arc::clone(&store)).with_audit(Arc::clone(&audit));
            use_case.delete_room(&room, &user).await?;
            println!("Room deleted");
        }

        Command::Refill => {
            let use_case = RefillQuotaUseCase::new(Arc::clone(&store), engine_config);
            let granted = use_case.execute(&user).await?;
            println!("Quota refilled: {granted} session starts available today");
        }

        Command::Predict { room } => {
            let gateway = Arc::new(HeuristicForecastGateway::new(
                file_config.forecast.leader_bias,
                file_config.forecast.friday_momentum,
            ));
            let use_case = PredictOutcomeUseCase::new(Arc::clone(&store), gateway, engine_config);
            let predictions = use_case.execute(&room, now).await?;
            println!("Forecast:");
            for p in &predictions {
                println!("  {}: {:.1}%", p.option, p.probability);
            }
        }
    }

    Ok(())
}

fn print_results(results: &agora_application::RoomResults) {
    let room = &results.room;
    println!("Room:         {}  (code {})", room.id, room.code);
    println!("Topic:        {}", room.topic);
    println!("Lecture time: {}", room.lecture_time);
    println!(
        "Voting:       {}",
        if room.is_voting_open { "open" } else { "closed" }
    );
    if room.winner_announced
        && let Some(winner) = &room.winner_option
    {
        println!("Winner:       {winner}");
    }

    println!();
    for entry in results.tally.entries() {
        println!("  {}: {}", entry.option, entry.count);
    }
    println!("  Total: {}", results.total_votes());

    if !results.series.is_empty() {
        println!();
        println!("Cumulative:");
        for point in &results.series {
            let counts = point
                .counts
                .entries()
                .iter()
                .map(|e| format!("{} {}", e.option, e.count))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {}  {}", point.timestamp.format("%H:%M:%S"), counts);
        }
    }

    if !results.votes.is_empty() {
        println!();
        println!("Participants ({}):", results.votes.len());
        for vote in &results.votes {
            println!("  {}", vote.voter_id);
        }
    }
}
