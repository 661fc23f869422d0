use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use creator_scout::config::AppConfig;
use creator_scout::error::AppError;
use creator_scout::recommendations::{
    CampaignBrief, Creator, RankedRecommendations, RecommendationRequest, RecommendationService,
    ScoringWeights,
};
use creator_scout::telemetry;
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(
    name = "Creator Scout",
    about = "Rank a creator roster against a campaign brief from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a roster against a campaign brief and print the ranking
    Recommend(RecommendArgs),
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Campaign brief JSON file
    #[arg(long)]
    campaign: PathBuf,
    /// Creator roster JSON file (array of creator records)
    #[arg(long)]
    roster: PathBuf,
    /// Number of recommendations to return
    #[arg(long)]
    top_k: Option<usize>,
    /// Reference date for recency penalties (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    scored_on: Option<NaiveDate>,
    /// Emit the raw JSON envelope instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let campaign: CampaignBrief = load_json(&args.campaign)?;
    let roster: Vec<Creator> = load_json(&args.roster)?;

    let service = RecommendationService::new(ScoringWeights::default(), config.recommendations.top_k)?;
    let scored_on = args.scored_on.unwrap_or_else(|| Local::now().date_naive());
    let response = service.recommend(RecommendationRequest {
        campaign: campaign.clone(),
        roster,
        top_k: args.top_k,
        scored_on: Some(scored_on),
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_recommendations(&campaign, scored_on, &response);
    }

    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render_recommendations(
    campaign: &CampaignBrief,
    scored_on: NaiveDate,
    response: &RankedRecommendations,
) {
    println!("Creator recommendations");
    println!("Campaign goal: {}", campaign.goal);
    println!(
        "Target: {} ages {}-{}, budget {} cents, deadline {} (scored {})",
        campaign.audience_target.country,
        campaign.audience_target.age_min(),
        campaign.audience_target.age_max(),
        campaign.budget_cents,
        campaign.deadline,
        scored_on
    );

    if response.recommendations.is_empty() {
        println!("\nNo creators to recommend");
    } else {
        println!();
        for (rank, recommendation) in response.recommendations.iter().enumerate() {
            let breakdown = &recommendation.fit_breakdown;
            println!(
                "{}. {} | score {:.4}",
                rank + 1,
                recommendation.creator_id.0,
                recommendation.score
            );
            println!("   why: {}", recommendation.why);
            println!(
                "   tags {:.2} | audience {:.2} | performance {:.2} | budget {:.2} | reliability {:.2} | penalty {:.2}",
                breakdown.tags,
                breakdown.audience_overlap,
                breakdown.performance,
                breakdown.budget_fit,
                breakdown.reliability,
                breakdown.penalty
            );
        }
    }

    println!(
        "\nScored {} creators (scoring version {})",
        response.metadata.total_creators, response.metadata.scoring_version
    );
}
