use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use matchvec::prelude::*;

/// Candidate/job matching and semantic search over job postings
#[derive(Parser, Debug)]
#[command(name = "matchvec")]
#[command(about = "Job matching & semantic search engine", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Index a jobs file and search it
    Search {
        /// JSON file with an array of job postings
        #[arg(short, long)]
        jobs: PathBuf,

        /// Query text
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        top_k: usize,

        /// Minimum result score
        #[arg(long, default_value_t = 0.0)]
        min_score: f32,

        /// Rank by combined dense + keyword score instead of dense only
        #[arg(long)]
        hybrid: bool,
    },
    /// Score a candidate against a job posting
    Match {
        /// JSON file with a candidate profile
        #[arg(short, long)]
        candidate: PathBuf,

        /// JSON file with a job posting
        #[arg(short, long)]
        job: PathBuf,
    },
}

fn job_document(index: usize, job: &JobPosting) -> Document {
    let mut metadata = Metadata::new();
    metadata.insert("jobId".to_string(), serde_json::json!(format!("job-{index}")));
    metadata.insert("title".to_string(), serde_json::json!(job.title));
    metadata.insert("company".to_string(), serde_json::json!(job.company));
    Document::new(format!("job-{index}"), job.to_search_text()).with_metadata(metadata)
}

async fn run_search(
    jobs_path: &PathBuf,
    query: &str,
    top_k: usize,
    min_score: f32,
    hybrid: bool,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(jobs_path)?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)?;
    info!(count = jobs.len(), "loaded job postings");

    let store = VectorStore::from_env(Arc::new(HashEmbedder::default()))?;
    let documents: Vec<Document> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| job_document(i, job))
        .collect();

    let results = if hybrid {
        let embedded = store.embed_batch(documents).await?;
        store
            .hybrid_search(
                query,
                &embedded,
                &HybridOptions::default().top_k(top_k).min_score(min_score),
            )
            .await?
    } else {
        store.insert_batch(documents).await?;
        let stats = store.stats().await?;
        info!(backend = %stats.backend, documents = stats.documents, "indexed");
        store
            .search(
                query,
                &SearchOptions::default().top_k(top_k).min_score(min_score),
            )
            .await?
    };

    for result in results {
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}

async fn run_match(candidate_path: &PathBuf, job_path: &PathBuf) -> anyhow::Result<()> {
    let candidate: CandidateProfile =
        serde_json::from_str(&std::fs::read_to_string(candidate_path)?)?;
    let job: JobPosting = serde_json::from_str(&std::fs::read_to_string(job_path)?)?;

    let result = MatchOrchestrator::algorithmic_only()
        .match_candidate(&candidate, &job)
        .await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &args.command {
        Command::Search {
            jobs,
            query,
            top_k,
            min_score,
            hybrid,
        } => run_search(jobs, query, *top_k, *min_score, *hybrid).await,
        Command::Match { candidate, job } => run_match(candidate, job).await,
    }
}
