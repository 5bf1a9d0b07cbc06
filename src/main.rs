use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use kg_explorer::app::load_use_case::LoadUseCase;
use kg_explorer::constants::DEFAULT_SOURCE_URL;
use kg_explorer::domain::{FilterCriteria, SortKey};
use kg_explorer::infra::http_client::ReqwestSource;
use kg_explorer::logging;
use kg_explorer::pipeline::export::write_export;
use kg_explorer::registry::RankRegistry;
use kg_explorer::state::ExplorerState;

#[derive(Parser)]
#[command(name = "kg_explorer")]
#[command(about = "Top-100 kindergarten ranking explorer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ViewArgs {
    /// Free-text search over both name fields
    #[arg(long)]
    search: Option<String>,
    /// Exact district filter
    #[arg(long)]
    district: Option<String>,
    /// Exact teaching-language filter
    #[arg(long)]
    language: Option<String>,
    /// Exact gender filter
    #[arg(long)]
    gender: Option<String>,
    /// Free-scheme filter (有 / 沒有)
    #[arg(long)]
    free_scheme: Option<String>,
    /// Sort key: rank, name, name-desc, district, tuition, tuition-desc
    #[arg(long, default_value = "rank")]
    sort: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a load cycle, apply filters/sort and print the visible set
    Show {
        #[command(flatten)]
        view: ViewArgs,
        /// Print records as JSON instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Run a load cycle, apply filters/sort and write the CSV export
    Export {
        #[command(flatten)]
        view: ViewArgs,
        /// Directory the export file is written into
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
    },
}

impl ViewArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            district: self.district.clone().unwrap_or_default(),
            language: self.language.clone().unwrap_or_default(),
            gender: self.gender.clone().unwrap_or_default(),
            free_scheme: self.free_scheme.clone().unwrap_or_default(),
        }
    }

    fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.sort).unwrap_or_else(|| {
            warn!(token = %self.sort, "unknown sort key, falling back to rank order");
            SortKey::default()
        })
    }
}

async fn load_state(view: &ViewArgs) -> anyhow::Result<ExplorerState> {
    let url =
        std::env::var("KG_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());
    let use_case = LoadUseCase::new(
        Box::new(ReqwestSource::new()?),
        url,
        RankRegistry::seeded(),
    );
    let Some(outcome) = use_case.load().await else {
        anyhow::bail!("a load cycle is already in flight");
    };

    if let Some(reason) = outcome.degrade_reason() {
        println!("⚠️  {reason}; showing placeholder data");
    }

    let mut state = ExplorerState::new();
    state.replace(outcome);
    state.set_criteria(view.criteria());
    state.set_sort_key(view.sort_key());
    Ok(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Show { view, json } => {
            let state = load_state(&view).await?;
            let visible = state.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for record in &visible {
                    println!(
                        "#{:<3} {} ({}) | {} | {}",
                        record.rank,
                        record.localized_name,
                        record.canonical_key,
                        record.district,
                        record.tuition_text
                    );
                }
                println!("\n共 {} 間幼稚園顯示", visible.len());
            }
        }
        Commands::Export { view, output_dir } => {
            let state = load_state(&view).await?;
            let visible = state.visible();
            let path = write_export(&visible, &output_dir)?;
            println!("📄 Exported {} rows to {}", visible.len(), path.display());
        }
    }
    Ok(())
}
