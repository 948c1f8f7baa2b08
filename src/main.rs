use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use reqdelta_core::ComparisonResult;
use reqdelta_engine::{best_match, ComparisonEngine, EngineConfig};
use reqdelta_report::{ReportFormat, ReportGenerator};

/// Compare feature requirements against an existing implementation
#[derive(Parser, Debug)]
#[command(name = "reqdelta")]
#[command(about = "Semantic requirements comparison and gap analysis", long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["existing", "existing_dir"])))]
struct Args {
    /// Path to the new requirements document (markdown)
    #[arg(long)]
    new: PathBuf,

    /// Path to the existing implementation document (markdown)
    #[arg(long)]
    existing: Option<PathBuf>,

    /// Directory of existing implementation documents (batch mode)
    #[arg(long)]
    existing_dir: Option<PathBuf>,

    /// Output file path (default: auto-generated under the output directory)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Report format: markdown, html or both
    #[arg(long, default_value = "html")]
    format: ReportFormat,

    /// Path to the configuration file
    #[arg(long, default_value = "config/config.yaml")]
    config: PathBuf,

    /// Override the similar-match threshold (0.0-1.0)
    #[arg(long)]
    threshold: Option<f32>,

    /// Skip LLM-generated recommendations (faster)
    #[arg(long)]
    no_recommendations: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
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

    info!("Starting reqdelta v{}", env!("CARGO_PKG_VERSION"));

    if !args.new.exists() {
        anyhow::bail!("new requirements file not found: {}", args.new.display());
    }
    if let Some(existing) = &args.existing {
        if !existing.exists() {
            anyhow::bail!("existing implementation file not found: {}", existing.display());
        }
    }
    if let Some(dir) = &args.existing_dir {
        if !dir.is_dir() {
            anyhow::bail!("existing directory not found: {}", dir.display());
        }
    }

    let mut config = EngineConfig::load(&args.config)?;
    if let Some(threshold) = args.threshold {
        config.compare.similar_threshold = threshold;
        info!(threshold, "using custom similarity threshold");
    }
    if args.no_recommendations {
        config.report.include_recommendations = false;
    }

    let output_dir = config.report.output_dir.clone();
    let engine = ComparisonEngine::from_config(config)?;

    if let Some(existing) = &args.existing {
        let result = engine.compare_documents(&args.new, existing).await?;

        let generator = ReportGenerator::new(&output_dir);
        let generated = generator.generate(&result, args.format, args.output.as_deref())?;

        print_summary(&result);
        println!("\nReports generated:");
        if let Some(path) = &generated.markdown {
            println!("  - MARKDOWN: {}", path.display());
        }
        if let Some(path) = &generated.html {
            println!("  - HTML: {}", path.display());
        }
        println!("\n{}", "=".repeat(80));
    } else if let Some(dir) = &args.existing_dir {
        let results = engine.compare_multiple(&args.new, dir).await?;
        if results.is_empty() {
            anyhow::bail!("no comparison results generated from {}", dir.display());
        }

        let batch_dir = Path::new(&output_dir).join("batch");
        let generator = ReportGenerator::new(&batch_dir);

        println!("\n{}", "=".repeat(80));
        println!("BATCH COMPARISON COMPLETE");
        println!("{}", "=".repeat(80));

        for (i, result) in results.iter().enumerate() {
            println!("\n{}. {}", i + 1, result.existing_document);
            println!("   Reusability Score: {:.1}%", result.reusability_score());
            println!(
                "   Exact: {}, Similar: {}, Delta: {}",
                result.exact_matches.len(),
                result.similar_features.len(),
                result.delta_features.len()
            );

            let stem = Path::new(&result.existing_document)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("document_{}", i + 1));
            let path = batch_dir.join(format!("comparison_{stem}.html"));
            generator.generate(result, ReportFormat::Html, Some(&path))?;
            println!("   Report: {}", path.display());
        }

        if let Some(best) = best_match(&results) {
            println!("\nBest Match: {}", best.existing_document);
            println!("   Reusability Score: {:.1}%", best.reusability_score());
        }
        println!("\n{}", "=".repeat(80));
    }

    Ok(())
}

fn print_summary(result: &ComparisonResult) {
    let stats = &result.statistics;
    println!("\n{}", "=".repeat(80));
    println!("COMPARISON COMPLETE");
    println!("{}", "=".repeat(80));
    println!("\nResults:");
    println!(
        "  Exact Matches: {} ({:.1}%)",
        stats.exact_count, stats.exact_percentage
    );
    println!(
        "  Similar Features: {} ({:.1}%)",
        stats.similar_count, stats.similar_percentage
    );
    println!(
        "  Delta (New): {} ({:.1}%)",
        stats.delta_count, stats.delta_percentage
    );
    println!("  Reusability Score: {:.1}%", stats.reusability_score);
}
