use clap::Parser;
use listing_insight::filter::UrlFilter;
use listing_insight::{Analysis, AnalysisError, AnalysisReport, AnalyzerConfig};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if !UrlFilter::default().is_valid(&args.url) {
        eprintln!("Please enter a valid eBay search URL");
        return ExitCode::from(2);
    }

    let config = match &args.config {
        Some(path) => match AnalyzerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                eprintln!("An error occurred: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AnalyzerConfig::default(),
    };

    let mut analysis = Analysis::new(&args.url).with_config(config);
    if let Some(value) = args.max_title_length {
        analysis = analysis.with_max_title_length(value);
    }
    if let Some(value) = args.items_per_page {
        analysis = analysis.with_items_per_page(value);
    }
    if let Some(value) = args.max_retries {
        analysis = analysis.with_max_retries(value);
    }

    ::log::info!("Starting analysis for URL: {}", args.url);
    let start_time = std::time::Instant::now();

    let report = match analysis.run().await {
        Ok(report) => report,
        Err(AnalysisError::NoResults) => {
            println!("No results found. Please try a different search.");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            eprintln!("An error occurred: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Analysis complete - {} items in {:.2} seconds",
        report.item_count(),
        start_time.elapsed().as_secs_f64()
    );

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("An error occurred: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report, &args);
    }
    ExitCode::SUCCESS
}

fn print_report(report: &AnalysisReport, args: &Args) {
    println!("Found {} items!", report.item_count());

    if args.show_titles {
        println!();
        println!("Raw titles:");
        for (i, title) in report.titles.iter().enumerate() {
            println!("{}. {}", i + 1, title);
        }
    }

    println!();
    println!("Suggested title:");
    println!("  {}", report.suggested_title.value());

    let stats = report.price_stats.value();
    println!();
    println!("Price analysis:");
    println!("  Average Price  ${:.2}", stats.average);
    println!("  Median Price   ${:.2}", stats.median);
    println!("  Minimum Price  ${:.2}", stats.min);
    println!("  Maximum Price  ${:.2}", stats.max);

    println!();
    println!("Top {} keywords:", args.top);
    println!("  {:<24} {:>9}", "Keyword", "Frequency");
    for (keyword, count) in report.keywords.value().iter().take(args.top) {
        println!("  {:<24} {:>9}", keyword, count);
    }
}
