use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use poolscan::{
    parse_metric_list, scan_files, write_table, Metric, OutputFormat, PoolFilter, Projection,
    ScanConfig, ScanStats,
};

#[derive(Parser)]
#[command(name = "poolscan")]
#[command(about = "Extract thread pool statistics tables from server logs into CSV")]
#[command(version)]
#[command(after_help = "Examples:
    poolscan system.log
    poolscan --pools \"CompactionExecutor,GossipStage\" system.log
    poolscan --pools TPC system1.log system2.log
    poolscan --metrics \"Active,Completed,Blocked\" system.log
    poolscan --pools CompactionExecutor --metrics \"Active,Completed\" system.log")]
struct Args {
    /// Log files to parse
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Comma-separated pool names to pivot on (case-insensitive)
    #[arg(long, value_name = "POOLS")]
    pools: Option<String>,

    /// Comma-separated metrics to include (Active, Pending, Backpressure,
    /// Delayed, Shared, Stolen, Completed, Blocked, All_Time_Blocked)
    #[arg(long, value_name = "METRICS")]
    metrics: Option<String>,

    /// Output file, '-' for stdout (default: pool_metrics_<timestamp>.csv)
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Debug mode - show scan statistics
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Metric names are checked before any file is touched
    let metrics = match &args.metrics {
        Some(spec) => parse_metric_list(spec)?,
        None => Metric::all(),
    };
    let filter = args
        .pools
        .as_deref()
        .map(PoolFilter::parse)
        .unwrap_or_default();
    let projection = Projection::resolve(filter, metrics);

    let config = ScanConfig {
        debug: args.debug,
        ..ScanConfig::default()
    };

    let result = scan_files(&args.files, &config);

    for diagnostic in &result.diagnostics {
        eprintln!("poolscan: warning: {}", diagnostic);
    }

    if args.debug {
        print_stats(&result.stats);
    }

    let table = projection.project(&result.sections)?;

    let mut output: Box<dyn Write> = match &args.output_file {
        Some(path) if path.as_os_str() == "-" => Box::new(BufWriter::new(io::stdout())),
        Some(path) => Box::new(BufWriter::new(create_output(path)?)),
        None => {
            let now = chrono::Local::now().naive_local();
            let path = PathBuf::from(args.format.default_file_name(now));
            eprintln!("Output will be saved to: {}", path.display());
            Box::new(BufWriter::new(create_output(&path)?))
        }
    };

    write_table(&table, args.format, &mut output)?;
    output.flush()?;

    if args.debug {
        let columns: Vec<String> = projection.metrics().iter().map(|m| m.to_string()).collect();
        eprintln!("  Metrics: {}", columns.join(", "));
        eprintln!("  Rows written: {}", table.rows.len());
    }

    Ok(())
}

fn create_output(path: &Path) -> anyhow::Result<File> {
    File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))
}

fn print_stats(stats: &ScanStats) {
    eprintln!("Final statistics:");
    eprintln!("  Files scanned: {}", stats.files_scanned);
    eprintln!("  Files failed: {}", stats.files_failed);
    eprintln!("  Lines seen: {}", stats.lines_seen);
    eprintln!("  Headers found: {}", stats.headers_seen);
    eprintln!("  Headers without timestamp: {}", stats.headers_without_timestamp);
    eprintln!("  Headers without data: {}", stats.headers_without_data);
    eprintln!("  Sections found: {}", stats.sections_found);
    eprintln!("  Records found: {}", stats.records_found);
    eprintln!("  Processing time: {:?}", stats.processing_time);
}
