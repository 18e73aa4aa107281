use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use metals_analytics::assistant::DataContext;
use metals_analytics::config::{ApplicationConfig, LogConfig};
use metals_analytics::data_ingestion::{DataLoader, LoadedDataset};
use metals_analytics::domain_types::{ChartData, Metal};
use metals_analytics::trend_detection::TrendDetector;
use metals_analytics::utils::{format_currency, format_month_year};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "metals_analytics", about = "貴金屬長期價格序列與趨勢區間工具")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 輸出圖表資料（序列與趨勢區間）JSON
    Chart {
        /// gold 或 silver
        #[arg(short, long, default_value = "gold")]
        metal: String,
    },

    /// 顯示各金屬的資料摘要
    Summary,

    /// 輸出問答端使用的系統指示
    Prompt {
        /// 目前檢視的金屬
        #[arg(short, long, default_value = "gold")]
        metal: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = ApplicationConfig::load_from_env().context("無法加載應用程序配置")?;
    init_logging(&app_config.log)?;

    let loader = DataLoader::new(app_config.parser.options());
    let datasets = loader
        .load_all(app_config.datasets.entries())
        .context("無法載入價格資料")?;

    match cli.command {
        Commands::Chart { metal } => {
            let dataset = find_dataset(&datasets, parse_metal(&metal)?)?;
            let trends = TrendDetector::detect(&dataset.series);
            let chart = ChartData::new(dataset.metal, dataset.series.clone(), trends);
            println!("{}", chart.to_json()?);
        }
        Commands::Summary => {
            for dataset in &datasets {
                print_summary(dataset);
            }
        }
        Commands::Prompt { metal } => {
            let context = DataContext::from_datasets(&datasets);
            println!("{}", context.system_instruction(parse_metal(&metal)?));
        }
    }

    Ok(())
}

fn parse_metal(name: &str) -> Result<Metal> {
    name.parse::<Metal>()
        .map_err(|e| anyhow!("{}。請使用 'gold' 或 'silver'", e))
}

fn find_dataset(datasets: &[LoadedDataset], metal: Metal) -> Result<&LoadedDataset> {
    datasets
        .iter()
        .find(|ds| ds.metal == metal)
        .ok_or_else(|| anyhow!("找不到 {} 資料", metal))
}

fn print_summary(dataset: &LoadedDataset) {
    let stats = dataset.stats();
    let trends = TrendDetector::detect(&dataset.series);

    println!("{}: {} 筆", dataset.metal, stats.total_records);
    if let (Some(start), Some(end)) = (stats.start_date, stats.end_date) {
        let label = |d| format_month_year(d).unwrap_or_else(|| d.to_string());
        println!("  範圍: {} ~ {}", label(start), label(end));
    }
    if let (Some(max), Some(date)) = (stats.max_value, stats.max_date) {
        println!("  最高: {} ({})", format_currency(max), date);
    }
    if let (Some(min), Some(date)) = (stats.min_value, stats.min_date) {
        println!("  最低: {} ({})", format_currency(min), date);
    }
    println!("  略過列數: {}", dataset.report.dropped());
    println!("  趨勢區間: {}", trends.len());
    for window in &trends {
        println!("    {} {} ~ {}", window.kind, window.start, window.end);
    }
}

// 初始化日誌系統
fn init_logging(log_config: &LogConfig) -> Result<()> {
    let level = match log_config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(level)
        .with_writer(std::io::stderr);

    let result = if log_config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(())
}
