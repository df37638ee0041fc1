use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::sync::Arc;
use vision_labeler::batch::{self, BatchRunner};
use vision_labeler::types::sorted_labels;
use vision_labeler::{encode_file, CloudVisionClient, VisionConfig};

const DEFAULT_RESULTS_FILE: &str = "./data/labels.jsonl";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("annotate") => match args.get(2) {
            Some(path) => run_annotate(path).await?,
            None => {
                println!("❌ 請指定圖片路徑");
                print_help();
            }
        },
        Some("batch") => match args.get(2) {
            Some(dir) => {
                let results = args.get(3).map(|s| s.as_str()).unwrap_or(DEFAULT_RESULTS_FILE);
                run_batch(dir, results).await?
            }
            None => {
                println!("❌ 請指定圖片資料夾");
                print_help();
            }
        },
        Some("stats") => {
            let results = args.get(2).map(|s| s.as_str()).unwrap_or(DEFAULT_RESULTS_FILE);
            batch::print_statistics(results)?
        }
        Some("--help") | Some("-h") | None => print_help(),
        Some(other) => {
            println!("未知命令: {}", other);
            print_help();
        }
    }

    Ok(())
}

fn build_client() -> Result<CloudVisionClient> {
    let config = VisionConfig::from_env().context("無法讀取 Vision 設定")?;
    CloudVisionClient::new(config).context("無法建立 HTTP 客戶端")
}

async fn run_annotate(path: &str) -> Result<()> {
    let client = build_client()?;

    let image = encode_file(path).with_context(|| format!("無法壓縮圖片 {}", path))?;
    println!("📦 JPEG 大小: {} bytes", image.len());

    let scores = client.annotate_image(&image).await?;

    if scores.is_empty() {
        println!("⚠️  沒有偵測到任何 label");
        return Ok(());
    }

    println!("🏷️  {} 個 label:", scores.len());
    for label in sorted_labels(&scores) {
        println!("  {:<24} {:.3}", label.description, label.score);
    }

    Ok(())
}

async fn run_batch(dir: &str, results_file: &str) -> Result<()> {
    println!("=== 批次標註 ===\n");

    let client = build_client()?;
    println!("⚙️  設定：");
    println!("  - 端點: {}", client.config().endpoint);
    println!("  - 結果檔: {}\n", results_file);

    let runner = BatchRunner::new(Arc::new(client), results_file);
    let summary = runner.run(Path::new(dir)).await?;

    println!("\n✨ 完成：成功 {} 張，失敗 {} 張 (共 {} 張)",
        summary.succeeded,
        summary.failed,
        summary.total
    );
    println!("\n💡 查看結果：");
    println!("  - cargo run stats {}", results_file);

    Ok(())
}

fn print_help() {
    println!("Vision Labeler - Cloud Vision 標註工具\n");
    println!("用法:");
    println!("  cargo run annotate <image>               # 標註單張圖片");
    println!("  cargo run batch <dir> [results.jsonl]    # 批次標註資料夾");
    println!("  cargo run stats [results.jsonl]          # 顯示標註統計");
    println!("  cargo run --help                         # 顯示此幫助\n");
    println!("環境變數 (可寫在 .env):");
    println!("  GOOGLE_VISION_API_KEY       # 必填");
    println!("  GOOGLE_VISION_ENDPOINT      # 選填，預設為正式端點");
    println!("  GOOGLE_VISION_TIMEOUT_SECS  # 選填，請求超時秒數\n");
    println!("資料檔案:");
    println!("  ./data/labels.jsonl         # 批次標註結果");
}
