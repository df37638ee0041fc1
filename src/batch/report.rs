use crate::types::LabelRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 讀取所有標註結果
pub fn load_records(results_file: impl AsRef<Path>) -> Result<Vec<LabelRecord>> {
    let path = results_file.as_ref();
    if !path.exists() {
        return Ok(vec![]);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("無法讀取 {}", path.display()))?;

    let records = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    Ok(records)
}

/// 結果統計
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStats {
    pub total_images: usize,
    pub labelled_images: usize,
    pub average_labels: f64,
    /// (label, 出現次數)，次數由多到少
    pub top_labels: Vec<(String, usize)>,
}

impl LabelStats {
    pub fn from_records(records: &[LabelRecord], top_n: usize) -> Self {
        let total_images = records.len();
        let labelled_images = records.iter().filter(|r| !r.labels.is_empty()).count();

        let total_labels: usize = records.iter().map(|r| r.labels.len()).sum();
        let average_labels = if total_images > 0 {
            total_labels as f64 / total_images as f64
        } else {
            0.0
        };

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for label in records.iter().flat_map(|r| &r.labels) {
            *counts.entry(label.description.as_str()).or_insert(0) += 1;
        }

        let mut top_labels: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        top_labels.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_labels.truncate(top_n);

        Self {
            total_images,
            labelled_images,
            average_labels,
            top_labels,
        }
    }
}

/// 顯示統計報告
pub fn print_statistics(results_file: impl AsRef<Path>) -> Result<()> {
    let records = load_records(results_file)?;

    if records.is_empty() {
        println!("⚠️  尚無標註結果");
        return Ok(());
    }

    let stats = LabelStats::from_records(&records, 10);

    println!("\n╔══════════════════════════════════╗");
    println!("║   📊 標註統計報告               ║");
    println!("╠══════════════════════════════════╣");
    println!("║ 圖片總數:   {:>18} ║", stats.total_images);
    println!("║ 有 label:   {:>18} ║", stats.labelled_images);
    println!("║ 平均 label: {:>18.1} ║", stats.average_labels);
    println!("╚══════════════════════════════════╝\n");

    println!("🏷️  最常見的 label:");
    for (label, count) in &stats.top_labels {
        println!("  - {}: {} 次", label, count);
    }
    println!();

    println!("📋 範例結果 (前 5 個):\n");
    for (i, record) in records.iter().take(5).enumerate() {
        println!("{}. {} [{}]", i + 1, record.filename, record.service);
        for label in record.labels.iter().take(5) {
            println!("   {:<24} {:.3}", label.description, label.score);
        }
        println!();
    }

    Ok(())
}
