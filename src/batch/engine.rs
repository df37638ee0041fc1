use crate::annotate::ImageAnnotator;
use crate::encoder::encode_file;
use crate::types::LabelRecord;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 會被批次處理的副檔名
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// 批次處理統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// 逐張標註資料夾內的圖片，結果寫入 JSONL
pub struct BatchRunner {
    annotator: Arc<dyn ImageAnnotator>,
    results_file: PathBuf,
}

impl BatchRunner {
    pub fn new(annotator: Arc<dyn ImageAnnotator>, results_file: impl Into<PathBuf>) -> Self {
        Self {
            annotator,
            results_file: results_file.into(),
        }
    }

    /// 列出資料夾內的圖片（依檔名排序）
    pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("無法讀取資料夾 {}", dir.display()))?;

        let mut images = Vec::new();
        for entry in entries {
            let path = entry.context("讀取資料夾項目失敗")?.path();
            if path.is_file() && is_image(&path) {
                images.push(path);
            }
        }

        images.sort();
        Ok(images)
    }

    /// Append 一筆結果到 JSONL 檔案
    pub fn append_record(&self, record: &LabelRecord) -> Result<()> {
        if let Some(parent) = self.results_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("無法建立結果目錄")?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.results_file)
            .with_context(|| format!("無法開啟 {}", self.results_file.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, record).context("無法寫入結果")?;
        writeln!(writer).context("無法寫入換行符號")?;
        writer.flush().context("無法 flush buffer")?;

        Ok(())
    }

    /// 標註單一檔案
    async fn annotate_file(&self, path: &Path) -> Result<LabelRecord> {
        let image = encode_file(path)
            .with_context(|| format!("無法壓縮圖片 {}", path.display()))?;

        let scores = self
            .annotator
            .annotate(&image)
            .await
            .with_context(|| format!("{} 標註失敗", self.annotator.name()))?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(LabelRecord::new(filename, self.annotator.name(), &scores))
    }

    /// 依序處理整個資料夾
    pub async fn run(&self, dir: &Path) -> Result<BatchSummary> {
        let images = Self::list_images(dir)?;
        let mut summary = BatchSummary {
            total: images.len(),
            ..Default::default()
        };

        if images.is_empty() {
            println!("⚠️  {} 內沒有圖片", dir.display());
            return Ok(summary);
        }

        let pb = ProgressBar::new(images.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} 張 ({percent}%) {eta}")?
                .progress_chars("=>-"),
        );
        pb.set_message(format!("🔎 使用 {} 標註", self.annotator.name()));

        for path in &images {
            match self.annotate_file(path).await {
                Ok(record) => {
                    if let Err(e) = self.append_record(&record) {
                        pb.abandon_with_message(format!(
                            "❌ 寫入中斷：已寫入 {} 張，失敗 {} 張",
                            summary.succeeded, summary.failed
                        ));
                        return Err(e);
                    }
                    summary.succeeded += 1;
                }
                Err(e) => {
                    warn!("{}: {:#}", path.display(), e);
                    pb.println(format!("❌ {}: {:#}", path.display(), e));
                    summary.failed += 1;
                }
            }
            pb.inc(1);
        }

        pb.finish_with_message("✅ 全部完成！");
        Ok(summary)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
