use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 標註結果：label 描述 -> 信心分數
pub type LabelScores = HashMap<String, f32>;

/// 已壓縮成 JPEG、準備送出的圖片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    jpeg: Vec<u8>,
}

impl EncodedImage {
    pub fn from_jpeg(jpeg: Vec<u8>) -> Self {
        Self { jpeg }
    }

    /// JPEG 原始位元組
    pub fn as_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    /// 傳輸用的 base64 編碼
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.jpeg)
    }

    pub fn len(&self) -> usize {
        self.jpeg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jpeg.is_empty()
    }
}

/// 單一 label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub description: String,
    pub score: f32,
}

/// 依分數由高到低排序（同分時依名稱）
pub fn sorted_labels(scores: &LabelScores) -> Vec<Label> {
    let mut labels: Vec<Label> = scores
        .iter()
        .map(|(description, score)| Label {
            description: description.clone(),
            score: *score,
        })
        .collect();

    labels.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.description.cmp(&b.description))
    });

    labels
}

/// 批次標註結果（JSONL 的一行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRecord {
    pub filename: String,
    pub service: String,
    pub labels: Vec<Label>,
    pub annotated_at: DateTime<Utc>,
}

impl LabelRecord {
    pub fn new(filename: String, service: &str, scores: &LabelScores) -> Self {
        Self {
            filename,
            service: service.to_string(),
            labels: sorted_labels(scores),
            annotated_at: Utc::now(),
        }
    }
}
