use crate::types::EncodedImage;
use serde::{Deserialize, Serialize};

/// 每張圖最多回傳的 label 數
pub const MAX_LABEL_RESULTS: u32 = 10;

/// images:annotate 的 batch 請求
#[derive(Debug, Clone, Serialize)]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

/// 單張圖片的請求
#[derive(Debug, Clone, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageContent {
    /// base64 編碼的 JPEG
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub max_results: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    LabelDetection,
}

impl Feature {
    pub fn label_detection() -> Self {
        Self {
            kind: FeatureType::LabelDetection,
            max_results: MAX_LABEL_RESULTS,
        }
    }
}

impl BatchAnnotateImagesRequest {
    /// 只含一張圖、一種 feature 的 batch
    pub fn label_detection(image: &EncodedImage) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: image.to_base64(),
                },
                features: vec![Feature::label_detection()],
            }],
        }
    }
}

/// images:annotate 的 batch 回應
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

/// 單張圖片的回應，其他標註類型一律忽略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub label_annotations: Option<Vec<EntityAnnotation>>,
    #[serde(default)]
    pub error: Option<ApiStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityAnnotation {
    #[serde(default)]
    pub mid: Option<String>,
    pub description: String,
    /// 分數為 0 時服務端會省略欄位
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub topicality: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}
