use crate::error::Result;
use crate::types::{EncodedImage, LabelScores};

/// 圖片標註服務 Trait
#[async_trait::async_trait]
pub trait ImageAnnotator: Send + Sync {
    /// 服務名稱
    fn name(&self) -> &str;

    /// 標註單張圖片
    async fn annotate(&self, image: &EncodedImage) -> Result<LabelScores>;
}
