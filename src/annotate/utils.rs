use super::types::BatchAnnotateImagesResponse;
use crate::error::{Result, VisionError};
use crate::types::LabelScores;

/// 把 batch 回應的第一個元素攤平成 label -> score
///
/// 沒有 label 時回傳空的 map；重複的描述以後出現者為準。
pub fn into_label_scores(response: BatchAnnotateImagesResponse) -> Result<LabelScores> {
    let first = response
        .responses
        .into_iter()
        .next()
        .ok_or(VisionError::MalformedResponse("responses 為空"))?;

    if let Some(status) = first.error {
        return Err(VisionError::Api {
            code: status.code,
            message: status.message,
        });
    }

    Ok(first
        .label_annotations
        .unwrap_or_default()
        .into_iter()
        .map(|label| (label.description, label.score))
        .collect())
}

/// 解析回應 body
pub fn parse_response(body: &[u8]) -> Result<LabelScores> {
    let response: BatchAnnotateImagesResponse = serde_json::from_slice(body)?;
    into_label_scores(response)
}
