use crate::annotate::{
    trait_def::ImageAnnotator,
    types::BatchAnnotateImagesRequest,
    utils::parse_response,
};
use crate::config::VisionConfig;
use crate::error::{Result, VisionError};
use crate::types::{EncodedImage, LabelScores};
use log::debug;
use std::time::Duration;

/// Cloud Vision images:annotate 客戶端
pub struct CloudVisionClient {
    config: VisionConfig,
    client: reqwest::Client,
}

impl CloudVisionClient {
    pub fn new(config: VisionConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// 送出 label detection 請求並攤平成 label -> score
    ///
    /// 請求 body 不做壓縮：大圖壓縮後送出會被服務端拒絕。
    pub async fn annotate_image(&self, image: &EncodedImage) -> Result<LabelScores> {
        let request_body = BatchAnnotateImagesRequest::label_detection(image);

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<無法讀取回應內容: {}>", e));
            return Err(VisionError::Status { status, body });
        }

        let body = response.bytes().await?;
        let annotations = parse_response(&body)?;

        debug!("Cloud Vision 請求完成: {:?}", annotations);
        Ok(annotations)
    }
}

#[async_trait::async_trait]
impl ImageAnnotator for CloudVisionClient {
    fn name(&self) -> &str {
        "google-vision"
    }

    async fn annotate(&self, image: &EncodedImage) -> Result<LabelScores> {
        self.annotate_image(image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_config() {
        let config = VisionConfig::new("abc").with_timeout(5);
        let client = CloudVisionClient::new(config).unwrap();

        assert_eq!(client.name(), "google-vision");
        assert_eq!(client.config().api_key, "abc");
        assert_eq!(client.config().timeout_secs, Some(5));
    }

    #[test]
    fn test_zero_timeout_field_is_ignored() {
        let mut config = VisionConfig::new("abc");
        config.timeout_secs = Some(0);

        assert!(CloudVisionClient::new(config).is_ok());
    }
}
