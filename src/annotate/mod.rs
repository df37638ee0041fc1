// 宣告子模組
pub mod types;
pub mod trait_def;
pub mod utils;
pub mod google_vision;

// 重新導出常用項目
pub use types::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse, Feature, FeatureType, MAX_LABEL_RESULTS};
pub use trait_def::ImageAnnotator;
pub use google_vision::CloudVisionClient;
pub use utils::{into_label_scores, parse_response};
