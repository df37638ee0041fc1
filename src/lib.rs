//! 把圖片壓縮成 JPEG、送到 Cloud Vision 做 label detection，
//! 再把回應攤平成 label -> 信心分數。

pub mod annotate;
pub mod batch;
pub mod config;
pub mod encoder;
pub mod error;
pub mod types;

pub use annotate::{CloudVisionClient, ImageAnnotator};
pub use config::VisionConfig;
pub use encoder::{encode, encode_file, encode_rgba, JPEG_QUALITY};
pub use error::{Result, VisionError};
pub use types::{EncodedImage, Label, LabelRecord, LabelScores};
