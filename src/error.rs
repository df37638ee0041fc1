use reqwest::StatusCode;

/// 標註流程的錯誤
///
/// 所有變體都是同一種失敗（傳輸 / IO），原樣往上拋，不做重試。
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("HTTP 錯誤: {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Vision API 回傳錯誤 (code {code}): {message}")]
    Api { code: i32, message: String },
    #[error("無法解析回應: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("回應格式錯誤: {0}")]
    MalformedResponse(&'static str),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("像素資料長度不符: {width}x{height} 需要 {expected} bytes，實際 {actual} bytes")]
    InvalidPixelBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("圖片尺寸為 0: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("設定錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VisionError>;
