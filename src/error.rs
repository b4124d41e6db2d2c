use thiserror::Error;

/// 外部API调用的错误分类
///
/// 每个外部调用在本地完成归类，错误以面向用户的消息呈现，不会越过
/// 调用方继续向上传播为panic。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 非2xx状态码
    #[error("HTTP error: the service responded with status {status}")]
    Http { status: u16 },

    /// 无法建立连接
    #[error("connection error: failed to reach the service ({0})")]
    Connection(String),

    /// 超过单次调用的超时限制
    #[error("timeout: the service did not respond in time")]
    Timeout,

    /// 其他请求错误
    #[error("request error: {0}")]
    Request(String),

    /// 响应缺少预期字段或无法解析
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// 将reqwest传输错误归类到统一的错误分类
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
            }
        } else {
            ApiError::Request(err.to_string())
        }
    }
}
