use serde::{Deserialize, Serialize};

/// Response body shared by every successful listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub count: usize,
    pub total: usize,
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>, total: usize) -> Self {
        Self {
            success: true,
            count: data.len(),
            total,
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub quotes: usize,
}
