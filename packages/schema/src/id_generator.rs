use chrono::Utc;
use crc32fast::Hasher;

/// Stable short seed for a page id using CRC32
pub fn get_page_seed(page_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(page_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for sections added during one editing session.
///
/// The seed mixes the page id with the session start time, so ids handed
/// out in different sessions on the same page never collide.
#[derive(Debug, Clone)]
pub struct SectionIdGenerator {
    seed: String,
    count: u32,
}

impl SectionIdGenerator {
    pub fn for_page(page_id: &str) -> Self {
        let started = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::from_seed(get_page_seed(&format!("{}:{}", page_id, started)))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
