use crc32fast::Hasher;

/// Generate a document ID from its name using CRC32
pub fn get_document_id(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for elements within a document
///
/// IDs are `{seed}-{counter}` where the seed is the CRC32 of the document
/// name. Deterministic for a given name and call sequence; uniqueness holds
/// within one generator.
#[derive(Debug, Clone)]
pub struct ElementIdGenerator {
    seed: String,
    count: u32,
}

impl ElementIdGenerator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: get_document_id(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential ID
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}
