/// Identity of the running service as reported by `/` and `/health`.
#[derive(Debug, Clone)]
pub struct ServiceMetadata {
    pub service_name: String,
    pub deployed_at: Option<String>,
}

impl ServiceMetadata {
    pub fn timestamp(&self) -> &str {
        self.deployed_at.as_deref().unwrap_or("N/A")
    }
}
