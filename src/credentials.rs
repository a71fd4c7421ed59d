//! Remote-store credentials
//!
//! An opaque session handle for the real remote store. The client
//! core never inspects it, only forwards it with every valve fetch;
//! the substitute backend ignores it entirely.

/// Access credentials for the remote attribute store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
    region: String,
}

impl Credentials {
    /// Build credentials from an access key, secret, and region.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            region: region.into(),
        }
    }

    /// Throwaway credentials for in-process use against the
    /// substitute backend.
    pub fn test() -> Self {
        Self::new("test-key", "test-secret", "local")
    }

    /// Access key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Secret key.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Region the session is bound to.
    pub fn region(&self) -> &str {
        &self.region
    }
}

// The secret never reaches logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.key, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("AKID", "hunter2", "us-east-1");
        let shown = format!("{:?}", creds);
        assert!(shown.contains("AKID"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_display_is_key_at_region() {
        let creds = Credentials::new("AKID", "s", "eu-west-1");
        assert_eq!(creds.to_string(), "AKID@eu-west-1");
    }
}
