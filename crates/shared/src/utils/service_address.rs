use std::fmt;

/// Address of the instance that served a response, reported to clients as
/// `serviceAddress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddress(String);

impl ServiceAddress {
    pub fn new(host: &str, port: u16) -> Self {
        Self(format!("{host}:{port}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
