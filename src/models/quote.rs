use serde::{Deserialize, Serialize};

/// A single entry of the quotes file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}
