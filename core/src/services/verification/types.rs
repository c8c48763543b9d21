//! Types for verification service results

use serde::{Deserialize, Serialize};

/// Result of verifying a code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResult {
    /// Message to return to the caller
    pub message: String,
}
