use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const MIN_KEY_LEN: usize = 8;
/// Key under which the activated license is persisted.
pub const STORAGE_KEY: &str = "snapframe_license";

#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    #[error("license key must be at least {min} characters (got {len})")]
    KeyTooShort { len: usize, min: usize },

    #[error("license key was rejected{}", rejection_suffix(.0))]
    Rejected(Option<String>),

    #[error("could not reach license service: {0}")]
    Transport(String),

    #[error("license storage error: {0}")]
    Storage(String),

    #[error("malformed license response: {0}")]
    Malformed(String),
}

impl LicenseError {
    /// Message shown to the user; every failure blocks activation.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::KeyTooShort { .. } | Self::Rejected(_) => {
                "Invalid license key. Please check and try again."
            }
            Self::Transport(_) | Self::Malformed(_) | Self::Storage(_) => {
                "Could not verify license. Please check your connection and try again."
            }
        }
    }
}

fn rejection_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|e| format!(": {e}")).unwrap_or_default()
}

/// A trimmed key that passed the client-side length check. Nothing more is known about it until
/// the verification service answers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseKey(String);

impl LicenseKey {
    pub fn parse(raw: &str) -> Result<Self, LicenseError> {
        Self::parse_with_min(raw, MIN_KEY_LEN)
    }

    pub fn parse_with_min(raw: &str, min: usize) -> Result<Self, LicenseError> {
        let key = raw.trim();
        let len = key.chars().count();
        if len < min {
            return Err(LicenseError::KeyTooShort { len, min });
        }
        Ok(Self(key.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub license_key: String,
}

impl VerifyRequest {
    pub fn new(key: &LicenseKey) -> Self {
        Self {
            license_key: key.as_str().to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub email: Option<String>,
    pub created_at: Option<String>,
}

/// Body returned by the verification endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<u64>,
    #[serde(default)]
    pub purchase: Option<Purchase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyResponse {
    /// Reduces the upstream store's answer to the fields the editor relies on. Only a literal
    /// `true` counts as success.
    pub fn from_upstream(body: &serde_json::Value) -> Self {
        let purchase = body.get("purchase").filter(|p| p.is_object()).map(|p| Purchase {
            email: p.get("email").and_then(|v| v.as_str()).map(str::to_owned),
            created_at: p.get("created_at").and_then(|v| v.as_str()).map(str::to_owned),
        });
        Self {
            success: body.get("success").and_then(|v| v.as_bool()) == Some(true),
            uses: body.get("uses").and_then(|v| v.as_u64()),
            purchase,
            error: None,
        }
    }

    pub fn from_json(body: &str) -> Result<Self, LicenseError> {
        serde_json::from_str(body).map_err(|e| LicenseError::Malformed(e.to_string()))
    }
}

/// Network round-trip to the verification endpoint.
pub trait LicenseGateway {
    fn verify(&mut self, request: &VerifyRequest) -> Result<VerifyResponse, LicenseError>;
}

/// Local persistence for an activated key.
pub trait LicenseStore {
    fn load(&self) -> Result<Option<LicenseKey>, LicenseError>;
    fn save(&mut self, key: &LicenseKey) -> Result<(), LicenseError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryLicenseStore {
    key: Option<LicenseKey>,
}

impl MemoryLicenseStore {
    pub fn with_key(key: LicenseKey) -> Self {
        Self { key: Some(key) }
    }
}

impl LicenseStore for MemoryLicenseStore {
    fn load(&self) -> Result<Option<LicenseKey>, LicenseError> {
        Ok(self.key.clone())
    }

    fn save(&mut self, key: &LicenseKey) -> Result<(), LicenseError> {
        self.key = Some(key.clone());
        Ok(())
    }
}

/// JSON object `{ "snapframe_license": "<key>" }` on disk. A missing file means "no key".
#[derive(Clone, Debug)]
pub struct FileLicenseStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct StoredLicense {
    #[serde(rename = "snapframe_license")]
    key: LicenseKey,
}

impl FileLicenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LicenseStore for FileLicenseStore {
    fn load(&self) -> Result<Option<LicenseKey>, LicenseError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LicenseError::Storage(format!("{}: {e}", self.path.display()))),
        };
        let stored: StoredLicense = serde_json::from_str(&text)
            .map_err(|e| LicenseError::Storage(format!("{}: {e}", self.path.display())))?;
        Ok(Some(stored.key))
    }

    fn save(&mut self, key: &LicenseKey) -> Result<(), LicenseError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| LicenseError::Storage(format!("{}: {e}", parent.display())))?;
        }
        let body = serde_json::to_string_pretty(&StoredLicense { key: key.clone() })
            .map_err(|e| LicenseError::Storage(e.to_string()))?;
        std::fs::write(&self.path, body)
            .map_err(|e| LicenseError::Storage(format!("{}: {e}", self.path.display())))
    }
}

/// Validates, verifies and persists a key. Nothing is stored unless every step succeeds.
pub fn verify_and_store(
    raw: &str,
    min_len: usize,
    gateway: &mut dyn LicenseGateway,
    store: &mut dyn LicenseStore,
) -> Result<(LicenseKey, VerifyResponse), LicenseError> {
    let key = LicenseKey::parse_with_min(raw, min_len)?;
    let response = gateway.verify(&VerifyRequest::new(&key))?;
    if !response.success {
        return Err(LicenseError::Rejected(response.error.clone()));
    }
    store.save(&key)?;
    Ok((key, response))
}

#[cfg(test)]
#[path = "../tests/unit/license.rs"]
mod tests;
