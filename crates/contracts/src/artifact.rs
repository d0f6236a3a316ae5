//! Build artifact loading.
//!
//! The Vault and Strategy are compiled outside this workspace. Their deploy
//! bytecode is read from the JSON artifact the build tool leaves behind. Both
//! layouts in common use are accepted:
//!
//! - Brownie/Hardhat: `{ "contractName": "Vault", "bytecode": "0x6080..." }`
//! - Foundry: `{ "bytecode": { "object": "0x6080..." } }`

use std::path::Path;

use alloy::primitives::{hex, Bytes};
use serde::Deserialize;

use crate::error::{ContractError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Hex(String),
    Object { object: String },
}

#[derive(Deserialize)]
struct RawArtifact {
    #[serde(rename = "contractName")]
    contract_name: Option<String>,
    bytecode: BytecodeField,
}

/// Deployable contract taken from a build artifact.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Contract name, when the artifact records one.
    pub name: Option<String>,
    /// Creation bytecode, without constructor arguments.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Read and parse an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| ContractError::Artifact {
            path: label.clone(),
            reason: e.to_string(),
        })?;

        let artifact = Self::from_json(&label, &json)?;
        tracing::debug!(
            path = %label,
            name = artifact.name.as_deref().unwrap_or("-"),
            size = artifact.bytecode.len(),
            "loaded artifact"
        );
        Ok(artifact)
    }

    /// Parse artifact JSON. `label` only shows up in error messages.
    pub fn from_json(label: &str, json: &str) -> Result<Self> {
        let invalid = |reason: String| ContractError::Artifact {
            path: label.to_string(),
            reason,
        };

        let raw: RawArtifact = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;

        let encoded = match &raw.bytecode {
            BytecodeField::Hex(s) => s.as_str(),
            BytecodeField::Object { object } => object.as_str(),
        };
        let encoded = encoded.strip_prefix("0x").unwrap_or(encoded);

        if encoded.is_empty() {
            return Err(invalid("empty bytecode (abstract contract or interface?)".to_string()));
        }

        // Unlinked library placeholders like `__$abcd$__` fail here
        let bytecode = hex::decode(encoded).map_err(|e| invalid(format!("bytecode is not hex: {}", e)))?;

        Ok(Self {
            name: raw.contract_name,
            bytecode: bytecode.into(),
        })
    }
}
