//! Destination profile: the organization-specific literals written into
//! every output record.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Literal values of the destination schema that belong to the submitting
/// organization rather than to any one patient.
///
/// Every field has a built-in default; a TOML file may override any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub format_version: String,
    pub submission_target: String,
    pub data_creator: String,
    /// Completion flag; `1` means the submission is complete.
    pub completion_flag: String,
    pub group_code: String,
    pub facility_name: String,
    pub facility_number: String,
    pub physician: String,
    /// Organization whose records skip the office, insurance and
    /// personal-ID checks.
    pub exempt_organization: String,
    /// Output file name prefix; the run date (`YYYYMMDD`) and `.csv` follow.
    pub output_prefix: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            format_version: "RB_Ver.1.0".to_string(),
            submission_target: "BIO(RICOH)".to_string(),
            data_creator: "医療法人社団　松英会".to_string(),
            completion_flag: "1".to_string(),
            group_code: "RICOH".to_string(),
            facility_name: "医療法人社団　松英会　馬込中央診療所".to_string(),
            facility_number: "1311131242".to_string(),
            physician: "寺門　節雄".to_string(),
            exempt_organization: "04019001".to_string(),
            output_prefix: "リコー三愛グループ健康保険組合健診データ".to_string(),
        }
    }
}

impl Profile {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a profile file, falling back to defaults for absent keys.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_exempt(&self, organization_code: &str) -> bool {
        !self.exempt_organization.is_empty() && organization_code == self.exempt_organization
    }

    /// Output file name for a run on `date_stamp` (`YYYYMMDD`).
    pub fn output_file_name(&self, date_stamp: &str) -> String {
        format!("{}{date_stamp}.csv", self.output_prefix)
    }
}
