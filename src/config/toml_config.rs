use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SnapError};
use crate::utils::validation;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub snapshot: SnapshotSection,
    pub rounding: Option<RoundingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSection {
    pub dir: String,
    pub update: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundingSection {
    pub digits: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SnapError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SnapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SNAPSHOT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("snapshot.dir", &self.snapshot.dir)?;

        if let Some(rounding) = &self.rounding {
            if let Some(digits) = rounding.digits {
                validation::validate_positive_number("rounding.digits", digits, 1)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn snapshot_dir(&self) -> &str {
        &self.snapshot.dir
    }

    fn digits(&self) -> Option<usize> {
        self.rounding.as_ref().and_then(|r| r.digits)
    }

    fn update_snapshots(&self) -> bool {
        self.snapshot.update.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [snapshot]
            dir = "tests/__snapshots__"
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot.dir, "tests/__snapshots__");
        assert_eq!(config.digits(), None);
        assert!(!config.update_snapshots());
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [snapshot]
            dir = "__snapshots__"
            update = true

            [rounding]
            digits = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.digits(), Some(4));
        assert!(config.update_snapshots());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_SNAP_TEST_DIR", "from_env");
        let config = TomlConfig::from_toml_str(
            r#"
            [snapshot]
            dir = "${SMALL_SNAP_TEST_DIR}"
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot.dir, "from_env");
    }

    #[test]
    fn test_unknown_env_var_is_kept_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
            [snapshot]
            dir = "${SMALL_SNAP_UNSET_VAR}"
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot.dir, "${SMALL_SNAP_UNSET_VAR}");
    }

    #[test]
    fn test_zero_digits_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
            [snapshot]
            dir = "__snapshots__"

            [rounding]
            digits = 0
            "#,
        )
        .unwrap();

        assert!(config.validate_config().is_err());
    }
}
