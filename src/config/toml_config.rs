use crate::config::policy::AbsencePolicy;
use crate::utils::error::{AbsenceKind, MaybeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaybeConfig {
    pub absence: Option<AbsenceConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbsenceConfig {
    pub recognized: Option<Vec<AbsenceKind>>,
    pub name_falls_back_to_attribute: Option<bool>,
    pub negative_indices: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl MaybeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        validation::validate_path("config_path", &display)?;
        let content = std::fs::read_to_string(&path).map_err(MaybeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let config: MaybeConfig =
            toml::from_str(&processed_content).map_err(|e| MaybeError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${MAYBE_LOG_LEVEL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MaybeError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 依設定建立缺值策略，未設定的欄位使用預設值
    pub fn policy(&self) -> AbsencePolicy {
        let defaults = AbsencePolicy::default();
        let Some(absence) = &self.absence else {
            return defaults;
        };

        let mut policy = match &absence.recognized {
            Some(kinds) => defaults.with_recognized(kinds.iter().copied()),
            None => defaults,
        };
        if let Some(fallback) = absence.name_falls_back_to_attribute {
            policy.name_falls_back_to_attribute = fallback;
        }
        if let Some(negative) = absence.negative_indices {
            policy.negative_indices = negative;
        }
        policy
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

impl Validate for MaybeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(absence) = &self.absence {
            absence.validate()?;
        }
        if let Some(logging) = &self.logging {
            logging.validate()?;
        }
        Ok(())
    }
}

impl Validate for AbsenceConfig {
    fn validate(&self) -> Result<()> {
        let Some(kinds) = &self.recognized else {
            return Ok(());
        };
        let mut seen = BTreeSet::new();
        for kind in kinds {
            if !seen.insert(*kind) {
                return Err(MaybeError::InvalidConfigValueError {
                    field: "absence.recognized".to_string(),
                    value: kind.to_string(),
                    reason: "Duplicate absence kind".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.level {
            validation::validate_non_empty_string("logging.level", level)?;
            validation::validate_one_of("logging.level", &level.to_lowercase(), &LOG_LEVELS)?;
        }
        Ok(())
    }
}
