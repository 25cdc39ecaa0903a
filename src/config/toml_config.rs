use crate::domain::model::ResourceTarget;
use crate::utils::error::{Result, StripError};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

/// Optional overrides read from a TOML file. Every field falls back to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub resources: Option<Vec<ResourceTarget>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StripError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StripError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TEMPLATE_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("input", Path::new(input))?;
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", Path::new(output))?;
        }
        if let Some(resources) = &self.resources {
            validation::validate_not_empty("resources", resources)?;
            for target in resources {
                validation::validate_resource_name("resources.name", &target.name)?;
                validation::validate_non_empty_string("resources.type", &target.resource_type)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
input = "infra/template.yaml"
output = "infra/template-stripped.yaml"

[[resources]]
name = "FrontendBucket"
type = "AWS::S3::Bucket"

[[resources]]
name = "LogsBucket"
type = "AWS::S3::Bucket"
"#,
        )
        .unwrap();

        assert_eq!(config.input.as_deref(), Some("infra/template.yaml"));
        let resources = config.resources.as_ref().unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1], ResourceTarget::new("LogsBucket", "AWS::S3::Bucket"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.input.is_none());
        assert!(config.resources.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CFN_STRIP_TEST_DIR", "/tmp/cfn");
        let config = TomlConfig::from_toml_str(
            r#"
input = "${CFN_STRIP_TEST_DIR}/template.yaml"
output = "${CFN_STRIP_UNDEFINED_VAR}/out.yaml"
"#,
        )
        .unwrap();

        assert_eq!(config.input.as_deref(), Some("/tmp/cfn/template.yaml"));
        assert_eq!(config.output.as_deref(), Some("${CFN_STRIP_UNDEFINED_VAR}/out.yaml"));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_names() {
        assert!(matches!(
            TomlConfig::from_toml_str("inputs = \"x\"").unwrap_err(),
            StripError::ConfigParseError { .. }
        ));

        let config = TomlConfig::from_toml_str(
            r#"
[[resources]]
name = "Frontend Bucket"
type = "AWS::S3::Bucket"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("resources = []").unwrap();
        assert!(matches!(
            config.validate().unwrap_err(),
            StripError::MissingConfigError { .. }
        ));
    }
}
