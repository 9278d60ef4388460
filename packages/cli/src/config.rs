use pagekit_schema::VariantsConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagekit.config.json";

/// Pagekit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding page JSON documents
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory rendered HTML is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Site template preset (nestly, summit-capital, upcrunch, blueprint-pro)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Per-type variant choices; wins over `template`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_variants: Option<VariantsConfig>,
}

fn default_src_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the pages directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// Site-wide variants: a `--template` flag, then `sectionVariants`,
    /// then the configured template. `None` means built-in defaults.
    pub fn variants(&self, template_override: Option<&str>) -> Option<VariantsConfig> {
        if let Some(slug) = template_override {
            return Some(VariantsConfig::for_template(slug));
        }
        if let Some(variants) = &self.section_variants {
            return Some(variants.clone());
        }
        self.template.as_deref().map(VariantsConfig::for_template)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            template: None,
            section_variants: None,
        }
    }
}
