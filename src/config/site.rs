use crate::domain::model::Continent;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_site_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub timing: TimingConfig,
    pub content: Option<ContentConfig>,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavLinkConfig>,
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub base_url: String,
    #[serde(default = "default_current_path")]
    pub current_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub search_debounce_ms: u64,
    pub resize_debounce_ms: u64,
    pub scroll_throttle_ms: u64,
    pub announcement_clear_ms: u64,
    pub notification_dismiss_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            resize_debounce_ms: 250,
            scroll_throttle_ms: 100,
            announcement_clear_ms: 1000,
            notification_dismiss_ms: 3000,
        }
    }
}

impl TimingConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn announcement_clear(&self) -> Duration {
        Duration::from_millis(self.announcement_clear_ms)
    }

    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLinkConfig {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub name: String,
    pub country: String,
    pub continent: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

fn default_current_path() -> String {
    "/destinos.html".to_string()
}

fn default_navigation() -> Vec<NavLinkConfig> {
    [
        ("Inicio", "index.html"),
        ("Destinos", "destinos.html"),
        ("Contacto", "contacto.html"),
    ]
    .into_iter()
    .map(|(label, href)| NavLinkConfig {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTENT_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_url("site.base_url", &self.site.base_url)?;
        validate_site_path("site.current_path", &self.site.current_path)?;

        if let Some(content) = &self.content {
            validate_url("content.endpoint", &content.endpoint)?;
        }

        let timings = [
            ("timing.search_debounce_ms", self.timing.search_debounce_ms),
            ("timing.resize_debounce_ms", self.timing.resize_debounce_ms),
            ("timing.scroll_throttle_ms", self.timing.scroll_throttle_ms),
            ("timing.announcement_clear_ms", self.timing.announcement_clear_ms),
            ("timing.notification_dismiss_ms", self.timing.notification_dismiss_ms),
        ];
        for (field, value) in timings {
            validate_range(field, value, 1, 60_000)?;
        }

        for (index, destination) in self.destinations.iter().enumerate() {
            validate_non_empty_string(&format!("destinations[{}].name", index), &destination.name)?;
            if Continent::from_label(&destination.continent).is_err() {
                return Err(SiteError::InvalidConfigValueError {
                    field: format!("destinations[{}].continent", index),
                    value: destination.continent.clone(),
                    reason: format!(
                        "Unknown continent. Valid continents: {}",
                        Continent::ALL
                            .iter()
                            .map(Continent::as_str)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    /// 取得目前頁面的完整網址
    pub fn page_url(&self) -> String {
        format!(
            "{}{}",
            self.site.base_url.trim_end_matches('/'),
            self.site.current_path
        )
    }

    pub fn content_endpoint(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.endpoint.as_str())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let destinations = [
            ("París", "Francia", "europe", "La ciudad de la luz y el arte."),
            ("Roma", "Italia", "europe", "Historia viva en cada esquina."),
            ("Tokio", "Japón", "asia", "Tradición y tecnología en armonía."),
            ("Bangkok", "Tailandia", "asia", "Templos dorados y mercados flotantes."),
            ("Marrakech", "Marruecos", "africa", "Zocos, especias y el desierto cerca."),
            ("Cusco", "Perú", "america", "Puerta de entrada a Machu Picchu."),
            ("Sídney", "Australia", "oceania", "Playas y una ópera inolvidable."),
        ]
        .into_iter()
        .map(|(name, country, continent, description)| DestinationConfig {
            name: name.to_string(),
            country: country.to_string(),
            continent: continent.to_string(),
            description: Some(description.to_string()),
            image: Some(format!("images/{}.jpg", name.to_lowercase())),
        })
        .collect();

        Self {
            site: SiteSection {
                name: "Viaje Mundo".to_string(),
                base_url: "https://viajemundo.example".to_string(),
                current_path: default_current_path(),
            },
            timing: TimingConfig::default(),
            content: None,
            navigation: default_navigation(),
            destinations,
        }
    }
}
