use crate::config::toml_config::SalaryConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderChoice {
    All,
    Headhunter,
    Superjob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-salaries")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub area: Option<String>,

    #[arg(long)]
    pub period_days: Option<u32>,

    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Maximum vacancies fetched per language
    #[arg(long)]
    pub max_items: Option<u32>,

    #[arg(long, value_enum, default_value = "all")]
    pub provider: ProviderChoice,

    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入設定檔 (沒給就用預設值)，再套用環境變數與命令列覆蓋
    pub fn load_config(&self) -> Result<SalaryConfig> {
        let mut config = match &self.config {
            Some(path) => SalaryConfig::from_file(path)?,
            None => SalaryConfig::default(),
        };
        config.apply_env();
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut SalaryConfig) {
        if let Some(area) = &self.area {
            config.search.area = area.clone();
        }
        if let Some(period_days) = self.period_days {
            config.search.period_days = period_days;
        }
        if !self.languages.is_empty() {
            config.search.languages = self.languages.clone();
        }
        if let Some(max_items) = self.max_items {
            config.search.max_items = max_items;
        }
        match self.provider {
            ProviderChoice::All => {}
            ProviderChoice::Headhunter => config.superjob.enabled = false,
            ProviderChoice::Superjob => config.headhunter.enabled = false,
        }
    }
}
