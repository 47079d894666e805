use clap::Parser;
use vacancy_salaries::config::OutputFormat;
use vacancy_salaries::core::{ReportPresenter, VacancyProvider};
use vacancy_salaries::utils::error::ErrorSeverity;
use vacancy_salaries::utils::{logger, validation::Validate};
use vacancy_salaries::{
    AsciiTablePresenter, CliConfig, HeadHunterClient, JsonPresenter, ReportEngine, SalaryConfig,
    SalaryError, SalaryPipeline, SuperJobClient,
};

async fn run_provider<P: VacancyProvider, R: ReportPresenter>(
    provider: P,
    config: &SalaryConfig,
    title: String,
    presenter: R,
) -> vacancy_salaries::Result<()> {
    let pipeline = SalaryPipeline::new(provider, config.search.clone(), title);
    ReportEngine::new(pipeline, presenter).run().await?;
    Ok(())
}

async fn run_all<R: ReportPresenter + Copy>(
    config: &SalaryConfig,
    presenter: R,
) -> vacancy_salaries::Result<()> {
    if config.headhunter.enabled {
        let client = HeadHunterClient::new(&config.headhunter)?;
        run_provider(client, config, config.headhunter_title(), presenter).await?;
    }

    if config.superjob.enabled {
        let client = SuperJobClient::connect(&config.superjob).await?;
        run_provider(client, config, config.superjob_title(), presenter).await?;
    }

    Ok(())
}

fn exit_with(e: &SalaryError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 網路錯誤，可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vacancy-salaries");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let result = match cli.format {
        OutputFormat::Table => run_all(&config, AsciiTablePresenter).await,
        OutputFormat::Json => run_all(&config, JsonPresenter).await,
    };

    if let Err(e) = result {
        exit_with(&e);
    }

    Ok(())
}
