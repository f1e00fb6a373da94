use apollo_enrich::core::ConfigProvider;
use apollo_enrich::ui::InteractiveSession;
use apollo_enrich::utils::logger;
use apollo_enrich::{
    ApolloClient, CliConfig, Command, ContactRequest, Enricher, EnrichmentRequest,
    PeopleSearchRequest, Renderer,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting apollo-enrich");

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.category().exit_code());
        }
    };
    if config.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    let client = ApolloClient::from_config(&settings)?;
    let enricher = Enricher::new(client)
        .with_renderer(Renderer::new(settings.placeholder()))
        .with_format(config.format);
    let api_key = settings.api_key_or_empty();

    let report = match &config.command {
        Command::Company(args) => {
            let request = EnrichmentRequest::new(&args.domain, api_key)
                .with_linkedin_url(args.linkedin_url.as_deref())
                .with_name(args.name.as_deref())
                .with_country_code(args.country.as_deref());
            enricher.company_report(&request).await
        }
        Command::Contact(args) => {
            let request = ContactRequest::new(&args.email, api_key)
                .with_linkedin_url(args.linkedin_url.as_deref())
                .with_first_name(args.first_name.as_deref())
                .with_last_name(args.last_name.as_deref());
            enricher.contact_report(&request).await
        }
        Command::People(args) => {
            let request = PeopleSearchRequest::new(&args.query(), api_key);
            enricher.people_report(&request).await
        }
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut session = InteractiveSession::new(
                &enricher,
                stdin.lock(),
                std::io::stdout(),
                settings.api_key.clone(),
            );
            let submitted = session.run().await?;
            tracing::info!("✅ Interactive session finished ({} requests)", submitted);
            return Ok(());
        }
    };

    match report.failure {
        None => print!("{}", report.text),
        Some(category) => {
            eprint!("{}", report.text);
            std::process::exit(category.exit_code());
        }
    }

    Ok(())
}
