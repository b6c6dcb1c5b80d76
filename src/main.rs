// Main entry point
use clap::Parser;
use colored::Colorize;
use sqlchat::domain::model::{AnswerRecord, ChatHistory};
use sqlchat::infrastructure::config::{self, load_config, Config, Logging, API_KEY_ENV};
use sqlchat::infrastructure::storage::{db, seed};
use sqlchat::interfaces::cli::Cli;
use sqlchat::presentation::messages::{Locale, Messages};
use sqlchat::presentation::theme::Theme;
use sqlchat::state::AppState;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config()?;
    apply_overrides(&mut config, &cli);

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.init_db {
        match seed::init_sample_database(&config.database_path).await? {
            seed::SeedOutcome::Created => println!(
                "{}",
                format!("Created sample database at {}", config.database_path.display()).green()
            ),
            seed::SeedOutcome::AlreadyExists => println!(
                "Database {} already exists, leaving it untouched",
                config.database_path.display()
            ),
        }
        return Ok(());
    }
    if cli.status {
        print_status(&config).await?;
        return Ok(());
    }

    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format!("CRITICAL: {}", e).red());
            eprintln!(
                "Set gemini.api_key in {} or the {} environment variable.",
                config::get_config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "the config file".to_string()),
                API_KEY_ENV
            );
            std::process::exit(1);
        }
    };

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if !cli.question.is_empty() {
        let question = cli.question.join(" ");
        let answer = state.pipeline.answer(&question).await;
        print_answer(&answer, &theme, &config, cli.json)?;
        return Ok(());
    }

    run_chat(&state, &theme, &config, cli.json).await
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.database {
        config.database_path = path.clone();
    }
    if let Some(name) = &cli.locale {
        match Locale::from_name(name) {
            Some(locale) => config.locale = locale,
            None => eprintln!("{}", format!("✘ Unknown locale: {}", name).red()),
        }
    }
    if cli.show_sql {
        config.show_sql = true;
    }
}

/// Interactive loop: one question per line until EOF, `exit` or Ctrl-C.
async fn run_chat(
    state: &AppState,
    theme: &Theme,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let messages: Messages = state.pipeline.locale().messages();
    let mut history = ChatHistory::with_greeting(messages.greeting);
    println!("{}", (theme.answer)(messages.greeting));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout
            .write_all(format!("{} ", (theme.prompt)("›")).as_bytes())
            .await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nInterrupted, bye.");
                break;
            }
        };

        let Some(line) = line else { break };
        let question = line.trim();
        if question.is_empty() {
            eprintln!("{}", (theme.hint)(messages.input_hint));
            continue;
        }
        if matches!(question, "exit" | "quit") {
            break;
        }

        history.push_question(question);
        eprintln!("{}", (theme.hint)(messages.thinking));

        let answer = state.pipeline.answer(question).await;
        print_answer(&answer, theme, config, json)?;
        history.push_answer(&answer);
    }

    tracing::info!("Chat ended after {} messages", history.len());
    Ok(())
}

fn print_answer(
    answer: &AnswerRecord,
    theme: &Theme,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
        return Ok(());
    }

    println!("{}", (theme.answer)(&answer.text));
    if config.show_sql {
        if let Some(query) = &answer.query {
            let messages = config.locale.messages();
            println!("  {}", (theme.line)(&"⸺".repeat(40)));
            println!("  {}", (theme.label)(messages.sql_label));
            for line in query.as_str().lines() {
                println!("    {}", (theme.sql)(line));
            }
        }
    }
    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn print_status(config: &Config) -> anyhow::Result<()> {
    println!("{}", "sqlchat Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Database status
    let db_path = &config.database_path;
    if db_path.exists() {
        let counts = db::table_counts(db_path).await?;
        let summary = counts
            .iter()
            .map(|(table, n)| format!("{} {}", table, n))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Database: {} ({})", db_path.display(), summary);
    } else {
        println!("Database: {} (not found, run --init-db)", db_path.display());
    }

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Model: {}", config.gemini.model);
    println!("Locale: {:?}", config.locale);

    if config.resolve_api_key().is_some() {
        println!("Gemini API: Configured");
    } else {
        println!("Gemini API: Not configured");
    }

    Ok(())
}
