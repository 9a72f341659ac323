use anyhow::Context;
use clap::Parser;
use life_weeks::core::input::parse_date;
use life_weeks::utils::{logger, validation::Validate};
use life_weeks::{
    CliConfig, Clock, FixedClock, InteractionController, JsonRenderer, Outcome, OutputFormat,
    RenderTarget, SystemClock, TerminalRenderer, TomlConfig,
};
use std::io::{self, BufRead, Write};

/// Exit code for a one-shot date that was rejected as user input.
const REJECTED_EXIT_CODE: i32 = 2;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入顯示配置
    let display_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose, display_config.log_level()),
        OutputFormat::Json => logger::init_json_logger(config.verbose, display_config.log_level()),
    }

    tracing::info!("Starting life-weeks");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    let validated = config.validate().and_then(|_| display_config.validate());
    if let Err(e) = validated {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let clock: Box<dyn Clock> = match &config.now {
        Some(now) => {
            let instant = parse_date(now).context("--now was validated but failed to parse")?;
            tracing::info!("Clock frozen at {}", instant);
            Box::new(FixedClock(instant))
        }
        None => Box::new(SystemClock),
    };

    let stdout = io::stdout().lock();
    let rejected = match config.format {
        OutputFormat::Text => run(
            &config,
            &display_config,
            clock.as_ref(),
            TerminalRenderer::new(stdout, display_config.display.clone()),
        )?,
        OutputFormat::Json => run(
            &config,
            &display_config,
            clock.as_ref(),
            JsonRenderer::new(stdout),
        )?,
    };

    // 單次提交被拒絕時以 2 結束，與設定錯誤 (1) 區分
    if rejected {
        std::process::exit(REJECTED_EXIT_CODE);
    }

    Ok(())
}

/// Returns whether a one-shot submission was rejected.
fn run<R: RenderTarget>(
    config: &CliConfig,
    display_config: &TomlConfig,
    clock: &dyn Clock,
    target: R,
) -> anyhow::Result<bool> {
    let mut controller = InteractionController::new(clock, target)
        .with_number_format(display_config.display.number_format());

    if let Some(dob) = &config.dob {
        let outcome = controller
            .submit(dob)
            .context("Failed to write output")?;
        if !config.is_interactive() {
            return Ok(match outcome {
                Outcome::Rejected(e) => {
                    eprintln!("💡 {}", e.recovery_suggestion());
                    true
                }
                Outcome::Rendered { .. } => false,
            });
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprint!("Date of birth (YYYY-MM-DD), or 'quit': ");
        io::stderr().flush().context("Failed to write prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        controller
            .submit(&line)
            .context("Failed to write output")?;
    }

    tracing::info!("Goodbye");
    Ok(false)
}
