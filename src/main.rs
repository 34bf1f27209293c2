use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use urgency::app::App;
use urgency::cli::Cli;
use urgency::config::Config;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    info!("urgency starting");

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    info!(?config, "config loaded");

    let mut app = App::new(&config);
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    if config.interactive {
        let input = BufReader::new(tokio::io::stdin());
        if let Err(e) = app.run_interactive(input, &mut stdout, &mut stderr).await {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    }

    match app.reload_and_show(&mut stdout, &mut stderr).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
