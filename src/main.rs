use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
use config::Invocation;
pub mod driver;
pub mod http_probe;
use http_probe::prelude::*;

#[cfg(test)]
mod test_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Invocation::from_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Usage) => {
            println!("{}", config::usage());
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    let settings = cli.into_settings();
    settings.style.apply();

    let prober = HttpProber::new(settings.timeout)?;
    let mut stdout = std::io::stdout();
    driver::run(&settings.schedule, &prober, settings.style, &mut stdout).await?;

    Ok(())
}
