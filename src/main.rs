mod cli;
mod logger;

use clap::Parser;
use futures::StreamExt;
use tokio_util::sync::CancellationToken;

#[cfg(unix)]
use tokio::signal::unix::SignalKind;
use tokio::signal;

use qmc5883l::config::Config;
use qmc5883l::sensors::mag::reader::Reader;
use qmc5883l::sensors::mag::QMC5883L;

#[cfg(not(any(feature = "real-sensors", feature = "fake-sensors")))]
compile_error!("Activer 'real-sensors' ou 'fake-sensors'.");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(cli::Cli::parse());
    logger::init(config.verbose)?;

    log::debug!("[MAIN] Configuration: {:?}", config);

    // Bus
    #[cfg(feature = "fake-sensors")]
    let bus = {
        log::info!("[MAIN] Capteur simulé [FAKE].");
        qmc5883l::i2c::fake::FakeBus::new()
    };

    #[cfg(all(feature = "real-sensors", not(feature = "fake-sensors")))]
    let bus = qmc5883l::i2c::open(config.bus, config.address)?;

    // Capteur
    let mut mag = QMC5883L::new(bus, config.bus, config.address)?;
    mag.configure(config.mode, config.output_data_rate, config.range, config.oversampling)?;

    let token = CancellationToken::new();
    let mut reader = Reader::new(mag, config.interval(), token.child_token());

    {
        let token = token.clone();
        tokio::spawn(async move {
            wait_for_shutdown().await;
            token.cancel();
        });
    }

    while let Some(result) = reader.next().await {
        match result {
            Ok(sample) => log::info!("[MAG] {} |B|={:.1}", sample, sample.magnitude()),
            Err(e) => log::warn!("[MAG] {}", e),
        }
    }

    log::info!("[MAIN] Arrêt.");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_shutdown() {
    let mut terminate = match signal::unix::signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[MAIN] SIGTERM indisponible: {}", e);
            let _ = signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = terminate.recv() => {
            log::info!("Signal de terminaison reçu");
        },
        _ = signal::ctrl_c() => {
            log::info!("Signal de contrôle C reçu");
        },
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown() {
    let _ = signal::ctrl_c().await;
    log::info!("Signal de contrôle C reçu");
}
