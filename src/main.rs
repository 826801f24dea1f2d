//! RayOS Hands
//!
//! Main entry point for gesture-driven mouse and keyboard control.
//! This application:
//! - Receives hand landmarks from an external detector (or simulates a hand)
//! - Cycles control modes on a fist gesture
//! - Moves the cursor, clicks and scrolls in mouse mode
//! - Types on a virtual keyboard by dwelling in keyboard mode

use anyhow::{Context, Result};
use log::LevelFilter;
use rayos_hands::overlay::LogOverlay;
use rayos_hands::source::{LandmarkSource, SimulatedSource, UdpLandmarkSource};
use rayos_hands::{HandController, HandsConfig, InputSink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("═══════════════════════════════════════");
    log::info!("  RayOS Hands - gesture mouse & keyboard");
    log::info!("═══════════════════════════════════════");

    let config = HandsConfig::from_env().context("Failed to load configuration")?;
    match config.to_toml() {
        Ok(dump) => log::debug!("Effective configuration:\n{dump}"),
        Err(e) => log::debug!("Could not render configuration: {}", e),
    }

    let mut source: Box<dyn LandmarkSource> = match config.source.udp_addr {
        Some(addr) => {
            let source = UdpLandmarkSource::bind(addr, &config.source).await.map_err(|e| {
                log::error!("Failed to open landmark source: {}", e);
                log::error!("Make sure no other process is bound to {addr}");
                e
            })?;
            Box::new(source)
        }
        None => {
            log::warn!("No landmark feed configured (set RAYOS_HANDS_UDP_ADDR), using simulated hand");
            Box::new(SimulatedSource::new(&config.source))
        }
    };

    let sink = input_sink()?;
    let mut controller = HandController::new(&config, sink, LogOverlay::default());

    // Set up Ctrl+C handler
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal...");
        flag.store(true, Ordering::SeqCst);
    })?;

    log::info!("Make a fist to switch modes (NEUTRAL -> MOUSE -> KEYBOARD)");
    log::info!("Press Ctrl+C to exit");

    controller.run(source.as_mut(), &shutdown).await?;

    log::info!("RayOS Hands shutdown complete.");
    Ok(())
}

#[cfg(feature = "inject")]
fn input_sink() -> Result<Box<dyn InputSink>> {
    let sink = rayos_hands::input::EnigoSink::new().context("Failed to initialize input injection")?;
    Ok(Box::new(sink))
}

#[cfg(not(feature = "inject"))]
fn input_sink() -> Result<Box<dyn InputSink>> {
    log::warn!("Input injection not enabled (build with --features inject), logging actions only");
    Ok(Box::new(rayos_hands::input::LogSink))
}
