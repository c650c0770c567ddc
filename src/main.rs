use cardiorisk::application::ml::build_predictor;
use cardiorisk::application::ml::service::PredictionService;
use cardiorisk::application::session::PatientSession;
use cardiorisk::config::Config;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel, one line at a
// time. Partial lines are buffered until their newline arrives.
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
    buffer: String,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.push_str(&String::from_utf8_lossy(buf));

        while let Some(pos) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=pos).collect();
            let line = line.trim_end();
            if !line.is_empty() {
                let _ = self.sender.try_send(line.to_string());
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.buffer.is_empty() {
            let _ = self.sender.try_send(std::mem::take(&mut self.buffer));
        }
        Ok(())
    }
}

impl Drop for ChannelWriter {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
            buffer: String::new(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Log channel feeding the UI panel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing CardioRisk...");

    let config = Config::from_env()?;

    // The predictor artifact is loaded exactly once. A failed load disables
    // prediction but never aborts startup.
    let predictor = build_predictor(&config);
    let service = PredictionService::new(predictor, config.prediction_timeout());
    let session = PatientSession::new(service, log_rx);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("CardioRisk"),
        ..Default::default()
    };

    eframe::run_native(
        "CardioRisk",
        native_options,
        Box::new(|_cc| Ok(Box::new(session))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
