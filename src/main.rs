use price_outlier::config::Config;
use price_outlier::infrastructure::model_store::ModelStore;
use price_outlier::interfaces::design_system::DesignSystem;
use price_outlier::interfaces::ui::ClassifierApp;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
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
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Create Log Channel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI console)
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Price Outlier Classifier {} starting...", env!("CARGO_PKG_VERSION"));

    // 3. Load Config
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: model={:?} format={:?} language={:?}",
        config.model_path, config.model_format, config.language
    );

    // 4. Load the model once; a failure is shown in the window, not fatal
    let store = ModelStore::new(&config.model_path, config.model_format);
    let app = ClassifierApp::new(&config, &store, log_rx);

    // 5. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_title("Price Outlier Classifier"),
        ..Default::default()
    };

    eframe::run_native(
        "Price Outlier Classifier",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
