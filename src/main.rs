//! Connect Four GUI
//!
//! Play against the engine or another player, in Classic or Score Attack.
//! Set `RUST_LOG=connect4=debug` to trace the engine's decisions.

use connect4::ui::Connect4App;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(|cc| Ok(Box::new(Connect4App::new(cc)))),
    )
}
