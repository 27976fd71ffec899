//! Connect Four GUI
//!
//! Play against the bot or another player. The session is kept in
//! `$CONNECT_FOUR_DATA_DIR` (default `.connect_four`).

use anyhow::{anyhow, Context, Result};
use log::info;

use connect_four::storage::FileStore;
use connect_four::ui::ConnectFourApp;

fn main() -> Result<()> {
    env_logger::init();

    let store = FileStore::from_env().context("could not open the data directory")?;
    info!("session data in {}", store.dir().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([600.0, 450.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(|cc| Ok(Box::new(ConnectFourApp::new(cc, Box::new(store))))),
    )
    .map_err(|e| anyhow!("GUI failed: {}", e))
}
