use clap::Parser;
use folio::{
    config::{
        AppConfig,
        Cli,
    },
    content::PortfolioContent,
    core::{
        Clock,
        SystemClock,
    },
    gui::FolioApp,
    page::PageRuntime,
    persistence::JsonPreferenceStore,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from(Cli::parse());

    let subscriber = FmtSubscriber::builder().with_max_level(config.log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Data directory: {}", config.data_dir.display());
    let content = PortfolioContent::load_or_default(config.content.as_deref());
    let store = JsonPreferenceStore::open(&config.data_dir);

    let clock = SystemClock::new();
    let page = PageRuntime::new(content, Box::new(store), clock.now())?;

    let title = format!("{} | Portfolio", page.content().owner);
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 600.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(&title, options, Box::new(|cc| Ok(Box::new(FolioApp::new(cc, page, clock)))))?;
    Ok(())
}
