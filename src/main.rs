// 牆壁網格檢視器 - 主程式
// show <grid-file>：讀取網格文件並在視窗中畫出所有牆壁

use clap::Parser;
use std::path::PathBuf;
use wallgrid::interface::MinifbDisplay;
use wallgrid::{utils::logger, Config, GridViewer};

/// Draw the walls described by a grid file.
#[derive(Parser, Debug)]
#[command(name = "show", version, about)]
struct Args {
    /// Path to the grid file
    grid: PathBuf,
}

fn main() {
    let args = Args::parse();
    let config = Config::new();
    logger::init(config.system.log_level);

    let mut video = MinifbDisplay::new(&config.system);
    let viewer = GridViewer::new(config);

    if let Err(e) = viewer.run(&args.grid, &mut video) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
