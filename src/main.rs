use std::io;

use anyhow::Context as _;
use clap::Parser;
use tracing::info;

use dungeon::cli::Args;
use dungeon::config::load_config;
use dungeon::game::Game;
use dungeon::input::Bindings;
use dungeon::logging::setup_logging;
use dungeon::map::Dungeon;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = load_config()
        .context("Could not load configuration")?
        .with_overrides(args.map, args.start);

    let dungeon = Dungeon::from_file(&config.map_path, config.start_room.as_deref())
        .with_context(|| format!("Could not load dungeon from {}", config.map_path.display()))?;

    if args.render_only {
        print!("{}", dungeon.overview());
        return Ok(());
    }

    let mut game = Game::new(&dungeon, Bindings::new(config.quit_command));
    game.run(io::stdin().lock(), io::stdout().lock())?;

    info!("Session ended");
    Ok(())
}
