use anyhow::Result;
use clap::Parser;
use log::{error, info};

use lane_crosser::simulation::{
    Autopilot, GameHost, MoveSource, ScriptedMoves, WorldConfig, DEFAULT_COLS, DEFAULT_ROWS,
    TRAFFIC_PROBABILITY,
};

#[derive(Parser)]
#[command(name = "lane_crosser")]
#[command(about = "Endless lane-crossing game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Seed for world generation (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of columns the player can walk on
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: i32,

    /// Number of lanes to generate
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: i32,

    /// Probability that a lane after the start zone is a road
    #[arg(long, default_value_t = TRAFFIC_PROBABILITY)]
    traffic: f64,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "600")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.0166667")]
    delta: f64,

    /// Scripted moves for headless mode, e.g. "wwdw" or "ArrowUp,ArrowUp"
    #[arg(long, conflicts_with = "autopilot")]
    moves: Option<String>,

    /// Let the autopilot play in headless mode
    #[arg(long)]
    autopilot: bool,
}

impl Cli {
    fn world_config(&self) -> WorldConfig {
        WorldConfig {
            cols: self.cols,
            rows: self.rows,
            traffic_probability: self.traffic,
            ..Default::default()
        }
    }

    fn host(&self) -> Result<GameHost> {
        match self.seed {
            Some(seed) => GameHost::new_with_seed(self.world_config(), seed),
            None => GameHost::new(self.world_config()),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = if cli.ui {
        run_with_ui(&cli)
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn,lane_crosser=info"),
        )
        .init();
        run_headless(&cli)
    };

    if let Err(err) = result {
        // Headless runs have env_logger on stderr; UI startup errors happen
        // before Bevy installs its logger.
        if cli.ui {
            eprintln!("Error: {:#}", err);
        } else {
            error!("{:#}", err);
        }
        std::process::exit(1);
    }
}

/// Run a session in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    if cli.delta <= 0.0 {
        anyhow::bail!("Tick delta must be positive, got {}", cli.delta);
    }

    let mut host = cli.host()?;
    let mut source: Box<dyn MoveSource> = match &cli.moves {
        Some(script) => Box::new(ScriptedMoves::parse(script)?),
        None if cli.autopilot => Box::new(Autopilot::default()),
        None => Box::new(ScriptedMoves::default()),
    };

    // Calculate how many ticks equal 1 second of simulation time
    let ticks_per_second = (1.0 / cli.delta).ceil().max(1.0) as u32;
    info!(
        "Running headless session: {} ticks, {}s per tick, {} ticks per second",
        cli.ticks, cli.delta, ticks_per_second
    );

    println!("Initial state:");
    host.session().print_summary();
    host.session().draw_map();

    let mut now = 0.0;
    for tick in 1..=cli.ticks {
        now += cli.delta;

        let session = host.session();
        if !session.player.is_moving() && session.accepts_input() {
            if let Some(direction) = source.next_move(session) {
                host.press(direction, now);
            }
        }
        host.frame(now);

        if tick % ticks_per_second == 0 {
            let player = &host.session().player;
            info!(
                "After tick {} ({:.1}s simulated): cell ({}, {}), farthest row {}",
                tick, now, player.grid.x, player.grid.z, host.scoreboard.score
            );
        }

        if host.scoreboard.game_over {
            info!("Game over at tick {}", tick);
            break;
        }
    }

    println!("=== Final State ===");
    host.session().print_summary();
    host.session().draw_map();
    host.session()
        .stats
        .log_report(host.scoreboard.score, host.scoreboard.game_over);

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(cli: &Cli) -> Result<()> {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use lane_crosser::ui;

    // Build the first session before opening a window so a bad config never
    // reaches the render loop.
    let host = cli.host()?;

    println!("Starting Lane Crosser UI...");
    println!();
    println!("Controls:");
    println!("  Arrows / WASD - Move one cell");
    println!("  R / Restart   - New world after a crash");
    println!("  ESC           - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,lane_crosser=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Lane Crosser".into(),
                        resolution: (1280, 720).into(),
                        canvas: Some("#lane-crosser".into()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: true,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ui::HostResource(host))
        .add_plugins(ui::LaneCrosserUIPlugin)
        .run();

    Ok(())
}

#[cfg(not(feature = "ui"))]
fn run_with_ui(_cli: &Cli) -> Result<()> {
    anyhow::bail!("UI feature is not enabled. Rebuild with --features ui")
}
