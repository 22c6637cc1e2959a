use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use macroquad::prelude::next_frame;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use skippy::assets::{self, AssetBundle};
use skippy::cli::{self, Mode};
use skippy::clock::FrameClock;
use skippy::evolution::config::{self, EvolutionConfig};
use skippy::evolution::evolver::Evolver;
use skippy::evolution::population::Population;
use skippy::game::agents::AgentEpisode;
use skippy::game::manual::ManualSession;
use skippy::game::params::{GameParams, Rewards};
use skippy::game::session::{SessionStatus, Termination};
use skippy::game::world::World;

mod graphics;

/// How long the last frame stays up after a manual collision.
const COLLISION_LINGER: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    init_tracing();

    run().inspect_err(|err| error!("{err:#}"))
}

fn run() -> Result<()> {
    let Some(mode) = cli::prompt_mode(&mut io::stdin().lock(), &mut io::stdout())? else {
        println!("{}", cli::INVALID_INPUT);
        return Ok(());
    };

    let assets = AssetBundle::load(Path::new(assets::ASSET_DIR))?;
    let evolution = match mode {
        Mode::Manual => None,
        Mode::Agents => Some(EvolutionConfig::load_or_default(Path::new(
            config::CONFIG_FILE,
        ))?),
    };
    let params = GameParams::default();

    info!(?mode, "starting Skippy Turtle");

    macroquad::Window::from_config(graphics::window_conf(&params), async move {
        let result = match evolution {
            None => run_manual(params, assets).await,
            Some(config) => run_agents(params, assets, config).await,
        };
        if let Err(err) = result {
            error!("{err:#}");
        }
    });

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

async fn run_manual(params: GameParams, assets: AssetBundle) -> Result<()> {
    let textures = graphics::Textures::upload(&assets);
    let world = World::from_entropy(params.clone(), assets.sprite_set());
    let mut session = ManualSession::new(world);
    let mut clock = FrameClock::new(params.tick_rate);

    loop {
        clock.tick();
        let status = session.tick(graphics::poll_input());
        if status == SessionStatus::Terminated(Termination::Quit) {
            break;
        }

        graphics::draw(&session.scene(), &textures);
        next_frame().await;

        if status == SessionStatus::Terminated(Termination::Collision) {
            let until = Instant::now() + COLLISION_LINGER;
            while Instant::now() < until && !graphics::poll_input().quit {
                graphics::draw(&session.scene(), &textures);
                next_frame().await;
            }
            break;
        }
    }

    info!(score = session.world.score, ticks = session.world.ticks, "game over");
    Ok(())
}

async fn run_agents(params: GameParams, assets: AssetBundle, config: EvolutionConfig) -> Result<()> {
    let textures = graphics::Textures::upload(&assets);
    let sprites = assets.sprite_set();
    let rewards = Rewards::default();
    let mut population = Population::new(config)?;
    let mut clock = FrameClock::new(params.tick_rate);

    'evolution: while !population.is_finished() {
        let generation = population.generation();
        let networks = population.networks();
        let world = World::from_entropy(params.clone(), sprites.clone());
        let mut episode = AgentEpisode::new(world, &networks, rewards);

        loop {
            clock.tick();
            match episode.tick(graphics::poll_input().quit) {
                SessionStatus::Running => {}
                SessionStatus::Terminated(Termination::Quit) => break 'evolution,
                SessionStatus::Terminated(_) => break,
            }

            graphics::draw(&episode.scene(), &textures);
            next_frame().await;
        }

        info!(
            generation,
            score = episode.world.score,
            ticks = episode.world.ticks,
            "episode finished"
        );
        population.tell(&episode.into_fitness())?;
    }

    match population.champion() {
        Some(champion) => info!(
            key = champion.key,
            generation = champion.generation,
            fitness = champion.fitness,
            parameters = champion.network.parameter_count(),
            "best candidate"
        ),
        None => warn!("no generation was evaluated"),
    }

    Ok(())
}
