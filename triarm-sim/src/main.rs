// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::Parser;

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Triarm Motion Simulator", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Number of targets to seek before exiting; 0 runs forever.
    #[arg(long, default_value_t = 0)]
    targets: usize,
    /// Randomize the start pose.
    #[arg(long, default_value_t = false)]
    randomize_start: bool,
    /// Daemonize the service.
    #[arg(long)]
    daemon: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bin_name = env!("CARGO_BIN_NAME");

    let local_config = std::env::current_dir()?.join("triarm.toml");

    let mut paths = vec![
        std::path::PathBuf::from("/etc/triarm/triarm.toml"),
        local_config,
    ];
    if let Some(path) = args.config {
        paths.insert(0, path);
    }

    let mut runtime_config = triarm::Config::try_from_file(paths)?;

    runtime_config.global.bin_name = bin_name.to_string();
    runtime_config.global.daemon = args.daemon;

    let config = config::SimConfig {
        targets: args.targets,
        randomize_start: args.randomize_start,
        runtime: runtime_config,
    };

    let mut log_config = simplelog::ConfigBuilder::new();
    if args.daemon {
        log_config.set_time_level(log::LevelFilter::Off);
        log_config.set_thread_level(log::LevelFilter::Off);
    } else {
        log_config.set_time_offset_to_local().ok();
        log_config.set_time_format_rfc2822();
    }

    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);
    log_config.add_filter_ignore_str("mio");

    let log_level = if args.daemon {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let color_choice = if args.daemon {
        simplelog::ColorChoice::Never
    } else {
        simplelog::ColorChoice::Auto
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        color_choice,
    )?;

    if args.daemon {
        log::debug!("Running service as daemon");
    }

    log::info!(
        "Hello, I'm a {} 🦾. Show me a target!",
        ansi_term::Color::Yellow.paint("three-segment arm")
    );
    log::debug!("Runtime version: {}", triarm::consts::VERSION);

    log::trace!("{:#?}", config);

    daemonize(&config).await
}

/// Run the frame loop until the target quota is met or the process is
/// interrupted.
///
/// The loop stands in for the rendering collaborator: it injects pointer
/// clicks, ticks the component pipeline exactly once per frame and consumes
/// the recomputed vertex positions.
async fn daemonize(config: &config::SimConfig) -> anyhow::Result<()> {
    use rand::Rng;

    use triarm::components::{Kinematic, Pipeline};
    use triarm::core::ArmState;
    use triarm::kinematics::JointAngles;
    use triarm::runtime::{Component, ComponentContext};

    let runtime_config = config.runtime.clone();
    let arm = runtime_config.arm;
    let projection = runtime_config.projection;

    let mut rng = rand::rngs::OsRng::default();

    let mut angles = runtime_config.angles;
    if config.randomize_start {
        angles = JointAngles::new(
            rng.gen_range(-std::f32::consts::PI..=std::f32::consts::PI),
            rng.gen_range(-std::f32::consts::PI..=std::f32::consts::PI),
            rng.gen_range(-std::f32::consts::PI..=std::f32::consts::PI),
        );
    }

    log::info!("Arm: {}", arm);
    log::debug!("Start pose: {}", angles);

    let mut pipeline = Pipeline::new(vec![Pipeline::make::<Kinematic>(
        10,
        runtime_config.clone(),
    )]);

    let mut ctx = ComponentContext::new(ArmState::new(angles));

    let mut interval = tokio::time::interval(std::time::Duration::from_millis(
        runtime_config.frame_interval_ms,
    ));

    let mut sought = 0;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::debug!("Shutting down simulator");
                break;
            }
            _ = interval.tick() => {}
        }

        if !ctx.state.is_seeking() {
            if ctx.state.target().is_some() {
                let [_, _, _, effector] = ctx.state.vertices(&arm);

                log::info!("Effector settled at [{:.2}, {:.2}]", effector.x, effector.y);
            }

            if config.targets != 0 && sought >= config.targets {
                break;
            }

            // Clicks outside the reach circle are discarded.
            let target = loop {
                let x = rng.gen_range(0.0..projection.width as f32);
                let y = rng.gen_range(0.0..projection.height as f32);

                let target = projection.world_target(x, y);
                if target.point.coords.norm() < arm.max_reach() {
                    break target;
                }
            };

            log::info!("New target position at: {}", target);

            ctx.state.set_target(target);
            sought += 1;
        }

        pipeline.tick(&mut ctx);

        let [p0, p1, p2, p3] = ctx.state.vertices(&arm);
        log::trace!(
            "Frame {} ({:?}): [{:.2}, {:.2}] [{:.2}, {:.2}] [{:.2}, {:.2}] [{:.2}, {:.2}]",
            ctx.iteration(),
            ctx.delta(),
            p0.x,
            p0.y,
            p1.x,
            p1.y,
            p2.x,
            p2.y,
            p3.x,
            p3.y
        );

        ctx.post_tick();
    }

    Ok(())
}
