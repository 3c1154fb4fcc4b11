#[macro_use]
extern crate log;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use env_logger::Env;

use mirrorball::debug::bounding_box_heatmap;
use mirrorball::Scene;

const DEFAULT_LOGGING_LEVEL: &str = "info";

#[derive(Parser)]
#[command(name = "mirrorball")]
#[command(about = "Ray traces .sce and .json scenes into 24 bit images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single scene
    Render {
        /// Scene file (.sce or .json)
        scene: PathBuf,
        /// Output image, format chosen by extension (.bmp, .tga, .png)
        output: PathBuf,
        /// Worker threads, defaults to one per core
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Render every <name>/<name>.sce below a directory into <results>/<name>.bmp
    Batch {
        scenes: PathBuf,
        results: PathBuf,
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Show how many mesh bounding boxes each primary ray enters
    DebugAabb { scene: PathBuf, output: PathBuf },
}

struct Job {
    scene: PathBuf,
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();

    match Cli::parse().command {
        Commands::Render { scene, output, threads } => {
            configure_threads(threads)?;
            render(&Job { scene, output })?;
        }
        Commands::Batch { scenes, results, threads } => {
            configure_threads(threads)?;
            fs::create_dir_all(&results)?;
            for job in discover(&scenes, &results)? {
                render(&job)?;
            }
        }
        Commands::DebugAabb { scene, output } => {
            let scene = Scene::load(&scene)?;
            bounding_box_heatmap(&scene).save(&output)?;
        }
    }

    info!("done");
    Ok(())
}

fn configure_threads(threads: Option<usize>) -> Result<(), Box<dyn Error>> {
    if let Some(threads) = threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }
    Ok(())
}

fn render(job: &Job) -> Result<(), Box<dyn Error>> {
    let scene = Scene::load(&job.scene)?;
    let image = scene.render();
    image.save(&job.output)?;
    Ok(())
}

/// Every `<dir>/<name>/<name>.sce` below `scenes`, sorted by name.
fn discover(scenes: &Path, results: &Path) -> Result<Vec<Job>, Box<dyn Error>> {
    let mut jobs = Vec::new();

    for entry in fs::read_dir(scenes)? {
        let dir = entry?.path();
        let name = match dir.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        let scene = dir.join(format!("{}.sce", name));
        if scene.is_file() {
            jobs.push(Job {
                scene,
                output: results.join(format!("{}.bmp", name)),
            });
        }
    }

    jobs.sort_by(|a, b| a.scene.cmp(&b.scene));
    info!("found {} scenes in {}", jobs.len(), scenes.display());

    Ok(jobs)
}
