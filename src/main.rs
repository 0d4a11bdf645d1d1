// ============================================
// Endless - Демонстрационный запуск мира
// ============================================
// Открывает (или создаёт) мир, генерирует стартовую область,
// трогает несколько вокселей и сохраняет всё на диск.

use std::path::Path;
use std::process::ExitCode;

use endless::voxel::ChunkPos;
use endless::{Voxel, World, WorldConfig, WorldError};

fn run() -> Result<(), WorldError> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = WorldConfig::load(Path::new(&config_path));

    let mut world = World::open(&config)?;

    let r = config.region_radius;
    let generated = world.generate_region(ChunkPos::new(-r, -r, 0), ChunkPos::new(r, r, 0));
    log::info!(
        "World ready: seed {}, {} chunks resident",
        world.seed(),
        generated
    );

    // Пробный воксель на поверхности и правка рядом
    let probe = world.get(0, 0, 8)?;
    log::info!("Voxel at (0, 0, 8): {:?}", probe);
    world.set(1, 1, 8, Voxel::new(2, 0))?;

    let saved = world.save_all_chunks()?;
    log::info!("Session done, {} chunks on disk", saved);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("World session failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
