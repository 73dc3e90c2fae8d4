//! The `setlearn particles` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use setlearn_core::config::load_config_from;
use setlearn_core::particles::ParticleField;
use setlearn_report::svg::write_particles_svg;

pub fn execute(
    frames: u32,
    output: PathBuf,
    seed: Option<u64>,
    count: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut settings = config.particles;
    if let Some(count) = count {
        settings.count = count;
    }

    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut field = ParticleField::new(settings, &mut rng);
    for _ in 0..frames {
        field.step();
    }

    write_particles_svg(&field, &output)?;
    println!(
        "Rendered {} particles and {} links after {frames} frame(s) to {}",
        field.particles().len(),
        field.links().len(),
        output.display()
    );

    Ok(())
}
