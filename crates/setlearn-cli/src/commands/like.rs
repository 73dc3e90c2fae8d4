//! The `setlearn like` command.

use std::path::PathBuf;

use anyhow::Result;

use setlearn_core::config::load_config_from;
use setlearn_core::likes::LikeCounter;

pub fn execute(show: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut counter = LikeCounter::load(&config.state_dir)?;

    if show {
        println!("Likes: {}", counter.count());
        return Ok(());
    }

    let count = counter.increment();
    counter.save()?;
    tracing::debug!(count, "like recorded");
    println!("Thanks! Likes: {count}");

    Ok(())
}
