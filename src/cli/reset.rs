//! Reset command: delete the generated city.

use anyhow::Result;

use crate::city::{fs::TreeWriter, reset_world};
use crate::config::CityConfig;
use crate::log;

pub fn reset_city(config: &CityConfig) -> Result<()> {
    let removed = reset_world(config, &mut TreeWriter::new())?;
    if removed == 0 {
        log!("reset"; "nothing to remove under {}", config.root().display());
    }
    Ok(())
}
