pub mod add;
pub mod categories;
pub mod play;
pub mod rules;

use std::path::Path;

use fa_core::WordPool;

/// Load a word file, turning any failure into a printable message.
fn load_pool(path: &Path) -> Result<WordPool, String> {
    WordPool::load(path).map_err(|e| e.to_string())
}
