use serde::Deserialize;

use crate::caption::caption_model::CaptionSeed;
use crate::caption::storage::LruCaptionCache;
use crate::contents::error::{ContentsError, read_structured};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedFile {
    List(Vec<CaptionSeed>),
    Wrapped { captions: Vec<CaptionSeed> },
}

/// Load caption seeds from a JSON or YAML file.
pub fn load_caption_seeds(path: &str) -> Result<Vec<CaptionSeed>, ContentsError> {
    let file: SeedFile = read_structured(path, &format!("captions {}", path))?;
    Ok(match file {
        SeedFile::List(seeds) => seeds,
        SeedFile::Wrapped { captions } => captions,
    })
}

/// Build a cache of the given capacity pre-populated from seeds.
///
/// Seeds beyond the capacity evict the earliest ones.
pub fn seeded_cache(seeds: Vec<CaptionSeed>, capacity: usize) -> LruCaptionCache {
    let mut cache = LruCaptionCache::new(capacity);
    for seed in seeds {
        cache.insert(&seed.element, seed.record);
    }
    cache
}
