use std::{net::SocketAddr, path::PathBuf};

use rand::{rngs::StdRng, SeedableRng};

use crate::catalog::CatalogSource;

#[derive(Clone, Debug)]
pub struct Context {
    pub catalog: CatalogSource,
    pub fallback_to_embedded: bool,
    pub seed: Option<u64>,
    pub default_limit: Option<usize>,
    pub json: bool,
    pub log_file: Option<PathBuf>,
    pub api_listen: SocketAddr,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            catalog: match &cli.catalog {
                Some(path) => CatalogSource::File(PathBuf::from(path)),
                None => CatalogSource::Embedded,
            },
            fallback_to_embedded: cli.fallback_to_embedded,
            seed: cli.seed,
            default_limit: cli.default_limit,
            json: cli.json,
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            api_listen: cli.api_listen,
        }
    }

    /// Generator for one-shot commands; seeded when a seed was configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
