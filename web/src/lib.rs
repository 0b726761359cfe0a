use clap::Parser;
use recall_core::GameConfig;
use wasm_bindgen::prelude::*;

mod game;
mod messages;
mod surface;
mod utils;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Memorize pause per token, in milliseconds
    #[arg(long, default_value_t = GameConfig::DEFAULT_MEMORIZE_DELAY_MS)]
    memorize_ms: u32,

    /// Pause between scramble rounds, in milliseconds
    #[arg(long, default_value_t = GameConfig::DEFAULT_ROUND_INTERVAL_MS)]
    interval_ms: u32,
}

impl Args {
    fn parse_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn game_config(&self) -> GameConfig {
        GameConfig::new(
            GameConfig::DEFAULT_MIN_TOKENS,
            GameConfig::DEFAULT_MAX_TOKENS,
            self.memorize_ms,
            self.interval_ms,
        )
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::parse_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}", seed);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        config: args.game_config(),
        seed,
    };
    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_default_timings() {
        let args = Args::parse_location_hash("").unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.game_config(), GameConfig::default());
    }

    #[test]
    fn hash_arguments_override_seed_and_timings() {
        let args =
            Args::parse_location_hash("#--seed=17&--memorize-ms=250&--interval-ms=500").unwrap();

        let config = args.game_config();
        assert_eq!(args.seed, Some(17));
        assert_eq!(config.memorize_delay_ms, 250);
        assert_eq!(config.round_interval_ms, 500);
        assert_eq!((config.min_tokens, config.max_tokens), (3, 7));
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert!(Args::parse_location_hash("#--seed=abc").is_err());
    }
}
