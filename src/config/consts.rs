// src/config/consts.rs

// Net config
pub const EVENTS_URL: &str = "https://www.betpawa.co.tz/events";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Local cache
pub const CACHE_FILE: &str = "betpawa_cache.json";
pub const CACHE_TTL_SECS: u64 = 900; // 15 minutes

// Default listing query (1X2 football, selected competitions)
pub const DEFAULT_MARKET_ID: &str = "1X2";
pub const DEFAULT_COMPETITIONS: &str = "11965,12541,12546,12545,12097,12110,12039,12127,12355";
pub const DEFAULT_CATEGORY_ID: &str = "2";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Prediction (Perplexity chat completions)
pub const PPLX_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const PPLX_MODEL_KEY: &str = "reasoning";
pub const PPLX_MODEL: &str = "sonar-reasoning";
pub const PPLX_MAX_TOKENS: u32 = 4096;
pub const PPLX_TEMPERATURE: f32 = 0.5;
pub const PPLX_TEMPERATURE_RANGE: (f32, f32) = (0.1, 1.0);
pub const PPLX_TIMEOUT_SECS: u64 = 120; // reasoning models are slow
