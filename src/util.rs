use chrono::Local;

const BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

pub fn get_token_from_env() -> Option<String> {
    let token_from_env = std::env::var(BOT_TOKEN);
    token_from_env.ok().filter(|token| !token.trim().is_empty())
}

/// Wall-clock timestamp with second precision, local time.
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
