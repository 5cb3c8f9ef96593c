use anyhow::{Context, Result};

pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    std::env::var(key)
        .ok()
        .map(|v| {
            v.parse::<usize>()
                .with_context(|| format!("{} must be a valid number", key))
        })
        .transpose()
}
