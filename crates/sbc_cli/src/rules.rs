use anyhow::{Context, Result};
use sbc_core::{default_rulebook, RuleBook};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::info;

pub(crate) const RULES_PATH_ENV: &str = "SBC_RULES_PATH";

/// Rule book chosen by `--rules`, then `SBC_RULES_PATH`, then the embedded default.
pub(crate) fn resolve_rules(cli_path: Option<&Path>) -> Result<Cow<'static, RuleBook>> {
    let env_path = env::var(RULES_PATH_ENV)
        .ok()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);

    match cli_path.map(Path::to_path_buf).or(env_path) {
        Some(path) => Ok(Cow::Owned(load_rules_file(&path)?)),
        None => Ok(Cow::Borrowed(default_rulebook())),
    }
}

pub(crate) fn load_rules_file(path: &Path) -> Result<RuleBook> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule book '{}'", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let book = if is_json {
        RuleBook::from_json_str(&content)
    } else {
        RuleBook::from_yaml_str(&content)
    }
    .with_context(|| format!("Invalid rule book '{}'", path.display()))?;

    info!(
        path = %path.display(),
        edition = book.edition(),
        "using rule book from file"
    );
    Ok(book)
}
