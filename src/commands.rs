use std::path::Path;

use owo_colors::OwoColorize;
use snippets::config::SnippetsConfig;
use snippets::output::{emit_success, is_quiet, OutputMode};
use snippets::ui::{self, Icons};
use snippets::SnippetStore;

pub fn run_put(
    store: &SnippetStore,
    output_mode: OutputMode,
    name: &str,
    snippet: &str,
    hidden: bool,
) -> anyhow::Result<()> {
    let stored = store.put(name, snippet, hidden)?;

    if output_mode.is_human() {
        let suffix = if stored.hidden {
            format!(" {}", ui::hidden_marker())
        } else {
            String::new()
        };
        ui::success(&format!(
            "Stored {:?} as {}{}",
            stored.message,
            ui::keyword(&stored.keyword),
            suffix
        ));
    } else {
        emit_success(output_mode, "put", &stored)?;
    }
    Ok(())
}

pub fn run_get(store: &SnippetStore, output_mode: OutputMode, name: &str) -> anyhow::Result<()> {
    let message = store.get(name)?;

    if output_mode.is_human() {
        match message {
            Some(message) => println!("{}", message),
            None => ui::not_found(&format!("Snippet {} not found", ui::keyword(name))),
        }
    } else {
        let data = serde_json::json!({
            "keyword": name,
            "found": message.is_some(),
            "message": message,
        });
        emit_success(output_mode, "get", data)?;
    }
    Ok(())
}

pub fn run_catalog(store: &SnippetStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let keywords = store.catalog()?;

    if output_mode.is_human() {
        if keywords.is_empty() {
            ui::not_found("No snippets stored.");
        } else {
            println!("{}", ui::keyword_list(&keywords));
        }
    } else {
        emit_success(output_mode, "catalog", &keywords)?;
    }
    Ok(())
}

pub fn run_search(store: &SnippetStore, output_mode: OutputMode, term: &str) -> anyhow::Result<()> {
    let hits = store.search(term)?;

    if output_mode.is_human() {
        if !is_quiet() {
            ui::header(Icons::SEARCH, &format!("Searching snippets for {:?}...", term));
        }
        if hits.is_empty() {
            ui::not_found("No matching snippets.");
        } else {
            println!("{}", ui::hits_table(&hits));
        }
    } else {
        emit_success(output_mode, "search", &hits)?;
    }
    Ok(())
}

pub fn run_init(
    output_mode: OutputMode,
    config_path: &Path,
    database: &Path,
    force: bool,
) -> anyhow::Result<()> {
    SnippetsConfig::for_database(database).save(config_path, force)?;

    let store = SnippetStore::open(database)?;
    let counts = store.counts()?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", config_path.display()));
        ui::info(
            &format!("{} Database", Icons::DATABASE),
            &format!("{} {}", database.display(), ui::dim(&format!("({})", counts))),
        );
        if !is_quiet() {
            println!(
                "{} Try: {}",
                Icons::NOTE,
                "snippets put hello \"Hello, world\"".bold()
            );
        }
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "database": database.display().to_string(),
            "snippets": counts,
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}
