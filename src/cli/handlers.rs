use std::io::{self, Read, Write};

use crate::clock::Clock;
use crate::config::{self, JotterConfig};
use crate::entity::Note;
use crate::error::{JotterError, Result};
use crate::session::{Confirm, Session};
use crate::storage::{DurableSlot, FileSlot};
use crate::store::NoteStore;
use crate::warnings::format_warning;

/// Open the session over the slot in the resolved data directory.
fn open_session() -> Result<(Session<FileSlot>, JotterConfig)> {
    let dir = config::data_dir();
    let config = JotterConfig::load(&dir)?;
    let slot = FileSlot::new(&dir, &config.slot_key);
    tracing::debug!(path = %slot.path().display(), "opening notes");
    Ok((Session::new(NoteStore::open(slot)), config))
}

/// Print persistence warnings without failing the command.
fn report_warnings<S: DurableSlot, C: Clock>(session: &mut Session<S, C>) {
    for warning in session.take_warnings() {
        eprintln!("{}", format_warning(&warning));
    }
}

/// Content from `--content`, or from stdin when `--stdin` is set.
fn read_content(content: Option<String>, stdin: bool) -> Result<Option<String>> {
    if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Some(buf));
    }
    Ok(content)
}

/// Resolve a 1-based list position, a full id, or a unique id prefix.
fn resolve_id(notes: &[Note], key: &str) -> Result<String> {
    let key = key.trim();
    if let Ok(position) = key.parse::<usize>() {
        if let Some(note) = position.checked_sub(1).and_then(|i| notes.get(i)) {
            return Ok(note.id.clone());
        }
    }
    if let Some(note) = notes.iter().find(|n| n.id == key) {
        return Ok(note.id.clone());
    }

    let mut matches = notes.iter().filter(|n| !key.is_empty() && n.id.starts_with(key));
    match (matches.next(), matches.next()) {
        (Some(note), None) => Ok(note.id.clone()),
        (Some(_), Some(_)) => Err(JotterError::AmbiguousId(key.to_string())),
        (None, _) => Err(JotterError::NotFound(key.to_string())),
    }
}

/// Position of `id` in the full collection, counted from 1.
fn position(notes: &[Note], id: &str) -> usize {
    notes.iter().position(|n| n.id == id).map_or(0, |i| i + 1)
}

fn print_listing(all: &[Note], shown: &[Note], snippet_length: usize) {
    for note in shown {
        println!(
            "  {:>3} ({}) {}",
            position(all, &note.id),
            note.short_id(),
            note.display_title()
        );
        let snippet = note.snippet(snippet_length);
        if !snippet.is_empty() {
            println!("        {}", snippet.replace('\n', " "));
        }
    }
}

/// Asks on the terminal unless `--force` was given.
struct TerminalConfirm {
    force: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm_delete(&mut self, note: &Note) -> bool {
        if self.force {
            return true;
        }
        eprint!("Delete note ({}) - {}? [y/N] ", note.short_id(), note.display_title());
        let _ = io::stderr().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => input.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }
}

pub fn handle_init() -> Result<()> {
    let dir = config::data_dir();
    if dir.exists() {
        return Err(JotterError::AlreadyInitialized);
    }

    let config = JotterConfig::default();
    config.save(&dir)?;
    let mut slot = FileSlot::new(&dir, &config.slot_key);
    slot.write("[]")?;

    println!("Initialized jotter in {}", dir.display());
    Ok(())
}

pub fn handle_new(
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let (mut session, _config) = open_session()?;
    let content = read_content(content, stdin)?;

    let draft = session.begin_create();
    draft.title = title.unwrap_or_default();
    draft.content = content.unwrap_or_default();
    let note = session.commit_draft()?;
    report_warnings(&mut session);

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", note.short_id(), note.display_title());
    }

    Ok(())
}

pub fn handle_list(filter: Option<String>, json: bool) -> Result<()> {
    let (mut session, config) = open_session()?;
    session.set_filter(filter.unwrap_or_default());
    let visible = session.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else if visible.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        print_listing(session.notes(), &visible, config.snippet_length);
    }

    Ok(())
}

pub fn handle_show(id: String, json: bool) -> Result<()> {
    let (mut session, _config) = open_session()?;
    let id = resolve_id(session.notes(), &id)?;
    let note = session.select(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("{}", note.display_title());
        println!("Id: {}", note.id);
        println!("Created: {}", note.created.format("%Y-%m-%d %H:%M"));
        println!("Updated: {}", note.updated.format("%Y-%m-%d %H:%M"));
        if !note.content.is_empty() {
            println!("\n{}", note.content);
        }
    }

    Ok(())
}

pub fn handle_edit(
    id: String,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let (mut session, _config) = open_session()?;
    let id = resolve_id(session.notes(), &id)?;
    let content = read_content(content, stdin)?;

    let draft = session.begin_edit(&id)?;
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(content) = content {
        draft.content = content;
    }
    let note = session.commit_draft()?;
    report_warnings(&mut session);

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note ({}) - {}", note.short_id(), note.display_title());
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let (mut session, _config) = open_session()?;
    let id = resolve_id(session.notes(), &id)?;
    let note = session
        .store()
        .get(&id)
        .cloned()
        .ok_or_else(|| JotterError::NotFound(id.clone()))?;

    if !force && !atty::is(atty::Stream::Stdin) {
        return Err(JotterError::ConfirmationRequired);
    }

    let mut confirm = TerminalConfirm { force };
    if !session.delete(&id, &mut confirm)? {
        println!("Cancelled.");
        return Ok(());
    }
    report_warnings(&mut session);

    println!("Deleted note ({}) - {}", note.short_id(), note.display_title());
    Ok(())
}

pub fn handle_search(query: String, json: bool) -> Result<()> {
    let (mut session, config) = open_session()?;
    session.set_filter(query.clone());
    let results = session.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No results found for '{}'.", query);
    } else {
        println!("Search results for '{}':\n", query);
        print_listing(session.notes(), &results, config.snippet_length);
    }

    Ok(())
}
