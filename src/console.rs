//! Line-oriented command shell driving the catalog.

use crate::backend::PropertyBackend;
use crate::catalog::{CatalogError, FieldError, FormField, Notice, NoticeLevel, PropertyDatabase};
use crate::models::{TypeFilter, UnknownVariant};
use crate::views::{render_detail, render_form, render_list};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  list                          show the (filtered) property cards
  search [text]                 filter by title, location or id; no text clears it
  type <all|apartment|villa|commercial>
  view <id>                     open the detail view
  close                         close the detail view
  add                           open a blank form
  edit [id]                     edit a property (defaults to the one being viewed)
  set <field> <value>           change a form field
  save | cancel                 submit or discard the open form
  delete [id]                   delete a property (defaults to the one being viewed)
  reload                        fetch the list again
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Type(TypeFilter),
    View(String),
    Close,
    Add,
    Edit(Option<String>),
    Set(FormField, String),
    Save,
    Cancel,
    Delete(Option<String>),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Variant(#[from] UnknownVariant),
}

fn optional_arg(rest: &str) -> Option<String> {
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "list" | "ls" => Command::List,
        "search" | "find" => Command::Search(rest.to_string()),
        "type" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "type",
                    argument: "a property type or `all`",
                });
            }
            Command::Type(rest.parse()?)
        }
        "view" | "show" => Command::View(optional_arg(rest).ok_or(CommandError::MissingArgument {
            command: "view",
            argument: "a property id",
        })?),
        "close" => Command::Close,
        "add" | "new" => Command::Add,
        "edit" => Command::Edit(optional_arg(rest)),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    argument: "a field name and a value",
                });
            }
            Command::Set(field.parse()?, value.trim().to_string())
        }
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(optional_arg(rest)),
        "reload" | "refresh" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(command)
}

/// What the shell should do after a command
#[derive(Debug)]
pub enum Outcome {
    Continue(String),
    Quit,
}

fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("✅ {}", notice.message),
        NoticeLevel::LocalOnly => format!("⚠️  {}", notice.message),
    }
}

pub fn render_listing<B: PropertyBackend>(db: &PropertyDatabase<B>) -> String {
    render_list(
        &db.filtered(),
        db.properties().len(),
        db.selected_type(),
        db.search_query(),
        db.is_loading(),
    )
}

fn render_open_form<B: PropertyBackend>(db: &PropertyDatabase<B>) -> String {
    db.form().map(render_form).unwrap_or_default()
}

/// Apply one command to the catalog and render the resulting view
pub async fn execute<B: PropertyBackend>(
    db: &mut PropertyDatabase<B>,
    command: Command,
) -> Result<Outcome, CatalogError> {
    debug!("Executing {:?}", command);

    let output = match command {
        Command::List => render_listing(db),
        Command::Search(query) => {
            db.set_search_query(query);
            render_listing(db)
        }
        Command::Type(filter) => {
            db.set_type_filter(filter);
            render_listing(db)
        }
        Command::View(id) => render_detail(db.select(&id)?),
        Command::Close => {
            db.clear_selection();
            render_listing(db)
        }
        Command::Add => render_form(db.open_add_form()),
        Command::Edit(id) => {
            let id = id
                .or_else(|| db.selected().map(|p| p.id.clone()))
                .ok_or(CatalogError::NothingSelected)?;
            render_form(db.open_edit_form(&id)?)
        }
        Command::Set(field, value) => {
            db.set_form_field(field, &value)?;
            render_open_form(db)
        }
        Command::Save => {
            let notice = db.save_property().await?;
            format!("{}\n\n{}", render_notice(&notice), render_listing(db))
        }
        Command::Cancel => {
            db.close_form();
            render_listing(db)
        }
        Command::Delete(id) => {
            let id = id
                .or_else(|| db.selected().map(|p| p.id.clone()))
                .ok_or(CatalogError::NothingSelected)?;
            let notice = db.delete_property(&id).await;
            format!("{}\n\n{}", render_notice(&notice), render_listing(db))
        }
        Command::Reload => {
            db.load_properties().await;
            render_listing(db)
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Continue(output))
}

/// Read commands from stdin until `quit` or end of input
pub async fn run<B: PropertyBackend>(db: &mut PropertyDatabase<B>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    println!("{}\n", render_listing(db));
    println!("Type `help` for commands.");

    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read command")? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("⚠️  {}", e);
                continue;
            }
        };

        match execute(db, command).await {
            Ok(Outcome::Continue(output)) => println!("{}", output),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("⚠️  {}", e),
        }
    }

    Ok(())
}
