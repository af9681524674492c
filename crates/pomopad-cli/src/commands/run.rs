//! Interactive terminal host.
//!
//! Reads one command per line from stdin while a [`Ticker`] feeds seconds
//! to the widget. The ticker is synced to the clock's running flag after
//! every command and tick, and signals from a cancelled ticker are dropped.

use std::path::PathBuf;

use clap::Args;
use pomopad_core::timer::TICK_PERIOD;
use pomopad_core::{BackgroundSpec, Config, Event, Intent, Ticker, ViewModel, Widget};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  start | pause | toggle | reset
  set <work-min> <break-min>
  bg theme | bg solid <color> | bg gradient <from> <to> | bg preset <name>
  note <text>
  note-color <color>
  import <path>
  export [dir]
  view
  help
  quit";

#[derive(Args)]
pub struct RunArgs {
    /// Work session length in minutes (overrides config)
    #[arg(long)]
    work: Option<u64>,
    /// Break session length in minutes (overrides config)
    #[arg(long = "break")]
    brk: Option<u64>,
}

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq)]
enum HostCommand {
    Intent(Intent),
    Settings { work: String, brk: String },
    Import(PathBuf),
    Export(PathBuf),
    View,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<HostCommand>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match (word, args.as_slice()) {
        ("", _) => return Ok(None),
        ("start", []) => HostCommand::Intent(Intent::Start),
        ("pause", []) => HostCommand::Intent(Intent::Pause),
        ("toggle", []) => HostCommand::Intent(Intent::Toggle),
        ("reset", []) => HostCommand::Intent(Intent::Reset),
        ("set", [work, brk]) => HostCommand::Settings {
            work: work.to_string(),
            brk: brk.to_string(),
        },
        ("bg", _) => HostCommand::Intent(Intent::SetBackground(parse_background(&args)?)),
        ("note", _) => HostCommand::Intent(Intent::EditNote(rest.to_string())),
        ("note-color", [color]) => HostCommand::Intent(Intent::SetNoteColor(color.to_string())),
        ("import", _) if !rest.is_empty() => HostCommand::Import(PathBuf::from(rest)),
        ("export", []) => HostCommand::Export(PathBuf::from(".")),
        ("export", _) => HostCommand::Export(PathBuf::from(rest)),
        ("view", []) => HostCommand::View,
        ("help", _) => HostCommand::Help,
        ("quit" | "exit", []) => HostCommand::Quit,
        _ => return Err(format!("unrecognized command: {line} (try `help`)")),
    };
    Ok(Some(command))
}

fn parse_background(args: &[&str]) -> Result<BackgroundSpec, String> {
    let spec = match args {
        ["theme"] => Ok(BackgroundSpec::Theme),
        ["solid", color] => BackgroundSpec::solid(color),
        ["gradient", from, to] => BackgroundSpec::gradient(from, to),
        ["preset", name @ ..] if !name.is_empty() => BackgroundSpec::preset(&name.join(" ")),
        _ => return Err("usage: bg theme | solid <color> | gradient <from> <to> | preset <name>".into()),
    };
    spec.map_err(|e| e.to_string())
}

fn status_line(view: &ViewModel) -> String {
    let state = if view.running { "running" } else { "paused" };
    let mut line = format!(
        "[{}] {} {state}",
        view.progress.label, view.progress.formatted_time
    );
    for caption in view.footer.iter().skip(1) {
        line.push_str(" | ");
        line.push_str(caption);
    }
    line
}

fn notice(event: &Event) -> Option<String> {
    match event {
        Event::SessionSwitched { from, to, .. } => Some(format!(
            "{} session complete, {} is ready",
            from.as_str(),
            to.as_str()
        )),
        Event::NoteImported { bytes, .. } => Some(format!("imported {bytes} bytes")),
        Event::NoteColorChanged { color, .. } => Some(format!("note color set to {color}")),
        _ => None,
    }
}

enum Flow {
    Continue,
    Quit,
}

async fn handle(widget: &mut Widget, command: HostCommand) -> pomopad_core::Result<Flow> {
    match command {
        HostCommand::Intent(intent) => {
            let Some(event) = widget.dispatch(intent)? else {
                return Ok(Flow::Continue);
            };
            if let Some(text) = notice(&event) {
                println!("{text}");
            }
            if !event.affects_clock() {
                return Ok(Flow::Continue);
            }
        }
        HostCommand::Settings { work, brk } => {
            let mut draft = widget.open_settings();
            draft.work_minutes = work;
            draft.break_minutes = brk;
            widget.apply_settings(draft)?;
        }
        HostCommand::Import(path) => {
            let event = widget.import_note(&path).await?;
            if let Some(text) = notice(&event) {
                println!("{text}");
            }
            return Ok(Flow::Continue);
        }
        HostCommand::Export(dir) => {
            let path = widget.export_note(&dir).await?;
            println!("exported note to {}", path.display());
            return Ok(Flow::Continue);
        }
        HostCommand::View => {
            println!("{}", serde_json::to_string_pretty(&widget.view())?);
            return Ok(Flow::Continue);
        }
        HostCommand::Help => {
            println!("{HELP}");
            return Ok(Flow::Continue);
        }
        HostCommand::Quit => return Ok(Flow::Quit),
    }
    println!("{}", status_line(&widget.view()));
    Ok(Flow::Continue)
}

fn load_config(args: &RunArgs) -> Config {
    let mut config = Config::load_or_default();
    if let Some(work) = args.work {
        config.timer.work_minutes = work;
    }
    if let Some(brk) = args.brk {
        config.timer.break_minutes = brk;
    }
    config
}

pub async fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args);
    let mut widget = Widget::new(&config)?;
    let (mut ticker, mut ticks) = Ticker::new(TICK_PERIOD);
    // Raw byte lines, decoded lossily: bad input must not end the session.
    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');

    tracing::debug!(
        work_minutes = config.timer.work_minutes,
        break_minutes = config.timer.break_minutes,
        "interactive host started"
    );
    println!("{}", status_line(&widget.view()));

    loop {
        tokio::select! {
            segment = lines.next_segment() => {
                let Some(bytes) = segment? else { break };
                let line = String::from_utf8_lossy(&bytes);
                match parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(command)) => match handle(&mut widget, command).await {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Quit) => break,
                        Err(e) => println!("error: {e}"),
                    },
                    Err(message) => println!("error: {message}"),
                }
            }
            Some(signal) = ticks.recv() => {
                if !ticker.is_current(signal) {
                    continue;
                }
                if let Some(event) = widget.dispatch(Intent::Tick)? {
                    if let Some(text) = notice(&event) {
                        println!("{text}");
                    }
                }
                println!("{}", status_line(&widget.view()));
            }
        }
        ticker.sync(widget.clock().is_running());
    }

    ticker.cancel();
    Ok(())
}
