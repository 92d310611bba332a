//! Dialogue Simulator CLI.
//!
//! Usage:
//!   dialogue-sim play intro.xml              # Enter advances, "q" quits
//!   dialogue-sim play intro.xml --auto       # Advance on its own
//!   dialogue-sim dump intro.xml --start      # Print the frame tree
//!   dialogue-sim config --text-speed 0.04    # Show or change saved settings

use clap::{Parser, Subcommand};
use dialogue_sim::config::DialogueConfig;
use dialogue_sim::dialogue::text_speed_duration;
use dialogue_sim::dump::print_frame_tree;
use dialogue_sim::loader::{load_layout_file, LoadOptions, LoadedDialogue};
use dialogue_sim::widget::WidgetRegistry;
use dialogue_sim::{DialogueEvent, DialogueSequencer, Error};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dialogue-sim")]
#[command(about = "Play typewriter-style text dialogues from XML layouts")]
struct Cli {
    /// Config file to use instead of the saved one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a dialogue in the terminal
    Play {
        /// Layout file
        layout: PathBuf,

        /// Dialogue to play (defaults to the first one in the file)
        #[arg(short, long)]
        dialogue: Option<String>,

        /// Seconds per character, overriding config and layout
        #[arg(long)]
        text_speed: Option<f64>,

        /// Advance automatically once each message is revealed
        #[arg(long)]
        auto: bool,

        /// With --auto, simulate time without sleeping
        #[arg(long, requires = "auto")]
        no_sleep: bool,
    },

    /// Dump the frame tree built from a layout
    Dump {
        /// Layout file
        layout: PathBuf,

        /// Start every dialogue before dumping
        #[arg(long)]
        start: bool,

        /// Show only visible frames
        #[arg(long)]
        visible_only: bool,
    },

    /// Show the config, or change and save it
    Config {
        #[arg(long)]
        text_speed: Option<f64>,

        #[arg(long)]
        auto_advance_delay: Option<f64>,

        #[arg(long)]
        frame_step: Option<f64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DialogueConfig::load_from(path)?,
        None => DialogueConfig::load(),
    };

    match cli.command {
        Commands::Play { layout, dialogue, text_speed, auto, no_sleep } => {
            play(&config, &layout, dialogue.as_deref(), text_speed, auto, no_sleep)
        }
        Commands::Dump { layout, start, visible_only } => dump(&config, &layout, start, visible_only),
        Commands::Config { text_speed, auto_advance_delay, frame_step } => {
            update_config(config, text_speed, auto_advance_delay, frame_step)
        }
    }
}

fn play(
    config: &DialogueConfig,
    layout: &Path,
    name: Option<&str>,
    text_speed: Option<f64>,
    auto: bool,
    no_sleep: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(speed) = text_speed {
        text_speed_duration(speed)?;
    }
    let widgets = Rc::new(RefCell::new(WidgetRegistry::new()));
    let options = LoadOptions {
        default_text_speed: config.text_speed,
        text_speed_override: text_speed,
    };
    let mut loaded = select_dialogue(load_layout_file(&widgets, layout, &options)?, name)?;
    let sequencer = &mut loaded.sequencer;
    sequencer.start()?;

    let step = text_speed_duration(config.frame_step)?;
    if auto {
        let delay = Duration::try_from_secs_f64(config.auto_advance_delay).unwrap_or(Duration::ZERO);
        play_auto(sequencer, step, delay, !no_sleep)?;
    } else {
        play_interactive(sequencer, step)?;
    }
    Ok(())
}

fn select_dialogue(dialogues: Vec<LoadedDialogue>, name: Option<&str>) -> Result<LoadedDialogue, Error> {
    let found = match name {
        Some(wanted) => dialogues.into_iter().find(|d| d.sequencer.name() == wanted),
        None => dialogues.into_iter().next(),
    };
    found.ok_or_else(|| Error::WidgetNotFound(name.unwrap_or("(any dialogue)").to_string()))
}

/// Simulate frames of `step`, advancing `delay` after each full reveal.
fn play_auto(
    sequencer: &mut DialogueSequencer,
    step: Duration,
    delay: Duration,
    realtime: bool,
) -> io::Result<()> {
    let mut printer = Printer::default();
    let mut waited = Duration::ZERO;

    while sequencer.is_active() {
        sequencer.update(step);
        printer.refresh(sequencer)?;

        if sequencer.current_message().is_some_and(|m| m.is_fully_revealed()) {
            waited += step;
            if waited >= delay {
                sequencer.advance();
                waited = Duration::ZERO;
            }
        }
        report_events(sequencer, false)?;
        if realtime {
            thread::sleep(step);
        }
    }
    Ok(())
}

/// Feed wall-clock time; every line on stdin is one advance.
fn play_interactive(sequencer: &mut DialogueSequencer, step: Duration) -> io::Result<()> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut printer = Printer::default();
    let mut last = Instant::now();
    while sequencer.is_active() {
        let input = rx.recv_timeout(step);
        let now = Instant::now();
        sequencer.update(now - last);
        last = now;

        match input {
            Ok(line) if line.trim().eq_ignore_ascii_case("q") => sequencer.stop(),
            Ok(_) => sequencer.advance(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => sequencer.stop(),
        }

        printer.refresh(sequencer)?;
        report_events(sequencer, true)?;
    }
    Ok(())
}

/// Writes each message's newly revealed text as it appears.
#[derive(Default)]
struct Printer {
    index: Option<usize>,
    /// Bytes of the current message already written.
    printed: usize,
}

impl Printer {
    fn refresh(&mut self, sequencer: &DialogueSequencer) -> io::Result<()> {
        let Some(message) = sequencer.current_message() else {
            return Ok(());
        };
        let index = sequencer.current_index();
        let mut out = io::stdout().lock();

        if self.index != Some(index) {
            if self.index.is_some() {
                writeln!(out)?;
            }
            write!(out, "[{}/{}] ", index + 1, sequencer.len())?;
            self.index = Some(index);
            self.printed = 0;
        }

        let text = message.revealed_text();
        if text.len() > self.printed {
            write!(out, "{}", &text[self.printed..])?;
            self.printed = text.len();
        }
        out.flush()
    }
}

fn report_events(sequencer: &mut DialogueSequencer, interactive: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for event in sequencer.drain_events() {
        match event {
            DialogueEvent::MessageRevealed { .. } if interactive => write!(out, " \u{25BC}")?,
            DialogueEvent::Finished => writeln!(out, "\n-- end of {} --", sequencer.name())?,
            DialogueEvent::Stopped => writeln!(out)?,
            other => tracing::debug!("({}) {:?}", sequencer.name(), other),
        }
    }
    out.flush()
}

fn dump(
    config: &DialogueConfig,
    layout: &Path,
    start: bool,
    visible_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let widgets = Rc::new(RefCell::new(WidgetRegistry::new()));
    let options = LoadOptions {
        default_text_speed: config.text_speed,
        text_speed_override: None,
    };
    let mut dialogues = load_layout_file(&widgets, layout, &options)?;
    if start {
        for loaded in &mut dialogues {
            // Empty dialogues are already reported by start().
            let _ = loaded.sequencer.start();
        }
    }
    print_frame_tree(&widgets.borrow(), visible_only);
    Ok(())
}

fn update_config(
    mut config: DialogueConfig,
    text_speed: Option<f64>,
    auto_advance_delay: Option<f64>,
    frame_step: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = text_speed.is_some() || auto_advance_delay.is_some() || frame_step.is_some();
    if let Some(speed) = text_speed {
        config.text_speed = speed;
    }
    if let Some(delay) = auto_advance_delay {
        config.auto_advance_delay = delay;
    }
    if let Some(step) = frame_step {
        config.frame_step = step;
    }

    if changed {
        config.validate()?;
        config.save()?;
        eprintln!("Saved {}", config.path().display());
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
