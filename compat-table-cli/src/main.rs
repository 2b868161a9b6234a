mod fixture;
mod step;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use compat_table::{CellIndex, CompatTable, WidgetConfig};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Animator, Document, Event, NodeId};

use crate::fixture::TableFixture;
use crate::step::Step;

/// Upper bound on a `settle` step. Longer means an animation never finished.
const SETTLE_LIMIT: Duration = Duration::from_secs(10);
const FRAME: Duration = Duration::from_millis(50);

/// Replay scripted interactions against a compatibility table and print how
/// its history panels respond.
#[derive(Debug, Parser)]
#[command(name = "compat-table", version)]
struct Args {
    /// Table fixture (JSON).
    fixture: PathBuf,

    /// Widget configuration (JSON). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip animations; every transition lands on the next tick.
    #[arg(long)]
    reduced_motion: bool,

    #[arg(long, default_value = "compat-table.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Steps: click:<id>, touch:<id>, key:<id>:<key>, focus:<id>, close,
    /// wait:<ms>, settle.
    steps: Vec<Step>,
}

struct Session {
    doc: Document,
    animator: Animator,
    widget: CompatTable,
    now: Instant,
}

impl Session {
    fn node(&self, id: &str) -> Result<NodeId> {
        self.doc
            .find_by_dom_id(id)
            .with_context(|| format!("no element with id `{id}`"))
    }

    fn send(&mut self, event: Event) {
        let flags = self
            .widget
            .handle_event(&mut self.doc, &mut self.animator, &event, self.now);
        log::debug!("[cli] {event:?} -> {flags:?}");
    }

    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.widget
            .tick(&mut self.doc, &mut self.animator, self.now);
    }

    fn settle(&mut self) {
        let mut waited = Duration::ZERO;
        while self.widget.is_animating() {
            if waited >= SETTLE_LIMIT {
                log::warn!("[cli] animation still running after {waited:?}");
                return;
            }
            self.advance(FRAME);
            waited += FRAME;
        }
    }

    fn run(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Click(id) => {
                let target = self.node(id)?;
                self.send(Event::Click { target });
            }
            Step::Touch(id) => {
                let target = self.node(id)?;
                self.send(Event::TouchEnd { target });
            }
            Step::Key(id, key) => {
                let target = self.node(id)?;
                self.send(Event::key(target, *key));
            }
            Step::Focus(id) => {
                let target = self.node(id)?;
                self.doc.focus(target);
            }
            Step::Close => {
                if !self
                    .widget
                    .close(&mut self.doc, &mut self.animator, self.now)
                {
                    log::info!("[cli] close ignored in {:?}", self.widget.state());
                }
            }
            Step::Wait(ms) => self.advance(Duration::from_millis(*ms)),
            Step::Settle => self.settle(),
        }
        Ok(())
    }

    fn report(&self, step: &Step) {
        println!("{step:?}: {:?}", self.widget.state());
        for (i, cell) in self.widget.cells().iter().enumerate() {
            let dom_id = self.doc.node(cell.node).id.as_deref().unwrap_or("?");
            println!(
                "  {dom_id:<16} {:<16} {:?}",
                cell.accessible_id,
                self.widget.visibility(CellIndex(i))
            );
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<WidgetConfig> {
    let Some(path) = path else {
        return Ok(WidgetConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("failed to create {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file)
        .context("failed to initialize logger")?;

    let raw = fs::read_to_string(&args.fixture)
        .with_context(|| format!("failed to read fixture {}", args.fixture.display()))?;
    let fixture: TableFixture = serde_json::from_str(&raw)
        .with_context(|| format!("invalid fixture {}", args.fixture.display()))?;
    let config = load_config(args.config.as_ref())?;

    let mut doc = Document::new();
    let table = doc.append(doc.root(), fixture.to_element());
    let widget = CompatTable::activate(&mut doc, table, config)?;
    log::info!("[cli] activated {} history cells", widget.cells().len());

    let mut animator = Animator::new();
    animator.set_reduced_motion(args.reduced_motion);

    let mut session = Session {
        doc,
        animator,
        widget,
        now: Instant::now(),
    };
    for step in &args.steps {
        session.run(step)?;
        session.report(step);
    }
    Ok(())
}
