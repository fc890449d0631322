//! Line-oriented command shell.
//!
//! Each input line is one command. Failures are reported on the output and
//! the shell keeps reading; only `exit` (or end of input) stops it.
//!
//! On a terminal the shell reads through `rustyline`, which brings line
//! editing and command recall. Piped input goes through [`Shell::run`].

use std::io::{BufRead, Write};

use anyhow::{Context, anyhow, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use stockroom_inventory::{
    ExpiredFilter, Material, MaterialKey, MaterialService, ShortOrder,
};

use crate::args::{parse_date, parse_number, parse_quantity, split_args};
use crate::render::{OutputFormat, render_materials};

const PROMPT: &str = ">>> ";

const HELP: &str = "\
Commands:
  add <name> <supplier> <quantity> <d-m-y>
  update <name> <supplier> <d-m-y> <new-name> <new-supplier> <new-quantity> <new-d-m-y>
  delete <name> <supplier> <d-m-y>
  list                        all materials
  expired name <text>|none    expired materials whose name contains <text>
                              (`none` lists every expired material)
  expired qty <quantity>      expired materials with less than <quantity>
  short asc|desc <supplier> <quantity>
                              materials from <supplier> below <quantity>, by quantity
  sort                        materials sorted by name
  undo | redo
  help | exit
Wrap values containing spaces in double quotes.";

/// What the read loop should do after a line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<W: Write> {
    service: MaterialService,
    output: OutputFormat,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(service: MaterialService, output: OutputFormat, out: W) -> Self {
        Self {
            service,
            output,
            out,
        }
    }

    pub fn service(&self) -> &MaterialService {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands from a terminal until `exit`, end of input or Ctrl-D.
    ///
    /// Ctrl-C abandons the current line only.
    pub fn run_interactive(&mut self) -> anyhow::Result<()> {
        let mut editor =
            DefaultEditor::new().map_err(|e| anyhow!("failed to start line editor: {e}"))?;
        writeln!(self.out, "{HELP}")?;
        self.out.flush()?;

        loop {
            let read = editor.readline(PROMPT);
            if let Ok(line) = &read {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
            }
            let flow = self.on_read(read)?;
            self.out.flush()?;
            if flow == Flow::Exit {
                break;
            }
        }

        self.stopped();
        Ok(())
    }

    /// Read commands from any buffered source until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        writeln!(self.out, "{HELP}")?;
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if self.dispatch(&line)? == Flow::Exit {
                break;
            }
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
        }

        writeln!(self.out)?;
        self.stopped();
        Ok(())
    }

    fn on_read(&mut self, read: Result<String, ReadlineError>) -> anyhow::Result<Flow> {
        match read {
            Ok(line) => self.dispatch(&line),
            Err(ReadlineError::Interrupted) => {
                writeln!(self.out, "Type `exit` to quit.")?;
                Ok(Flow::Continue)
            }
            Err(ReadlineError::Eof) => Ok(Flow::Exit),
            Err(err) => Err(anyhow!("failed to read input: {err}")),
        }
    }

    /// Run one line, reporting a failed command on the output.
    fn dispatch(&mut self, line: &str) -> anyhow::Result<Flow> {
        match self.execute_line(line) {
            Ok(flow) => Ok(flow),
            Err(err) => {
                writeln!(self.out, "error: {err:#}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn stopped(&self) {
        tracing::info!(
            history_len = self.service.history_len(),
            "stockroom shell stopped"
        );
    }

    /// Run a single command line.
    pub fn execute_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let args = split_args(line)?;
        let Some((command, rest)) = args.split_first() else {
            return Ok(Flow::Continue);
        };
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

        match (command.as_str(), rest.as_slice()) {
            ("add", [name, supplier, quantity, date]) => {
                let material =
                    Material::new(*name, *supplier, parse_quantity(quantity)?, parse_date(date)?)?;
                self.service.add(material).context("add failed")?;
                self.say("Material added.")?;
            }
            (
                "update",
                [name, supplier, date, new_name, new_supplier, new_quantity, new_date],
            ) => {
                let key = MaterialKey::new(*name, *supplier, parse_date(date)?);
                let replacement = Material::new(
                    *new_name,
                    *new_supplier,
                    parse_quantity(new_quantity)?,
                    parse_date(new_date)?,
                )?;
                self.service
                    .update(&key, replacement)
                    .with_context(|| format!("update of {key} failed"))?;
                self.say("Material updated.")?;
            }
            ("delete", [name, supplier, date]) => {
                let key = MaterialKey::new(*name, *supplier, parse_date(date)?);
                self.service
                    .remove(&key)
                    .with_context(|| format!("delete of {key} failed"))?;
                self.say("Material deleted.")?;
            }
            ("list", []) => {
                let materials = self.service.list();
                self.show(&materials)?;
            }
            ("expired", ["name", text]) => {
                let text = if *text == "none" { "" } else { *text };
                let filter = ExpiredFilter::NameContains(text.to_string());
                let materials = self.service.filtered_expired(&filter);
                self.show(&materials)?;
            }
            ("expired", ["qty", quantity]) => {
                let filter = ExpiredFilter::QuantityLessThan(parse_number(quantity)?);
                let materials = self.service.filtered_expired(&filter);
                self.show(&materials)?;
            }
            ("short", [order, supplier, quantity]) => {
                let order = match *order {
                    "asc" => ShortOrder::Ascending,
                    "desc" => ShortOrder::Descending,
                    other => bail!("unknown order `{other}` (expected `asc` or `desc`)"),
                };
                let materials =
                    self.service
                        .filtered_short(order, supplier, parse_number(quantity)?);
                self.show(&materials)?;
            }
            ("sort", []) => {
                let materials = self.service.sorted_by_name_ascending();
                self.show(&materials)?;
            }
            ("undo", []) => {
                self.service.undo()?;
                self.say("Undone.")?;
            }
            ("redo", []) => {
                self.service.redo()?;
                self.say("Redone.")?;
            }
            ("help", []) => self.say(HELP)?,
            ("exit" | "quit", []) => return Ok(Flow::Exit),
            (
                "add" | "update" | "delete" | "list" | "expired" | "short" | "sort" | "undo"
                | "redo" | "help" | "exit" | "quit",
                _,
            ) => bail!("wrong arguments for `{command}`; type `help` for usage"),
            (other, _) => bail!("unknown command `{other}`; type `help` for usage"),
        }

        Ok(Flow::Continue)
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn show(&mut self, materials: &[Material]) -> anyhow::Result<()> {
        render_materials(&mut self.out, materials, self.output)
    }
}
