//! Interactive command shell over a loaded circuit.
//!
//! Line-oriented: `display`, `simulate`, `loop`, `debug`, `<name>=0|1|U`,
//! `exit`. Command failures are reported and the session keeps going.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::bail;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::circuit::Circuit;
use crate::component::{lock, Component};
use crate::tristate::Tristate;

pub struct Shell {
    circuit: Circuit,
    running: bool,
}

impl Shell {
    pub fn new(circuit: Circuit) -> Self {
        Shell {
            circuit,
            running: true,
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Reads commands from stdin until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        print!("> ");
        io::stdout().flush()?;
        for line in stdin.lock().lines() {
            let line = line?;
            if let Err(error) = self.process_command(line.trim()) {
                eprintln!("{error:#}");
            }
            if !self.running {
                break;
            }
            print!("> ");
            io::stdout().flush()?;
        }
        Ok(())
    }

    pub fn process_command(&mut self, command: &str) -> anyhow::Result<()> {
        if command.is_empty() {
            return Ok(());
        }
        match command {
            "exit" => {
                self.running = false;
                return Ok(());
            }
            "display" => {
                self.circuit.display()?;
                return Ok(());
            }
            "simulate" => {
                self.circuit.simulate()?;
                return Ok(());
            }
            "loop" => return self.run_loop(),
            "debug" => {
                self.dump_netlist();
                return Ok(());
            }
            _ => {}
        }

        if let Some((name, value)) = command.split_once('=') {
            let value = match value.trim() {
                "0" => Tristate::False,
                "1" => Tristate::True,
                "U" => Tristate::Undefined,
                other => bail!("invalid input value '{other}', use 0, 1, or U"),
            };
            self.circuit.set_value(name.trim(), value)?;
            return Ok(());
        }

        bail!("unknown command: {command}")
    }

    /// Repeats simulate + display until a key interrupts. Raw mode is
    /// only held for the duration of the loop so the prompt behaves
    /// normally afterwards.
    fn run_loop(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let result = self.loop_until_interrupted();
        disable_raw_mode()?;
        println!();
        result
    }

    fn loop_until_interrupted(&mut self) -> anyhow::Result<()> {
        loop {
            self.circuit.simulate()?;
            let text = self.circuit.render()?;
            for line in text.lines() {
                // Raw mode needs explicit carriage returns.
                print!("{line}\r\n");
            }
            io::stdout().flush()?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    let interrupted = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
                        || (key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL));
                    if interrupted {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Dumps every component's pins, cached states, and links.
    fn dump_netlist(&self) {
        let mut names: Vec<&String> = self.circuit.components().map(|(name, _)| name).collect();
        names.sort();

        println!("===== circuit debug information =====");
        println!("tick: {}", self.circuit.tick());
        println!("components: {}", self.circuit.len());
        for name in names {
            let Ok(component) = self.circuit.component(name) else {
                continue;
            };
            let guard = lock(&component);
            println!();
            println!("[component] {name}");
            let base = guard.base();
            println!("  pin count: {}", base.pin_count());
            for (index, pin) in base.pins().iter().enumerate() {
                println!(
                    "  pin {index} [{}] state: {}",
                    pin.kind().to_str(),
                    pin.state()
                );
                for link in pin.links() {
                    if link.component.upgrade().is_some() {
                        println!("    -> {} (pin {})", link.name, link.pin);
                    } else {
                        println!("    -> expired link ({})", link.name);
                    }
                }
            }
        }
        println!("===== end debug information =====");
    }
}
