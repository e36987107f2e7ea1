//! Interactive session: reads menu choices and operation parameters from the
//! input channel, applies them to the inventory and writes text reports.

use std::io::{BufRead, Write};

use stockroom_inventory::Inventory;

use crate::error::{ConsoleError, describe};
use crate::input::TokenReader;
use crate::menu::{MENU, MenuChoice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print the welcome banner before the first menu.
    pub greeting: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { greeting: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One console session over a single in-memory inventory.
pub struct Session<R, W> {
    inventory: Inventory,
    input: TokenReader<R>,
    out: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, options: SessionOptions) -> Self {
        Self {
            inventory: Inventory::new(),
            input: TokenReader::new(input),
            out,
            options,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until Exit is chosen or the input ends.
    ///
    /// Only channel I/O failures end the session early; rejected operations
    /// and malformed input are reported and the loop continues.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        if self.options.greeting {
            write!(self.out, "Welcome to the inventory!")?;
        }

        loop {
            self.prompt(MENU)?;
            let Some(token) = self.input.next_token()? else {
                tracing::debug!("input closed");
                break;
            };

            let flow = match token.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(()) => {
                    tracing::debug!(input = %token, "invalid menu choice");
                    write!(self.out, "\nInvalid choice entered")?;
                    self.input.discard_line();
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(
            self.out,
            "\nTotal money received: {}",
            self.inventory.total_money()
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, ConsoleError> {
        let journaled = self.inventory.journal().len();

        let result = match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::SellItem => self.sell_item(),
            MenuChoice::ListItems => self.list_items(),
            MenuChoice::Exit => return Ok(Flow::Exit),
        };
        self.trace_events_since(journaled);

        match result {
            Err(ConsoleError::InvalidNumber { field, input }) => {
                tracing::warn!(field, input = %input, "malformed number");
                write!(self.out, "\nInvalid {field}: '{input}'")?;
                self.input.discard_line();
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    fn add_item(&mut self) -> Result<Flow, ConsoleError> {
        self.prompt("\nEnter item name: ")?;
        let Some(name) = self.input.next_token()? else {
            return Ok(Flow::Exit);
        };
        self.prompt("Enter quantity: ")?;
        let Some(quantity) = self.input.next_value::<u32>("quantity")? else {
            return Ok(Flow::Exit);
        };
        self.prompt("Enter price: ")?;
        let Some(price) = self.input.next_value::<f64>("price")? else {
            return Ok(Flow::Exit);
        };

        if let Err(err) = self.inventory.add_item(name, quantity, price) {
            write!(self.out, "\n{}", describe(&err))?;
        }
        Ok(Flow::Continue)
    }

    fn sell_item(&mut self) -> Result<Flow, ConsoleError> {
        self.prompt("\nEnter item name: ")?;
        let Some(name) = self.input.next_token()? else {
            return Ok(Flow::Exit);
        };

        // Report a missing item before asking how many to sell.
        let position = match self.inventory.position_of(&name) {
            Ok(position) => position,
            Err(err) => {
                write!(self.out, "\n{}", describe(&err))?;
                return Ok(Flow::Continue);
            }
        };

        self.prompt("\nEnter number of items to sell: ")?;
        let Some(requested) = self.input.next_value::<u32>("quantity")? else {
            return Ok(Flow::Exit);
        };

        match self.inventory.remove_item(position, requested) {
            Ok(sale) => {
                write!(self.out, "\nItems sold")?;
                write!(self.out, "\nMoney received: {}", sale.proceeds)?;
            }
            Err(err) => write!(self.out, "\n{}", describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn list_items(&mut self) -> Result<Flow, ConsoleError> {
        write!(self.out, "\n{}", self.inventory.list_items())?;
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn trace_events_since(&self, start: usize) {
        for entry in &self.inventory.journal().entries()[start..] {
            match serde_json::to_string(entry) {
                Ok(json) => tracing::debug!(event = %json, "journaled"),
                Err(err) => tracing::warn!(error = %err, "failed to encode journal entry"),
            }
        }
    }
}
