use serde::Deserialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::catalog::CafeCatalog;
use crate::customer::CustomerId;
use crate::error::{CafeError, CafeResult};
use crate::menu::{parse_price, MenuItem};

/// Top-level actions, keyed by the number the user types.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    #[serde(rename = "1")]
    AddMenuItem,
    #[serde(rename = "2")]
    RemoveMenuItem,
    #[serde(rename = "3")]
    ListMenu,
    #[serde(rename = "4")]
    CreateOrder,
    #[serde(rename = "5")]
    OrderHistory,
    #[serde(rename = "6")]
    Exit,
}

impl Action {
    /// Reads the choice as a number first, so "01" and "+1" both mean 1.
    pub fn parse(input: &str) -> CafeResult<Self> {
        let choice = input.trim();
        let invalid = || CafeError::InvalidChoice(choice.to_string());
        let number = choice.parse::<i64>().map_err(|_| invalid())?;
        serde_plain::from_str(&number.to_string()).map_err(|_| invalid())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Blocking prompt/dispatch loop over a line-oriented input and an output.
pub struct Console<'a, R, W> {
    catalog: &'a mut CafeCatalog,
    input: R,
    output: W,
    stop_word: String,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(catalog: &'a mut CafeCatalog, input: R, output: W, stop_word: &str) -> Self {
        Self {
            catalog,
            input,
            output,
            stop_word: stop_word.trim().to_lowercase(),
        }
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self) -> CafeResult<()> {
        info!("console started");
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an action: ")? else {
                break;
            };

            let action = match Action::parse(&line) {
                Ok(action) => action,
                Err(err) => {
                    warn!(%err, "rejected menu choice");
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    continue;
                }
            };
            debug!(?action, "dispatching");

            if self.dispatch(action)? == Flow::Exit {
                break;
            }
        }
        info!("console stopped");
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> CafeResult<Flow> {
        match action {
            Action::AddMenuItem => self.add_menu_item(),
            Action::RemoveMenuItem => self.remove_menu_item(),
            Action::ListMenu => self.list_menu(),
            Action::CreateOrder => self.create_order(),
            Action::OrderHistory => self.order_history(),
            Action::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> CafeResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Cafe menu ---")?;
        writeln!(self.output, "1. Add menu item")?;
        writeln!(self.output, "2. Remove menu item")?;
        writeln!(self.output, "3. View menu")?;
        writeln!(self.output, "4. Create order")?;
        writeln!(self.output, "5. View customer order history")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn add_menu_item(&mut self) -> CafeResult<Flow> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price_input) = self.prompt("Enter price: ")? else {
            return Ok(Flow::Exit);
        };
        let price = match parse_price(&price_input) {
            Ok(price) => price,
            Err(err) => {
                warn!(%err, "menu item discarded");
                writeln!(self.output, "Error: price must be a number. Please try again.")?;
                return Ok(Flow::Continue);
            }
        };
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Exit);
        };

        self.catalog
            .add_menu_item(MenuItem::new(name.as_str(), price, category));
        writeln!(self.output, "Added menu item: {}", name)?;
        Ok(Flow::Continue)
    }

    fn remove_menu_item(&mut self) -> CafeResult<Flow> {
        let Some(name) = self.prompt("Enter the name of the item to remove: ")? else {
            return Ok(Flow::Exit);
        };

        if self.catalog.remove_menu_item(&name) {
            writeln!(self.output, "Item {} removed from the menu.", name)?;
        } else {
            writeln!(self.output, "Item {} not found in the menu.", name)?;
        }
        Ok(Flow::Continue)
    }

    fn list_menu(&mut self) -> CafeResult<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Menu ---")?;
        let items = self.catalog.list_menu_items();
        if items.is_empty() {
            writeln!(self.output, "The menu is empty.")?;
        } else {
            for item in items {
                writeln!(self.output, "{}", item)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn create_order(&mut self) -> CafeResult<Flow> {
        let Some(name) = self.prompt("Enter customer name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Enter customer phone: ")? else {
            return Ok(Flow::Exit);
        };

        let item_prompt = format!(
            "Enter a menu item to add to the order (or '{}' to finish): ",
            self.stop_word
        );
        let mut items = Vec::new();
        loop {
            let Some(item_name) = self.prompt(&item_prompt)? else {
                return Ok(Flow::Exit);
            };
            if item_name.trim().to_lowercase() == self.stop_word {
                break;
            }

            match self.catalog.find_menu_item(&item_name) {
                Some(item) => {
                    items.push(item.clone());
                    writeln!(self.output, "Added to order: {}", item_name)?;
                }
                None => {
                    writeln!(self.output, "Item {} not found in the menu.", item_name)?;
                }
            }
        }

        if items.is_empty() {
            writeln!(self.output, "No order created: no items were selected.")?;
            return Ok(Flow::Continue);
        }

        let customer = match self.catalog.register_or_get_customer(&name, &phone) {
            Ok(customer) => customer,
            Err(err) => {
                warn!(%err, "order discarded");
                writeln!(self.output, "Error: {}.", err)?;
                return Ok(Flow::Continue);
            }
        };
        let order = self.catalog.create_order(customer, items);
        writeln!(self.output, "Order created for customer ID {}:", order.customer.id)?;
        write!(self.output, "{}", order)?;
        Ok(Flow::Continue)
    }

    fn order_history(&mut self) -> CafeResult<Flow> {
        let Some(input) = self.prompt("Enter customer ID: ")? else {
            return Ok(Flow::Exit);
        };
        let id = match input.trim().parse::<u32>() {
            Ok(id) => CustomerId(id),
            Err(_) => {
                let err = CafeError::InvalidCustomerId(input.trim().to_string());
                warn!(%err, "rejected customer id");
                writeln!(self.output, "Error: {}.", err)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(customer) = self.catalog.customer(id) else {
            writeln!(self.output, "Customer with ID {} not found.", id)?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output)?;
        writeln!(self.output, "--- Order history for customer: {} ---", customer.name)?;
        let history = self.catalog.order_history(id);
        if history.is_empty() {
            writeln!(self.output, "No orders yet.")?;
        }
        for (number, order) in history.iter().enumerate() {
            writeln!(self.output, "#{}", number + 1)?;
            write!(self.output, "{}", order)?;
        }
        Ok(Flow::Continue)
    }

    /// Writes the prompt and reads one line without its line ending.
    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> CafeResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input exhausted");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
