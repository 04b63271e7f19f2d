//! # Shell
//!
//! The interactive loop: one line of input is one UI event.
//!
//! ## Event Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shell Loop                                       │
//! │                                                                         │
//! │  readline ──► dispatch ──► command handler ──► rendered output          │
//! │     ▲                           │                                       │
//! │     │                           │ (network calls awaited inline,        │
//! │     │                           │  one at a time - no concurrent        │
//! │     │                           │  writers, last response wins)         │
//! │     └───────────────────────────┘                                       │
//! │                                                                         │
//! │  Errors are printed and the loop continues. Only `quit`, `exit`,        │
//! │  or EOF end the session.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use shopfront_api::Client;
use shopfront_core::Cart;

use crate::commands;
use crate::config::StoreConfig;
use crate::state::{Catalog, Session};

/// Name of the history file inside the data directory.
const HISTORY_FILE: &str = "history.txt";

/// What a dispatched command tells the loop to do next.
enum Flow {
    Output(String),
    Quit,
}

/// The interactive storefront shell.
pub struct Shell {
    config: StoreConfig,
    client: Client,
    session: Session,
    catalog: Catalog,
    cart: Cart,
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl Shell {
    pub fn new(
        config: StoreConfig,
        client: Client,
        session: Session,
        data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        let history_path = data_dir.map(|dir| dir.join(HISTORY_FILE));
        if let Some(path) = &history_path {
            // Missing on first run; anything else is not worth failing for.
            let _ = editor.load_history(path);
        }

        Ok(Shell {
            config,
            client,
            session,
            catalog: Catalog::new(),
            cart: Cart::new(),
            editor,
            history_path,
        })
    }

    /// Runs the loop until `quit`/`exit` or EOF.
    pub async fn run(mut self) -> Result<()> {
        println!("Shopfront - type `help` for commands.");
        if self.session.is_logged_in() {
            println!("(restored session: you are logged in)");
        }

        loop {
            match self.editor.readline("shopfront> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);

                    match self.dispatch(&line).await {
                        Ok(Flow::Output(output)) => println!("{}", output),
                        Ok(Flow::Quit) => break,
                        // Recoverable by definition: print and keep going.
                        Err(e) => println!("error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.save_history();
        println!("Bye!");
        Ok(())
    }

    async fn dispatch(&mut self, line: &str) -> Result<Flow> {
        debug!(%line, "dispatch");
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let output = match command {
            "help" => help(),

            "browse" => {
                let page = match args.first().map(|s| s.parse::<u32>()).transpose() {
                    Ok(page) => page,
                    Err(_) => return usage("browse [page]"),
                };
                commands::browse::browse(&self.config, &self.client, &mut self.catalog, page)
                    .await?
            }

            "more" => {
                commands::browse::more(&self.config, &self.client, &mut self.catalog).await?
            }

            "search" => {
                if args.is_empty() {
                    return usage("search <text>");
                }
                commands::browse::search(&self.config, &self.catalog, &args.join(" "))
            }

            "category" => {
                if args.is_empty() {
                    return usage("category <name>");
                }
                commands::browse::category(
                    &self.config,
                    &self.client,
                    &mut self.catalog,
                    &args.join(" "),
                )
                .await?
            }

            "show" => {
                let Some(id) = args.first() else {
                    return usage("show <id>");
                };
                commands::browse::show(&self.config, &self.client, &mut self.catalog, id).await?
            }

            "cart" => return self.dispatch_cart(&args).await,

            "checkout" => match commands::checkout::parse_method(args.first().copied()) {
                Ok(method) => commands::checkout::checkout(
                    &self.config,
                    &mut self.cart,
                    &mut self.session,
                    method,
                ),
                Err(message) => message,
            },

            "signup" => commands::auth::sign_up(&self.client, &mut self.editor).await?,

            "login" => {
                let (Some(username), Some(password)) = (args.first(), args.get(1)) else {
                    return usage("login <username> <password>");
                };
                commands::auth::login(&self.client, &mut self.session, username, password).await?
            }

            "logout" => commands::auth::logout(&mut self.session),

            "account" => commands::account::account(&self.config, &self.session),

            "quit" | "exit" => return Ok(Flow::Quit),

            unknown => format!("Unknown command \"{}\". Type `help`.", unknown),
        };

        Ok(Flow::Output(output))
    }

    async fn dispatch_cart(&mut self, args: &[&str]) -> Result<Flow> {
        let output = match args {
            [] => commands::cart::show(&self.config, &self.cart),

            ["add", id, rest @ ..] => {
                let quantity = match rest.first().map(|s| s.parse::<i64>()).transpose() {
                    Ok(quantity) => quantity.unwrap_or(1),
                    Err(_) => return usage("cart add <id> [qty]"),
                };
                commands::cart::add(
                    &self.config,
                    &self.client,
                    &mut self.catalog,
                    &mut self.cart,
                    id,
                    quantity,
                )
                .await?
            }

            ["rm", id] => commands::cart::remove(&mut self.cart, id)?,
            ["+", id] => commands::cart::adjust(&mut self.cart, id, 1)?,
            ["-", id] => commands::cart::adjust(&mut self.cart, id, -1)?,
            ["toggle", id] => commands::cart::toggle(&mut self.cart, id)?,
            ["all"] => commands::cart::toggle_all(&mut self.cart),

            _ => {
                return usage("cart [add <id> [qty] | rm <id> | + <id> | - <id> | toggle <id> | all]")
            }
        };

        Ok(Flow::Output(output))
    }

    fn save_history(&mut self) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = self.editor.save_history(path);
    }
}

fn usage(text: &str) -> Result<Flow> {
    Ok(Flow::Output(format!("Usage: {}", text)))
}

fn help() -> String {
    "Commands:
  browse [page]          fetch a catalog page
  more                   fetch the next page and append it
  search <text>          filter the fetched catalog by name
  category <name>        list the catalog filtered by category
  show <id>              product detail plus related products
  cart                   show the cart
  cart add <id> [qty]    add a product (price frozen at add time)
  cart + <id>            increase quantity
  cart - <id>            decrease quantity (never below 1)
  cart toggle <id>       flip a line's checkbox
  cart all               select all / clear selection
  cart rm <id>           remove a line
  checkout [cod|card]    place an order for the selected lines
  signup                 create an account
  login <user> <pass>    log in
  logout                 log out
  account                profile and purchase history
  quit                   leave the shell"
        .to_string()
}
