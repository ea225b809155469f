//! Cafe Manager
//!
//! An in-memory management tool for a small cafe: it keeps the menu, registers
//! customers and records the orders they place, driven from a text console.
//!
//! # Architecture
//!
//! ## Core Components
//!
//! * `menu` - Menu items, price parsing and the optional JSON menu file
//! * `customer` - Customer records and ids
//! * `order` - Orders: one customer plus the items they ordered
//! * `catalog` - The stateful service owning menu, customers and order history
//! * `console` - Numbered text menu reading stdin and writing stdout
//! * `config` - Environment configuration
//! * `error` - Error type shared by the crate
//!
//! ## Design
//!
//! ### Catalog (`catalog.rs`)
//! - Single owner of all mutable state, single-threaded
//! - Menu items keep insertion order and carry a stable id, so duplicate
//!   names can still be addressed individually
//! - One customer id space; ids are allocated by the catalog
//! - Every created order is appended to the customer's history
//! - "Not found" is reported through return values, never errors
//!
//! ### Console (`console.rs`)
//! - Generic over `BufRead`/`Write`, so tests run it on in-memory buffers
//! - Bad prices, choices and ids are reported and the loop keeps going
//! - End of input ends the session like the Exit action
//!
//! # Environment Configuration
//!
//! ```bash
//! MENU_FILE=static/menu.json    # Optional starting menu
//! CAFE_STOP_WORD=stop           # Ends item entry while building an order
//! RUST_LOG=warn                 # Logging filter, logs go to stderr
//! ```
//!
//! The menu file has the shape:
//!
//! ```json
//! {
//!   "items": [
//!     { "itemName": "Coffee", "price": 2.5, "category": "Drinks" }
//!   ]
//! }
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use cafe_manager::catalog::CafeCatalog;
//! use cafe_manager::menu::MenuItem;
//!
//! let mut catalog = CafeCatalog::new();
//! catalog.add_menu_item(MenuItem::new("Coffee", 2.5, "Drinks"));
//!
//! let alice = catalog.register_or_get_customer("Alice", "555-0100").unwrap();
//! let coffee = catalog.find_menu_item("coffee").unwrap().clone();
//! let order = catalog.create_order(alice.clone(), vec![coffee]);
//!
//! assert_eq!(order.items.len(), 1);
//! assert_eq!(catalog.order_history(alice.id).len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod console;
pub mod customer;
pub mod error;
pub mod menu;
pub mod order;
