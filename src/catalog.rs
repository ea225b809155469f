use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::customer::{Customer, CustomerId};
use crate::error::{CafeError, CafeResult};
use crate::menu::{MenuFile, MenuItem, MenuItemId};
use crate::order::Order;

/// Owns the menu, the customer registry and every customer's order history.
#[derive(Debug, Clone)]
pub struct CafeCatalog {
    menu_items: Vec<MenuItem>,
    customers: BTreeMap<CustomerId, Customer>,
    orders: BTreeMap<CustomerId, Vec<Order>>,
    next_customer_id: u32,
}

impl Default for CafeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CafeCatalog {
    pub fn new() -> Self {
        Self {
            menu_items: Vec::new(),
            customers: BTreeMap::new(),
            orders: BTreeMap::new(),
            next_customer_id: 1,
        }
    }

    /// Appends every entry of the menu file, in file order.
    pub fn seed(&mut self, menu: MenuFile) {
        for entry in menu.items {
            self.add_menu_item(entry.into());
        }
    }

    /// Appends an item to the menu. Duplicate names are allowed.
    ///
    /// # Returns
    /// * `MenuItemId` - The id of the stored item
    pub fn add_menu_item(&mut self, item: MenuItem) -> MenuItemId {
        let id = item.id;
        info!(item = %item.name, %id, "added menu item");
        self.menu_items.push(item);
        id
    }

    /// Removes every item whose name equals `name` exactly (case-sensitive).
    ///
    /// # Returns
    /// * `bool` - Whether at least one item was removed
    pub fn remove_menu_item(&mut self, name: &str) -> bool {
        let before = self.menu_items.len();
        self.menu_items.retain(|item| item.name != name);
        let removed = before - self.menu_items.len();
        if removed > 0 {
            info!(item = name, removed, "removed menu item");
        } else {
            debug!(item = name, "no menu item to remove");
        }
        removed > 0
    }

    pub fn remove_menu_item_by_id(&mut self, id: MenuItemId) -> Option<MenuItem> {
        let index = self.menu_items.iter().position(|item| item.id == id)?;
        let item = self.menu_items.remove(index);
        info!(item = %item.name, %id, "removed menu item");
        Some(item)
    }

    pub fn list_menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn menu_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == id)
    }

    /// Case-insensitive exact name match; the first matching item wins.
    pub fn find_menu_item(&self, name: &str) -> Option<&MenuItem> {
        let needle = name.to_lowercase();
        let found = self
            .menu_items
            .iter()
            .find(|item| item.name.to_lowercase() == needle);
        debug!(item = name, found = found.is_some(), "menu lookup");
        found
    }

    /// Returns the customer registered under this name and phone, registering
    /// a new one with the next free id if there is none.
    ///
    /// # Returns
    /// * `CafeResult<Customer>` - The customer, or an error once every id is taken
    pub fn register_or_get_customer(&mut self, name: &str, phone: &str) -> CafeResult<Customer> {
        if let Some(existing) = self
            .customers
            .values()
            .find(|customer| customer.name == name && customer.phone == phone)
        {
            return Ok(existing.clone());
        }

        let id = self
            .next_free_customer_id()
            .ok_or(CafeError::CustomerIdsExhausted)?;
        let customer = Customer::new(id, name, phone);
        self.register(customer.clone());
        Ok(customer)
    }

    /// Registers the customer if its id has not been seen (first write wins),
    /// records the order in that customer's history and returns it. Items are
    /// not checked against the menu and may be empty.
    pub fn create_order(&mut self, customer: Customer, items: Vec<MenuItem>) -> Order {
        if !self.customers.contains_key(&customer.id) {
            self.register(customer.clone());
        }

        let order = Order::new(customer, items);
        info!(
            order_id = %order.order_id,
            customer = %order.customer.id,
            items = order.items.len(),
            "created order"
        );
        self.orders
            .entry(order.customer.id)
            .or_default()
            .push(order.clone());
        order
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// All registered customers, ordered by id.
    pub fn list_customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    /// Orders placed by a customer, oldest first.
    pub fn order_history(&self, id: CustomerId) -> &[Order] {
        self.orders.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    // Counter first, then wrap around to the low ids it skipped
    fn next_free_customer_id(&self) -> Option<CustomerId> {
        (self.next_customer_id..=u32::MAX)
            .chain(1..self.next_customer_id)
            .map(CustomerId)
            .find(|id| !self.customers.contains_key(id))
    }

    /// Stores the customer unless its id is already taken.
    fn register(&mut self, customer: Customer) {
        if customer.id.0 >= self.next_customer_id {
            self.next_customer_id = customer.id.0.saturating_add(1);
        }
        match self.customers.entry(customer.id) {
            Entry::Vacant(slot) => {
                info!(customer = %customer, "registered customer");
                slot.insert(customer);
            }
            Entry::Occupied(_) => {
                debug!(customer = %customer.id, "customer already registered");
            }
        }
    }
}
