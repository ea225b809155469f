use std::fmt;
use uuid::Uuid;

use crate::customer::Customer;
use crate::menu::MenuItem;

#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: String,
    pub customer: Customer,
    pub items: Vec<MenuItem>,
}

impl Order {
    /// Creates an order for the given customer.
    ///
    /// # Arguments
    /// * `customer` - The customer placing the order
    /// * `items` - Ordered items; the same item may appear more than once
    ///
    /// # Returns
    /// * `Self` - A new Order with a fresh id
    pub fn new(customer: Customer, items: Vec<MenuItem>) -> Self {
        Self {
            order_id: Uuid::new_v4().to_string(),
            customer,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Order for customer: {}", self.customer.name)?;
        writeln!(f, "Items:")?;
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerId;

    #[test]
    fn test_order_display_lists_items_in_order() {
        let customer = Customer::new(CustomerId(1), "Alice", "555-0100");
        let coffee = MenuItem::new("Coffee", 2.5, "Drinks");
        let cake = MenuItem::new("Cake", 3.0, "Desserts");
        let order = Order::new(customer, vec![coffee.clone(), cake, coffee]);

        let rendered = order.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Order for customer: Alice");
        assert_eq!(lines[1], "Items:");
        assert_eq!(lines[2], "Name: Coffee, Price: 2.50, Category: Drinks");
        assert_eq!(lines[3], "Name: Cake, Price: 3.00, Category: Desserts");
        assert_eq!(lines[4], "Name: Coffee, Price: 2.50, Category: Drinks");
    }

    #[test]
    fn test_empty_order_is_valid() {
        let customer = Customer::new(CustomerId(7), "Bob", "555-0199");
        let order = Order::new(customer, Vec::new());
        assert!(order.is_empty());
        assert_eq!(order.to_string(), "Order for customer: Bob\nItems:\n");
    }
}
