//! The house catalog that seeds the cart.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Menu sections, as the storefront tabs and the order records name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Coffee,
    Pasta,
    Burgers,
    Sandwiches,
    Salad,
    Fries,
    Platters,
}

impl MenuCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuCategory::Coffee => "coffee",
            MenuCategory::Pasta => "pasta",
            MenuCategory::Burgers => "burgers",
            MenuCategory::Sandwiches => "sandwiches",
            MenuCategory::Salad => "salad",
            MenuCategory::Fries => "fries",
            MenuCategory::Platters => "platters",
        }
    }
}

impl Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dish or drink on the menu.
///
/// Only built through [`MenuItem::new`], so every item has a name and a non-negative price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    name: String,
    price: Decimal,
    description: String,
    image_ref: String,
    category: MenuCategory,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        image_ref: impl Into<String>,
        category: MenuCategory,
    ) -> Result<Self, MenuError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenuError::EmptyName);
        }
        if price < Decimal::ZERO {
            return Err(MenuError::NegativePrice { name, price });
        }
        Ok(Self {
            name,
            price,
            description: description.into(),
            image_ref: image_ref.into(),
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn category(&self) -> MenuCategory {
        self.category
    }
}

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Two entries share a display name; the cart would merge them.
    #[error("Duplicate menu item: {0}")]
    DuplicateName(String),

    #[error("Negative price for {name}: {price}")]
    NegativePrice { name: String, price: Decimal },

    #[error("Menu item name must not be empty")]
    EmptyName,
}

/// A validated catalog: unique names, non-negative prices, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

const PEXELS: &str = "https://images.pexels.com/photos";

// name, price (Tk), description, pexels photo id, category
const HOUSE_MENU: &[(&str, i64, &str, u32, MenuCategory)] = &[
    ("Espresso", 250, "Rich, bold, and perfectly extracted", 312418, MenuCategory::Coffee),
    ("Cappuccino", 320, "Velvety foam meets intense espresso", 1549196, MenuCategory::Coffee),
    ("Latte", 350, "Smooth espresso with steamed milk", 1251175, MenuCategory::Coffee),
    ("Cold Brew", 380, "Smooth and refreshing, steeped for 24 hours", 1755785, MenuCategory::Coffee),
    ("Pour Over", 420, "Hand-crafted single origin perfection", 3879495, MenuCategory::Coffee),
    ("Flat White", 360, "Australian classic with microfoam", 1458695, MenuCategory::Coffee),
    ("Carbonara", 650, "Creamy, authentic Italian pasta", 1279330, MenuCategory::Pasta),
    ("Aglio e Olio", 550, "Garlic, olive oil, and chili flakes", 1438672, MenuCategory::Pasta),
    ("Pesto Penne", 600, "Fresh basil pesto with pine nuts", 1279330, MenuCategory::Pasta),
    ("Arrabbiata", 580, "Spicy tomato sauce perfection", 1527603, MenuCategory::Pasta),
    ("Charcuterie Board", 850, "Artisan cheeses and cured meats", 1639562, MenuCategory::Platters),
    ("Veggie Platter", 700, "Fresh vegetables with hummus", 1640777, MenuCategory::Platters),
    ("Breakfast Platter", 750, "Eggs, bacon, toast, and sides", 103124, MenuCategory::Platters),
    ("Caesar Salad", 480, "Classic with house-made dressing", 2097090, MenuCategory::Salad),
    ("Greek Salad", 500, "Feta, olives, and fresh vegetables", 1059905, MenuCategory::Salad),
    ("Quinoa Bowl", 550, "Superfood salad with tahini dressing", 1640777, MenuCategory::Salad),
    ("Classic Fries", 250, "Crispy golden perfection", 1583884, MenuCategory::Fries),
    ("Sweet Potato Fries", 300, "With chipotle mayo", 1702373, MenuCategory::Fries),
    ("Loaded Fries", 400, "Cheese, bacon, and sour cream", 2062665, MenuCategory::Fries),
    ("Slash Burger", 680, "Our signature beef burger", 1639557, MenuCategory::Burgers),
    ("Chicken Burger", 620, "Grilled chicken with special sauce", 1639565, MenuCategory::Burgers),
];

impl Menu {
    /// Builds a catalog, rejecting repeated names.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(MenuError::DuplicateName(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The café's own menu.
    pub fn house() -> Self {
        let items = HOUSE_MENU
            .iter()
            .map(|&(name, price, description, photo, category)| MenuItem {
                name: name.to_string(),
                price: Decimal::from(price),
                description: description.to_string(),
                image_ref: format!("{PEXELS}/{photo}/pexels-photo-{photo}.jpeg"),
                category,
            })
            .collect();
        // The table above is unique and non-negative; no validation pass needed.
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn in_category(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(move |item| item.category == category)
    }
}
