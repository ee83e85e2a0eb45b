use crate::models::{Ingredient, MenuItem};

/// Built-in sample restaurant menu.
///
/// Used when no catalog file is present and by `sample` to seed one.
pub fn sample_catalog() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", "Plain Dosa", "₹60")
            .with_description("Crisp rice and lentil crepe served with chutney and sambar")
            .with_category("Dosa")
            .with_image("/dosa.png")
            .with_ingredients(vec![
                Ingredient::new("Dosa Batter", "120g", 210),
                Ingredient::new("Oil", "10ml", 120),
                Ingredient::new("Coconut Chutney", "40g", 90),
                Ingredient::new("Curry Leaves", "2g", 0),
            ]),
        MenuItem::new("2", "Masala Dosa", "₹80")
            .with_description("Dosa filled with spiced potato masala")
            .with_category("Dosa")
            .with_image("/masala-dosa.png")
            .with_ingredients(vec![
                Ingredient::new("Dosa Batter", "120g", 210),
                Ingredient::new("Potato Masala", "100g", 150),
                Ingredient::new("Oil", "10ml", 120),
                Ingredient::new("Sambar", "80ml", 60),
            ]),
        MenuItem::new("3", "Margherita Pizza", "$12")
            .with_description("Tomato, fresh mozzarella, basil, olive oil")
            .with_category("Pizzas")
            .with_image("/file.svg")
            .with_ingredients(vec![
                Ingredient::new("Dough", "200g", 500),
                Ingredient::new("Mozzarella", "80g", 250),
                Ingredient::new("Tomato Sauce", "60g", 40),
                Ingredient::new("Basil", "5g", 1),
            ]),
        MenuItem::new("4", "Spicy Arrabbiata Pasta", "$10")
            .with_description("Penne with spicy tomato sauce and parmesan")
            .with_category("Pasta")
            .with_image("/globe.svg")
            .with_ingredients(vec![
                Ingredient::new("Penne", "180g", 350),
                Ingredient::new("Tomato Sauce", "100g", 60),
                Ingredient::new("Parmesan", "20g", 80),
            ]),
        MenuItem::new("5", "Caesar Salad", "$8")
            .with_description("Romaine, croutons, parmesan, Caesar dressing")
            .with_category("Salads")
            .with_image("/file.svg")
            .with_ingredients(vec![
                Ingredient::new("Romaine", "120g", 20),
                Ingredient::new("Croutons", "30g", 120),
                Ingredient::new("Dressing", "30g", 180),
            ]),
        MenuItem::new("6", "Chai", "₹30")
            .with_description("Spiced milk tea")
            .with_category("Beverages")
            .with_ingredients(vec![
                Ingredient::new("Tea Leaves", "3g", 10),
                Ingredient::new("Milk", "100ml", 65),
                Ingredient::new("Sugar", "8g", 32),
                Ingredient::new("Ginger", "5g", 5),
            ]),
        MenuItem::new("7", "Filter Coffee", "₹40")
            .with_description("South Indian drip coffee with frothed milk")
            .with_category("Beverages")
            .with_calories(110),
        MenuItem::new("8", "Tiramisu", "$6")
            .with_description("Classic Italian dessert with mascarpone")
            .with_category("Desserts")
            .with_image("/next.svg")
            .with_ingredients(vec![
                Ingredient::new("Mascarpone", "80g", 300),
                Ingredient::new("Ladyfingers", "50g", 200),
                Ingredient::new("Coffee", "30ml", 5),
            ]),
        MenuItem::new("9", "Chef's Special", "Market price")
            .with_description("Ask your server about today's special"),
    ]
}
