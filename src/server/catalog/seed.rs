//! hand written sample records the mock catalog starts from

use crate::server::model::menu_item::Category;
use crate::server::model::Cents;

pub(crate) struct SeedRestaurant {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub cuisine: &'static [&'static str],
    pub rating: f32,
    pub review_count: u32,
    pub delivery_time: &'static str,
    pub delivery_fee: Cents,
    pub min_order: Cents,
    pub location: &'static str,
    pub is_open: bool,
    pub badges: &'static [&'static str],
    pub description: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub dishes: &'static [SeedDish],
}

pub(crate) struct SeedDish {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub price: Cents,
    pub is_veg: bool,
}

const fn dish(
    name: &'static str,
    description: &'static str,
    category: Category,
    price: Cents,
    is_veg: bool,
) -> SeedDish {
    SeedDish { name, description, category, price, is_veg }
}

use Category::*;

/// cuisines offered as filter tags, not all of them are served yet
pub(crate) const CUISINES: [&str; 9] = [
    "Indian", "Italian", "American", "Healthy", "Japanese", "Mexican", "Chinese", "Thai", "Mediterranean",
];

pub(crate) static RESTAURANTS: [SeedRestaurant; 6] = [
    SeedRestaurant {
        id: "1",
        name: "Spice Kingdom",
        image: "assets/hero-food.jpg",
        cuisine: &["Indian", "Spicy", "Vegetarian"],
        rating: 4.5,
        review_count: 1250,
        delivery_time: "25-35 min",
        delivery_fee: 250,
        min_order: 1500,
        location: "Downtown",
        is_open: true,
        badges: &["Fast Delivery", "High Rated"],
        description: "Authentic Indian cuisine with a modern twist. Experience the rich flavors and aromatic spices.",
        address: "123 Spice Street, Downtown",
        phone: "+1 (555) 123-4567",
        dishes: &[
            dish("Butter Chicken", "Creamy tomato curry with tender chicken", Mains, 1699, false),
            dish("Paneer Tikka", "Grilled cottage cheese with spices", Appetizers, 1299, true),
            dish("Biryani", "Aromatic basmati rice with spices", Mains, 1899, false),
            dish("Dal Makhani", "Rich black lentils in cream", Mains, 1499, true),
            dish("Samosa", "Crispy pastry with spiced filling", Appetizers, 699, true),
            dish("Mango Lassi", "Yogurt-based mango drink", Beverages, 499, true),
            dish("Gulab Jamun", "Sweet milk dumplings in syrup", Desserts, 799, true),
            dish("Tandoori Chicken", "Clay oven roasted chicken", Mains, 1999, false),
        ],
    },
    SeedRestaurant {
        id: "2",
        name: "Bella Pizzeria",
        image: "assets/pizza.jpg",
        cuisine: &["Italian", "Pizza", "Pasta"],
        rating: 4.3,
        review_count: 890,
        delivery_time: "20-30 min",
        delivery_fee: 199,
        min_order: 1200,
        location: "Little Italy",
        is_open: true,
        badges: &["Authentic Italian", "Wood Fired"],
        description: "Traditional Italian pizzas made with fresh ingredients and wood-fired ovens.",
        address: "456 Italy Lane, Little Italy",
        phone: "+1 (555) 234-5678",
        dishes: &[
            dish("Margherita Pizza", "Classic tomato, mozzarella, basil", Pizzas, 1599, true),
            dish("Pepperoni Pizza", "Pepperoni with mozzarella cheese", Pizzas, 1799, false),
            dish("Pasta Carbonara", "Creamy pasta with bacon and eggs", Mains, 1699, false),
            dish("Bruschetta", "Grilled bread with tomatoes", Appetizers, 899, true),
            dish("Tiramisu", "Coffee-flavored Italian dessert", Desserts, 899, true),
            dish("Caprese Salad", "Fresh mozzarella, tomatoes, basil", Salads, 1299, true),
            dish("Italian Soda", "Sparkling flavored water", Beverages, 399, true),
            dish("Quattro Stagioni", "Four seasons pizza with varied toppings", Pizzas, 1999, false),
        ],
    },
    SeedRestaurant {
        id: "3",
        name: "Burger Junction",
        image: "assets/burger.jpg",
        cuisine: &["American", "Burgers", "Fast Food"],
        rating: 4.1,
        review_count: 2100,
        delivery_time: "15-25 min",
        delivery_fee: 299,
        min_order: 1000,
        location: "Food Street",
        is_open: true,
        badges: &["Quick Bites", "Popular"],
        description: "Juicy burgers made with premium beef and fresh ingredients. Classic American taste.",
        address: "789 Burger Blvd, Food Street",
        phone: "+1 (555) 345-6789",
        dishes: &[
            dish("Classic Beef Burger", "Juicy beef patty with lettuce and tomato", Mains, 1299, false),
            dish("Chicken Wings", "Spicy buffalo wings with ranch", Appetizers, 1099, false),
            dish("Veggie Burger", "Plant-based patty with avocado", Mains, 1199, true),
            dish("Loaded Fries", "Fries with cheese, bacon, jalapeños", Appetizers, 899, false),
            dish("Milkshake", "Creamy vanilla milkshake", Beverages, 599, true),
            dish("Onion Rings", "Crispy battered onion rings", Appetizers, 699, true),
            dish("Apple Pie", "Classic American apple pie", Desserts, 699, true),
            dish("BBQ Bacon Burger", "Beef patty with BBQ sauce and bacon", Mains, 1499, false),
        ],
    },
    SeedRestaurant {
        id: "4",
        name: "Fresh Garden",
        image: "assets/salad.jpg",
        cuisine: &["Healthy", "Salads", "Vegan"],
        rating: 4.7,
        review_count: 560,
        delivery_time: "20-30 min",
        delivery_fee: 150,
        min_order: 800,
        location: "Green Valley",
        is_open: true,
        badges: &["Healthy Choice", "Organic"],
        description: "Fresh, organic salads and healthy bowls. Perfect for health-conscious food lovers.",
        address: "321 Garden Way, Green Valley",
        phone: "+1 (555) 456-7890",
        dishes: &[
            dish("Caesar Salad", "Crisp romaine with caesar dressing", Salads, 1199, true),
            dish("Quinoa Bowl", "Nutritious quinoa with vegetables", Mains, 1399, true),
            dish("Green Smoothie", "Spinach, banana, apple smoothie", Beverages, 699, true),
            dish("Avocado Toast", "Whole grain bread with avocado", Appetizers, 999, true),
            dish("Grilled Chicken Salad", "Mixed greens with grilled chicken", Salads, 1499, false),
            dish("Fruit Bowl", "Fresh seasonal fruits", Desserts, 799, true),
            dish("Kombucha", "Fermented tea beverage", Beverages, 499, true),
            dish("Buddha Bowl", "Mixed grains, vegetables, and protein", Mains, 1599, true),
        ],
    },
    SeedRestaurant {
        id: "5",
        name: "Tokyo Sushi Bar",
        image: "assets/sushi.jpg",
        cuisine: &["Japanese", "Sushi", "Seafood"],
        rating: 4.6,
        review_count: 780,
        delivery_time: "30-40 min",
        delivery_fee: 350,
        min_order: 2000,
        location: "Asia Town",
        is_open: false,
        badges: &["Premium", "Fresh Seafood"],
        description: "Authentic Japanese sushi made by master chefs. Fresh fish flown in daily.",
        address: "654 Sushi Street, Asia Town",
        phone: "+1 (555) 567-8901",
        dishes: &[
            dish("California Roll", "Crab, avocado, cucumber roll", Mains, 1299, false),
            dish("Salmon Sashimi", "Fresh raw salmon slices", Appetizers, 1599, false),
            dish("Chicken Teriyaki", "Grilled chicken with teriyaki sauce", Mains, 1799, false),
            dish("Miso Soup", "Traditional soybean soup", Appetizers, 499, true),
            dish("Sake", "Traditional Japanese rice wine", Beverages, 899, true),
            dish("Green Tea Ice Cream", "Matcha flavored ice cream", Desserts, 699, true),
            dish("Tempura", "Lightly battered and fried vegetables", Appetizers, 1199, true),
            dish("Dragon Roll", "Eel and cucumber topped with avocado", Mains, 1899, false),
        ],
    },
    SeedRestaurant {
        id: "6",
        name: "Taco Fiesta",
        image: "assets/tacos.jpg",
        cuisine: &["Mexican", "Tacos", "Spicy"],
        rating: 4.2,
        review_count: 1320,
        delivery_time: "20-30 min",
        delivery_fee: 200,
        min_order: 1200,
        location: "Sunset Strip",
        is_open: true,
        badges: &["Spicy", "Authentic Mexican"],
        description: "Vibrant Mexican flavors with authentic tacos, burritos, and more.",
        address: "987 Fiesta Ave, Sunset Strip",
        phone: "+1 (555) 678-9012",
        dishes: &[
            dish("Beef Tacos", "Seasoned ground beef in corn tortillas", Mains, 1199, false),
            dish("Guacamole & Chips", "Fresh avocado dip with tortilla chips", Appetizers, 799, true),
            dish("Chicken Burrito", "Grilled chicken with rice and beans", Mains, 1399, false),
            dish("Quesadilla", "Cheese-filled grilled tortilla", Appetizers, 999, true),
            dish("Margarita", "Classic lime margarita", Beverages, 899, true),
            dish("Churros", "Fried dough with cinnamon sugar", Desserts, 699, true),
            dish("Nachos Supreme", "Tortilla chips with cheese and toppings", Appetizers, 1299, false),
            dish("Fish Tacos", "Grilled fish with cabbage slaw", Mains, 1499, false),
        ],
    },
];
