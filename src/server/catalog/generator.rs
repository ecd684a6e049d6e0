//! random mock catalog synthesis

use rand::seq::SliceRandom;
use rand::Rng;
use crate::server::catalog::seed::SeedRestaurant;
use crate::server::model::menu_item::{Category, MenuItem};
use crate::server::model::restaurant::Restaurant;
use crate::server::model::Cents;

/// lower and upper (exclusive) bound of items per restaurant
const MENU_SIZE_RANGE: (usize, usize) = (80, 100);
const FILLER_BASE_PRICE: Cents = 899;
/// filler prices spread up to this many cents above the base
const FILLER_PRICE_SPREAD: f64 = 1500.0;

pub(crate) fn restaurant(seed: &SeedRestaurant) -> Restaurant {
    let to_strings = |s: &[&str]| -> Vec<String> { s.iter().map(|s| s.to_string()).collect() };
    Restaurant {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        image: seed.image.to_string(),
        cuisine: to_strings(seed.cuisine),
        rating: seed.rating,
        review_count: seed.review_count,
        delivery_time: seed.delivery_time.to_string(),
        delivery_fee: seed.delivery_fee,
        min_order: seed.min_order,
        location: seed.location.to_string(),
        is_open: seed.is_open,
        badges: to_strings(seed.badges),
        description: seed.description.to_string(),
        address: seed.address.to_string(),
        phone: seed.phone.to_string(),
    }
}

/// Build a menu: the hand written dishes first, then numbered house
/// specials until the menu reaches a random size.
pub(crate) fn menu<R: Rng>(seed: &SeedRestaurant, rng: &mut R) -> Vec<MenuItem> {
    let target = rng.gen_range(MENU_SIZE_RANGE.0..MENU_SIZE_RANGE.1);
    let mut items = Vec::with_capacity(target);

    for (idx, dish) in seed.dishes.iter().enumerate() {
        items.push(MenuItem {
            id: format!("{}-{}", seed.id, idx + 1),
            name: dish.name.to_string(),
            description: dish.description.to_string(),
            price: dish.price,
            image: image_for(dish.category, dish.name, seed.id).to_string(),
            category: dish.category,
            is_veg: dish.is_veg,
            is_spicy: rng.gen::<f64>() > 0.7,
            rating: rating(rng),
            badges: if rng.gen::<f64>() > 0.6 {
                vec!["Popular".to_string()]
            } else {
                vec![]
            },
            restaurant_id: seed.id.to_string(),
        });
    }

    for n in (seed.dishes.len() + 1)..=target {
        let category = *Category::ALL
            .choose(rng)
            .unwrap_or(&Category::Mains);
        let price = FILLER_BASE_PRICE + (rng.gen::<f64>() * FILLER_PRICE_SPREAD).round() as Cents;
        let badges = if rng.gen::<f64>() > 0.7 {
            ["Chef's Special", "New"]
                .into_iter()
                .filter(|_| rng.gen::<f64>() > 0.5)
                .map(str::to_string)
                .collect()
        } else {
            vec![]
        };
        items.push(MenuItem {
            id: format!("{}-{}", seed.id, n),
            name: format!("{} Special {}", seed.name, n),
            description: format!(
                "Delicious {category} item made with premium ingredients and our special recipe."
            ),
            price,
            image: category_image(category, seed.id).to_string(),
            category,
            is_veg: rng.gen::<f64>() > 0.6,
            is_spicy: rng.gen::<f64>() > 0.7,
            rating: rating(rng),
            badges,
            restaurant_id: seed.id.to_string(),
        });
    }
    items
}

/// 3.5 to 5.0, one decimal
fn rating<R: Rng>(rng: &mut R) -> f32 {
    let raw = 3.5 + rng.gen::<f32>() * 1.5;
    ((raw * 10.0).round() / 10.0).min(5.0)
}

/// Pick a picture by keywords in the dish name, falling back to the category.
pub(crate) fn image_for(category: Category, name: &str, restaurant_id: &str) -> &'static str {
    let name = name.to_lowercase();
    let any = |words: &[&str]| words.iter().any(|w| name.contains(w));

    if any(&["pizza"]) {
        "assets/pizza.jpg"
    } else if any(&["burger"]) {
        "assets/burger.jpg"
    } else if any(&["salad"]) {
        "assets/salad.jpg"
    } else if any(&["curry", "chicken", "biryani", "dal"]) {
        "assets/curry.jpg"
    } else if any(&["sushi", "sashimi", "roll", "tempura"]) {
        "assets/sushi.jpg"
    } else if any(&["taco", "burrito", "quesadilla", "nachos"]) {
        "assets/tacos.jpg"
    } else if any(&["pasta", "carbonara", "spaghetti"]) {
        "assets/pasta.jpg"
    } else {
        category_image(category, restaurant_id)
    }
}

fn category_image(category: Category, restaurant_id: &str) -> &'static str {
    match category {
        Category::Pizzas => "assets/pizza.jpg",
        Category::Salads => "assets/salad.jpg",
        Category::Appetizers => "assets/appetizers.jpg",
        Category::Desserts => "assets/desserts.jpg",
        Category::Beverages => "assets/beverages.jpg",
        Category::Mains => match restaurant_id {
            "1" => "assets/curry.jpg",
            "2" => "assets/pasta.jpg",
            "5" => "assets/sushi.jpg",
            "6" => "assets/tacos.jpg",
            _ => "assets/burger.jpg",
        },
    }
}
