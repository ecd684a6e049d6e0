use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

/// Storefront command line client
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "client cli used to browse restaurants and place orders against the server", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = HOST, help = "Base url of the server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// restaurant related ops
    #[command(arg_required_else_help = true)]
    Restaurants(RestaurantArgs),
    /// menu of one restaurant
    #[command(arg_required_else_help = true)]
    Menu {
        id: String,
        #[arg(long, help = "Category tab, e.g. mains. Defaults to all.")]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// cart related ops
    #[command(arg_required_else_help = true)]
    Cart(CartArgs),
    /// place an order with the content of a cart
    #[command(arg_required_else_help = true)]
    Checkout {
        #[arg(short = 'c', help = "Cart id to check out")]
        cart: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// orders placed since the server started
    Orders,
}

#[derive(Debug, Args)]
struct RestaurantArgs {
    #[command(subcommand)]
    command: RestaurantCmds,
}

#[derive(Debug, Subcommand)]
enum RestaurantCmds {
    /// filter and sort restaurants
    List(ListArgs),
    #[command(arg_required_else_help = true)]
    Show { id: String },
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, help = "Cuisines to match, any of them.", value_delimiter = ',', num_args = 1..)]
    cuisines: Vec<String>,
    #[arg(long)]
    min_rating: Option<f32>,
    #[arg(long, help = "Delivery fee floor, in cents.")]
    min_fee: Option<u64>,
    #[arg(long, help = "Delivery fee ceiling, in cents.")]
    max_fee: Option<u64>,
    #[arg(long, value_parser = ["all", "fast", "medium", "slow"])]
    delivery_time: Option<String>,
    #[arg(long, value_parser = ["rating", "deliveryTime", "deliveryFee", "minOrder"])]
    sort_by: Option<String>,
}

#[derive(Debug, Args)]
struct CartArgs {
    #[command(subcommand)]
    command: CartCmds,
}

#[derive(Debug, Subcommand)]
enum CartCmds {
    /// open a new cart
    Create,
    #[command(arg_required_else_help = true)]
    Show { cart: u64 },
    #[command(arg_required_else_help = true)]
    Add {
        cart: u64,
        #[arg(help = "Menu item id, e.g. 1-3", value_name = "MENU_ITEM_ID")]
        item: String,
        #[arg(short = 'q', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    #[command(arg_required_else_help = true)]
    Update {
        cart: u64,
        #[arg(value_name = "MENU_ITEM_ID")]
        item: String,
        #[arg(help = "New quantity, 0 removes the item")]
        quantity: u32,
    },
    #[command(arg_required_else_help = true)]
    Remove {
        cart: u64,
        #[arg(value_name = "MENU_ITEM_ID")]
        item: String,
    },
    #[command(arg_required_else_help = true)]
    Clear { cart: u64 },
}

const HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct Restaurant {
    id: String,
    name: String,
    cuisine: Vec<String>,
    rating: f32,
    delivery_time: String,
    delivery_fee: u64,
    is_open: bool,
}

#[derive(Debug, Deserialize)]
struct RestaurantsResponse {
    total: usize,
    restaurants: Vec<Restaurant>,
}

#[derive(Debug, Deserialize)]
struct MenuItem {
    id: String,
    name: String,
    price: u64,
    category: String,
}

#[derive(Debug, Deserialize)]
struct MenuResponse {
    total: usize,
    items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
struct Totals {
    subtotal: u64,
    tax: u64,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct CartLine {
    id: String,
    name: String,
    quantity: u32,
    restaurant_name: String,
    line_total: u64,
}

#[derive(Debug, Deserialize)]
struct CartView {
    cart_id: u64,
    items: Vec<CartLine>,
    item_count: u32,
    totals: Totals,
}

#[derive(Debug, Deserialize)]
struct Notice {
    title: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct CartMutation {
    cart: CartView,
    notice: Option<Notice>,
}

#[derive(Debug, Deserialize)]
struct CreatedCart {
    cart_id: u64,
}

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    order: Value,
    notice: Notice,
}

fn price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn print_notice(notice: &Notice) {
    println!("[{}] {}", notice.title, notice.description);
}

fn print_cart(cart: &CartView) {
    println!("cart {} ({} items)", cart.cart_id, cart.item_count);
    for line in &cart.items {
        println!(
            "  {:>3} x {:<32} {:<24} {:>9}   [{}]",
            line.quantity,
            line.name,
            line.restaurant_name,
            price(line.line_total),
            line.id
        );
    }
    println!("  subtotal {:>9}", price(cart.totals.subtotal));
    println!("  tax      {:>9}", price(cart.totals.tax));
    println!("  total    {:>9}", price(cart.totals.total));
}

/// Sends the request, turning non 2xx responses into errors carrying the server message.
async fn send(req: RequestBuilder) -> Result<reqwest::Response, anyhow::Error> {
    let res = req.send().await.context("failed to reach the server")?;
    match res.status() {
        s if s.is_success() => Ok(res),
        StatusCode::NOT_FOUND => bail!("Resource not found"),
        unexpected => {
            let body = res.json::<Value>().await.unwrap_or_default();
            if let Some(title) = body["notice"]["title"].as_str() {
                println!("[{}] {}", title, body["notice"]["description"].as_str().unwrap_or_default());
            }
            bail!(
                "got status code {}, {}",
                unexpected,
                body["message"].as_str().unwrap_or("no message")
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');
    let client = Client::new();

    match args.command {
        Commands::Restaurants(restaurants) => match restaurants.command {
            RestaurantCmds::List(filter) => {
                let mut query: Vec<(&str, String)> = Vec::new();
                if let Some(search) = filter.search {
                    query.push(("search", search));
                }
                if !filter.cuisines.is_empty() {
                    query.push(("cuisines", filter.cuisines.join(",")));
                }
                if let Some(rating) = filter.min_rating {
                    query.push(("min_rating", rating.to_string()));
                }
                if let Some(fee) = filter.min_fee {
                    query.push(("min_fee", fee.to_string()));
                }
                if let Some(fee) = filter.max_fee {
                    query.push(("max_fee", fee.to_string()));
                }
                if let Some(bucket) = filter.delivery_time {
                    query.push(("delivery_time", bucket));
                }
                if let Some(sort_by) = filter.sort_by {
                    query.push(("sort_by", sort_by));
                }
                let res = send(client.get(format!("{host}/v1/restaurants")).query(&query))
                    .await?
                    .json::<RestaurantsResponse>()
                    .await?;
                println!("{} restaurants found", res.total);
                for r in res.restaurants {
                    println!(
                        "  [{}] {:<24} {:.1}*  {:<10} fee {:>6}  {}{}",
                        r.id,
                        r.name,
                        r.rating,
                        r.delivery_time,
                        price(r.delivery_fee),
                        r.cuisine.join(", "),
                        if r.is_open { "" } else { "  (closed)" }
                    );
                }
            }
            RestaurantCmds::Show { id } => {
                let res = send(client.get(format!("{host}/v1/restaurants/{id}")))
                    .await?
                    .json::<Value>()
                    .await?;
                println!("{}", serde_json::to_string_pretty(&res)?);
            }
        },
        Commands::Menu { id, category, search } => {
            let mut query: Vec<(&str, String)> = vec![("page_size", "100".to_string())];
            if let Some(category) = category {
                query.push(("category", category));
            }
            if let Some(search) = search {
                query.push(("search", search));
            }
            let res = send(client.get(format!("{host}/v1/restaurants/{id}/menu")).query(&query))
                .await?
                .json::<MenuResponse>()
                .await?;
            println!("{} items", res.total);
            for item in res.items {
                println!("  [{:<6}] {:<32} {:<10} {:>9}", item.id, item.name, item.category, price(item.price));
            }
        }
        Commands::Cart(cart) => {
            let mutation = match cart.command {
                CartCmds::Create => {
                    let res = send(client.post(format!("{host}/v1/carts")))
                        .await?
                        .json::<CreatedCart>()
                        .await?;
                    println!("cart {} created", res.cart_id);
                    return Ok(());
                }
                CartCmds::Show { cart } => {
                    let res = send(client.get(format!("{host}/v1/cart/{cart}")))
                        .await?
                        .json::<CartView>()
                        .await?;
                    print_cart(&res);
                    return Ok(());
                }
                CartCmds::Add { cart, item, quantity } => {
                    client
                        .post(format!("{host}/v1/cart/{cart}/items"))
                        .json(&json!({ "item_id": item, "quantity": quantity }))
                }
                CartCmds::Update { cart, item, quantity } => {
                    client
                        .patch(format!("{host}/v1/cart/{cart}/item/{item}"))
                        .json(&json!({ "quantity": quantity }))
                }
                CartCmds::Remove { cart, item } => {
                    client.delete(format!("{host}/v1/cart/{cart}/item/{item}"))
                }
                CartCmds::Clear { cart } => client.delete(format!("{host}/v1/cart/{cart}")),
            };
            let res = send(mutation).await?.json::<CartMutation>().await?;
            if let Some(notice) = &res.notice {
                print_notice(notice);
            }
            print_cart(&res.cart);
        }
        Commands::Checkout { cart, name, phone, address, notes } => {
            println!("placing order for cart={}", cart);
            let res = send(
                client
                    .post(format!("{host}/v1/cart/{cart}/checkout"))
                    .json(&json!({
                        "customer": {
                            "name": name,
                            "phone": phone,
                            "address": address,
                            "notes": notes,
                        }
                    })),
            )
            .await?
            .json::<CheckoutResponse>()
            .await?;
            print_notice(&res.notice);
            println!("{}", serde_json::to_string_pretty(&res.order)?);
        }
        Commands::Orders => {
            let res = send(client.get(format!("{host}/v1/orders")))
                .await?
                .json::<Value>()
                .await?;
            println!("{}", serde_json::to_string_pretty(&res["orders"])?);
        }
    };
    Ok(())
}
