//! The built-in demo catalog.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, TimeZone, Utc};

const IMAGE_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{}",
        IMAGE_PARAMS
    )
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    discount_cents: Option<i64>,
    category: &'static str,
    tags: [&'static str; 3],
    photos: [u32; 2],
    rating: f64,
    stock: u32,
    featured: bool,
    created_at: DateTime<Utc>,
}

impl Seed {
    fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Money::new(self.price_cents),
            discount_price: self.discount_cents.map(Money::new),
            category: self.category.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            images: self.photos.iter().map(|&p| pexels(p)).collect(),
            rating: self.rating,
            stock: self.stock,
            featured: self.featured,
            created_at: self.created_at,
        }
    }
}

/// The eight demo products, in catalog order.
pub fn seed_products() -> Vec<Product> {
    let seeds = [
        Seed {
            id: "1",
            name: "Premium Wireless Headphones",
            description: "Experience crystal-clear sound with our premium wireless headphones. \
                Featuring active noise cancellation, 30-hour battery life, and comfortable \
                over-ear design.",
            price_cents: 24999,
            discount_cents: Some(19999),
            category: "Electronics",
            tags: ["headphones", "wireless", "audio"],
            photos: [3394650, 3394651],
            rating: 4.8,
            stock: 45,
            featured: true,
            created_at: at(2023, 11, 15, 12, 0),
        },
        Seed {
            id: "2",
            name: "Smart Watch Series 5",
            description: "Stay connected and track your fitness with our latest smartwatch. \
                Features heart rate monitoring, GPS, and a beautiful OLED display.",
            price_cents: 29999,
            discount_cents: None,
            category: "Electronics",
            tags: ["smartwatch", "fitness", "wearable"],
            photos: [437037, 393047],
            rating: 4.6,
            stock: 28,
            featured: true,
            created_at: at(2023, 10, 20, 14, 30),
        },
        Seed {
            id: "3",
            name: "Ergonomic Office Chair",
            description: "Work in comfort with our ergonomic office chair. Adjustable height, \
                lumbar support, and breathable mesh back.",
            price_cents: 18999,
            discount_cents: None,
            category: "Furniture",
            tags: ["office", "chair", "ergonomic"],
            photos: [1957478, 1957477],
            rating: 4.4,
            stock: 15,
            featured: false,
            created_at: at(2023, 12, 5, 9, 15),
        },
        Seed {
            id: "4",
            name: "Professional DSLR Camera",
            description: "Capture stunning photos with our professional DSLR camera. 24.1MP \
                sensor, 4K video recording, and includes 18-55mm lens.",
            price_cents: 89999,
            discount_cents: Some(79999),
            category: "Photography",
            tags: ["camera", "dslr", "photography"],
            photos: [90946, 243757],
            rating: 4.9,
            stock: 12,
            featured: true,
            created_at: at(2023, 9, 18, 11, 45),
        },
        Seed {
            id: "5",
            name: "Leather Weekend Bag",
            description: "Stylish leather weekend bag perfect for short trips. Durable \
                construction, multiple compartments, and classic design.",
            price_cents: 15999,
            discount_cents: None,
            category: "Fashion",
            tags: ["bag", "leather", "travel"],
            photos: [2081199, 934063],
            rating: 4.5,
            stock: 22,
            featured: false,
            created_at: at(2023, 11, 2, 15, 20),
        },
        Seed {
            id: "6",
            name: "Stainless Steel Water Bottle",
            description: "Keep your drinks cold for 24 hours or hot for 12 with our \
                vacuum-insulated water bottle. Durable, leak-proof, and eco-friendly.",
            price_cents: 2999,
            discount_cents: None,
            category: "Home",
            tags: ["bottle", "hydration", "eco-friendly"],
            photos: [1188649, 1000084],
            rating: 4.7,
            stock: 60,
            featured: false,
            created_at: at(2023, 12, 15, 10, 30),
        },
        Seed {
            id: "7",
            name: "Organic Cotton T-Shirt",
            description: "Soft, comfortable organic cotton t-shirt. Ethically made, \
                pre-shrunk, and available in multiple colors.",
            price_cents: 2499,
            discount_cents: None,
            category: "Fashion",
            tags: ["clothing", "t-shirt", "organic"],
            photos: [428340, 428338],
            rating: 4.3,
            stock: 85,
            featured: false,
            created_at: at(2023, 10, 8, 13, 20),
        },
        Seed {
            id: "8",
            name: "Wireless Charging Pad",
            description: "Convenient wireless charging for all Qi-enabled devices. Fast \
                charging technology, sleek design, and non-slip surface.",
            price_cents: 3499,
            discount_cents: Some(2999),
            category: "Electronics",
            tags: ["charging", "wireless", "accessories"],
            photos: [3850216, 4526400],
            rating: 4.4,
            stock: 38,
            featured: false,
            created_at: at(2023, 11, 22, 16, 45),
        },
    ];

    seeds.into_iter().map(Seed::into_product).collect()
}
