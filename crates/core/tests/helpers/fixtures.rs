//! Catalog fixture records, shaped like the public catalog's JSON.

use serde_json::{json, Value};

pub fn products() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Apple Watch",
            "description": "Fitness tracking on your wrist",
            "price": 299,
            "images": ["https://cdn.example/1/1.png", "https://cdn.example/1/2.png"],
            "rating": 4.6,
            "category": "wearables",
            "stock": 12
        }),
        json!({
            "id": 2,
            "title": "Leather Shoes",
            "description": "Classic oxford shoes",
            "price": 89,
            "images": ["https://cdn.example/2/1.png"],
            "rating": 4.1,
            "category": "footwear"
        }),
        json!({
            "id": 3,
            "title": "Cotton Shirt",
            "description": "Breathable fashion staple",
            "price": 24.99,
            "images": ["https://cdn.example/3/1.png"],
            "rating": 3.9,
            "category": "tops"
        }),
        json!({
            "id": 4,
            "title": "Running Shoes",
            "description": "Lightweight trainers",
            "price": 120,
            "images": ["https://cdn.example/4/1.png"],
            "rating": 4.4,
            "category": "footwear"
        }),
    ]
}
