use serde_json::{Value, json};

/// Three clients, each a map with a `likes` sequence of strings.
pub fn clients() -> Value {
    json!({
        "clients": [
            {
                "name": "Paul",
                "age": 28,
                "hair": "brown",
                "eyes": "green",
                "likes": ["bacon", "egg", "coffee"]
            },
            {
                "name": "Louis",
                "age": 18,
                "hair": "black",
                "eyes": "blue",
                "likes": ["toast", "jam", "juice"]
            },
            {
                "name": "Suzane",
                "age": 35,
                "hair": "red",
                "eyes": "blue",
                "likes": ["bacon", "pancake", "tea"]
            }
        ]
    })
}

/// A tree mixing maps, sequences and scalars at the same depth.
pub fn mixed() -> Value {
    json!({
        "items": [
            { "id": 1, "tags": ["a", "b"] },
            ["nested", "list"],
            "plain",
            42,
            null,
            { "id": 2 }
        ]
    })
}
