use serde::Serialize;

/// One must-try dish with a typical street/restaurant price band.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FoodRecommendation {
    pub dish: &'static str,
    pub description: &'static str,
    pub price_range: &'static str,
}

/// A world-cuisine section of the exploration guide.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CuisineSection {
    pub cuisine: &'static str,
    pub dishes: &'static [FoodRecommendation],
}

macro_rules! dishes {
    ($(($dish:expr, $description:expr, $price:expr)),+ $(,)?) => {
        &[$(FoodRecommendation {
            dish: $dish,
            description: $description,
            price_range: $price,
        }),+]
    };
}

const DELHI: &[FoodRecommendation] = dishes![
    ("Chole Bhature", "Spicy chickpeas with fluffy fried bread", "₹150-200"),
    ("Butter Chicken", "Creamy, rich chicken curry", "₹300-400"),
    ("Paranthas", "Stuffed flatbreads from Chandni Chowk", "₹100-150"),
    ("Kebabs", "Grilled meat skewers from Old Delhi", "₹200-300"),
];

const MUMBAI: &[FoodRecommendation] = dishes![
    ("Vada Pav", "Mumbai's iconic spicy potato burger", "₹15-25"),
    ("Pav Bhaji", "Mashed spicy vegetables with buns", "₹80-120"),
    ("Bhel Puri", "Crunchy street snack mix", "₹40-60"),
    ("Misal Pav", "Spicy sprouted lentil curry", "₹60-100"),
];

const CHENNAI: &[FoodRecommendation] = dishes![
    ("Dosa", "Crispy fermented crepe with chutneys", "₹50-100"),
    ("Chettinad Chicken", "Spicy and aromatic chicken curry", "₹250-350"),
    ("Idli Sambar", "Steamed rice cakes with lentil soup", "₹40-80"),
    ("Filter Coffee", "Traditional South Indian coffee", "₹20-40"),
];

const HYDERABAD: &[FoodRecommendation] = dishes![
    ("Hyderabadi Biryani", "Fragrant rice with tender meat", "₹300-500"),
    ("Haleem", "Slow-cooked lentils and meat stew", "₹200-300"),
    ("Nihari", "Rich meat curry traditionally eaten for breakfast", "₹250-400"),
    ("Double Ka Meetha", "Bread pudding dessert", "₹100-150"),
];

const GOA: &[FoodRecommendation] = dishes![
    ("Fish Curry Rice", "Coconut-based spicy fish curry", "₹200-300"),
    ("Bebinca", "Traditional layered dessert", "₹150-200"),
    ("Pork Vindaloo", "Spicy Portuguese-influenced curry", "₹300-400"),
    ("Feni", "Local cashew or palm spirit", "₹100-200"),
];

const KERALA: &[FoodRecommendation] = dishes![
    ("Appam & Stew", "Fermented pancakes with vegetable curry", "₹120-180"),
    ("Puttu", "Steamed rice cake with coconut", "₹80-120"),
    ("Fish Molee", "Mild coconut fish curry", "₹250-350"),
    ("Payasam", "Sweet rice pudding dessert", "₹80-120"),
];

const CUISINES: &[CuisineSection] = &[
    CuisineSection {
        cuisine: "Mediterranean",
        dishes: dishes![
            ("Greek Moussaka", "Layered eggplant, potatoes, and meat", "₹400-600"),
            ("Italian Risotto", "Creamy rice with mushrooms or seafood", "₹350-500"),
            ("Spanish Paella", "Saffron rice with seafood and meat", "₹500-700"),
            ("Turkish Kebab", "Grilled meat with yogurt sauce", "₹300-450"),
        ],
    },
    CuisineSection {
        cuisine: "East Asian",
        dishes: dishes![
            ("Pad Thai", "Stir-fried noodles with tamarind sauce", "₹250-350"),
            ("Sushi Platter", "Fresh raw fish with seasoned rice", "₹800-1200"),
            ("Dim Sum", "Steamed dumplings and small plates", "₹400-600"),
            ("Ramen", "Japanese noodle soup", "₹300-500"),
        ],
    },
    CuisineSection {
        cuisine: "Latin American",
        dishes: dishes![
            ("Tacos al Pastor", "Pork tacos with pineapple", "₹200-300"),
            ("Feijoada", "Brazilian black bean stew", "₹350-500"),
            ("Ceviche", "Raw fish marinated in citrus", "₹400-600"),
            ("Empanadas", "Stuffed pastries", "₹150-250"),
        ],
    },
    CuisineSection {
        cuisine: "Middle Eastern",
        dishes: dishes![
            ("Hummus & Pita", "Chickpea dip with flatbread", "₹200-300"),
            ("Shawarma", "Grilled meat wrap", "₹250-350"),
            ("Falafel", "Fried chickpea balls", "₹180-280"),
            ("Baklava", "Sweet pastry with nuts and honey", "₹150-250"),
        ],
    },
];

/// Must-try dishes for a destination, keyed case- and whitespace-
/// insensitively ("New  Delhi" and "delhi" both match). Empty for
/// destinations without a curated table.
pub fn local_dishes(destination: &str) -> &'static [FoodRecommendation] {
    let key: String = destination
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    match key.as_str() {
        "delhi" | "newdelhi" => DELHI,
        "mumbai" => MUMBAI,
        "chennai" => CHENNAI,
        "hyderabad" => HYDERABAD,
        "goa" => GOA,
        "kerala" => KERALA,
        _ => &[],
    }
}

/// The destination-independent cuisine exploration guide.
pub fn cuisine_guide() -> &'static [CuisineSection] {
    CUISINES
}
