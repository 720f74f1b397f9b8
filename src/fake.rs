use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Oliver", "Isla", "George", "Ava", "Harry", "Mia", "Noah", "Grace", "Jack",
    "Freya", "Leo", "Evie", "Oscar", "Lily", "Arthur", "Sophie", "Jacob", "Ruby", "Thomas",
    "Chloe", "William", "Ella", "James", "Hannah", "Samuel", "Alice", "Daniel", "Rosie",
    "Henry",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies", "Patel",
    "Robinson", "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green", "Hall",
    "Wood", "Jackson", "Clarke", "Hughes", "Edwards", "Turner", "Hill", "Moore", "Cooper",
    "Ward", "Morris", "King",
];

const LOREM_WORDS: &[&str] = &[
    "morning", "visit", "medication", "breakfast", "check", "door", "keys", "kitchen", "bathroom",
    "assist", "dressing", "shower", "lunch", "prepare", "record", "notes", "family", "contact",
    "mobility", "frame", "walk", "garden", "evening", "tea", "laundry", "bedding", "change",
    "remind", "hydration", "water", "fridge", "shopping", "list", "appointment", "calm",
    "support", "chair", "window", "heating", "lights", "pharmacy", "collect", "prescription",
    "observe", "skin", "cream", "apply", "gentle", "routine", "before", "after", "leaving",
];

/// A person-style name, "First Last".
pub fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    format!("{first} {last}")
}

/// A v4-shaped UUID token drawn from `rng` rather than the OS, so seeded
/// generators produce the same ids.
pub fn uuid4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word_count = rng.gen_range(4..=10);
    let mut words: Vec<&str> = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        if let Some(w) = LOREM_WORDS.choose(rng).copied() {
            words.push(w);
        }
    }
    let mut out = words.join(" ");
    if let Some(first) = out.get(0..1) {
        let upper = first.to_ascii_uppercase();
        out.replace_range(0..1, &upper);
    }
    out.push('.');
    out
}

pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}
