use crate::types::QuoteRecord;

type Entry = (u64, &'static str, &'static str);

const WISDOM: &[Entry] = &[
    (1, "Be yourself; everyone else is already taken.", "Oscar Wilde"),
    (2, "The only true wisdom is in knowing you know nothing.", "Socrates"),
    (3, "Knowing yourself is the beginning of all wisdom.", "Aristotle"),
    (
        4,
        "Wisdom is not a product of schooling but of the lifelong attempt to acquire it.",
        "Albert Einstein",
    ),
    (
        5,
        "The fool doth think he is wise, but the wise man knows himself to be a fool.",
        "William Shakespeare",
    ),
];

const INSPIRATION: &[Entry] = &[
    (6, "The only way to do great work is to love what you do.", "Steve Jobs"),
    (7, "Believe you can and you're halfway there.", "Theodore Roosevelt"),
    (
        8,
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (9, "It always seems impossible until it's done.", "Nelson Mandela"),
    (10, "Don't watch the clock; do what it does. Keep going.", "Sam Levenson"),
];

const SUCCESS: &[Entry] = &[
    (
        11,
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (12, "The way to get started is to quit talking and begin doing.", "Walt Disney"),
    (
        13,
        "Success is walking from failure to failure with no loss of enthusiasm.",
        "Winston Churchill",
    ),
    (14, "Don't be afraid to give up the good to go for the great.", "John D. Rockefeller"),
    (15, "I find that the harder I work, the more luck I seem to have.", "Thomas Jefferson"),
];

const LIFE: &[Entry] = &[
    (16, "Life is what happens to you while you're busy making other plans.", "John Lennon"),
    (17, "You only live once, but if you do it right, once is enough.", "Mae West"),
    (
        18,
        "In the end, it's not the years in your life that count. It's the life in your years.",
        "Abraham Lincoln",
    ),
    (19, "Life is really simple, but we insist on making it complicated.", "Confucius"),
    (20, "The purpose of our lives is to be happy.", "Dalai Lama"),
];

const HUMOR: &[Entry] = &[
    (
        21,
        "Two things are infinite: the universe and human stupidity; and I'm not sure about the universe.",
        "Albert Einstein",
    ),
    (22, "I'm not arguing, I'm just explaining why I'm right.", "Anonymous"),
    (23, "I'm not lazy, I'm on energy saving mode.", "Anonymous"),
    (
        24,
        "I told my computer I needed a break, and now it won't stop sending me KitKat ads.",
        "Anonymous",
    ),
    (
        25,
        "I don't need a hairstylist, my pillow gives me a new hairstyle every morning.",
        "Anonymous",
    ),
];

const GROUPS: &[(&str, &[Entry])] = &[
    ("wisdom", WISDOM),
    ("inspiration", INSPIRATION),
    ("success", SUCCESS),
    ("life", LIFE),
    ("humor", HUMOR),
];

/// The built-in catalog, filed by category.
pub fn embedded_groups() -> Vec<(String, Vec<QuoteRecord>)> {
    GROUPS
        .iter()
        .map(|&(category, entries)| {
            let records = entries
                .iter()
                .map(|&(id, text, author)| QuoteRecord::new(id, text, author, Some(category)))
                .collect();
            (category.to_string(), records)
        })
        .collect()
}
