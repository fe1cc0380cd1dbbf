use crate::models::NewAdvocate;

/// Specialty tags assigned to seeded advocates
pub const SPECIALTIES: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

// (first, last, city, degree, years, phone)
const ADVOCATES: [(&str, &str, &str, &str, i32, &str); 15] = [
    ("John", "Doe", "New York", "MD", 10, "5551234567"),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, "5559876543"),
    ("Alice", "Johnson", "Chicago", "MSW", 5, "5554567890"),
    ("Michael", "Brown", "Houston", "MD", 12, "5556543210"),
    ("Emily", "Davis", "Phoenix", "PhD", 7, "5553210987"),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, "5557890123"),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, "5554561234"),
    ("David", "Harris", "San Diego", "PhD", 6, "5557896543"),
    ("Laura", "Clark", "Dallas", "MSW", 4, "5550123456"),
    ("Daniel", "Lewis", "San Jose", "MD", 13, "5553217654"),
    ("Sarah", "Lee", "Austin", "PhD", 10, "5551238765"),
    ("James", "King", "Jacksonville", "MSW", 5, "5556540987"),
    ("Megan", "Green", "San Francisco", "MD", 14, "5559873456"),
    ("Joshua", "Walker", "Columbus", "PhD", 9, "5556781234"),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, "5559872345"),
];

/// Deterministic 1-3 distinct specialties for the advocate at `index`
pub fn specialties_for(index: usize) -> Vec<String> {
    let hash = index * 7 + 13;
    let count = hash % 3 + 1;

    // stride 5 is coprime with 26, so picks never repeat
    (0..count)
        .map(|i| SPECIALTIES[(hash + i * 5) % SPECIALTIES.len()].to_string())
        .collect()
}

/// The fixed seed set for `POST /api/seed`
pub fn seed_advocates() -> Vec<NewAdvocate> {
    ADVOCATES
        .iter()
        .enumerate()
        .map(|(index, &(first, last, city, degree, years, phone))| NewAdvocate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties_for(index),
            years_of_experience: years,
            phone_number: phone.to_string(),
        })
        .collect()
}
