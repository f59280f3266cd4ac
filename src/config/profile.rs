// src/config/profile.rs

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Profile {
    const fn new(id: u32, name: &'static str, description: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { id, name, description, latitude, longitude }
    }
}

static PROFILES: [Profile; 13] = [
    Profile::new(1, "Vikas", "Lead Software Engineer", 28.6139, 77.2090),
    Profile::new(2, "John Doe", "Software Developer", 37.7749, -122.4194),
    Profile::new(3, "Jane Smith", "UX Designer", 40.7128, -74.0060),
    Profile::new(4, "Bob Johnson", "Data Analyst", 51.5074, -0.1278),
    Profile::new(5, "Alice Williams", "Product Manager", 48.8566, 2.3522),
    Profile::new(6, "Charlie Brown", "Marketing Specialist", 35.6762, 139.6503),
    Profile::new(7, "Diana Lee", "Frontend Developer", 1.3521, 103.8198),
    Profile::new(8, "Ethan Hunt", "DevOps Engineer", 52.5200, 13.4050),
    Profile::new(9, "Fiona Green", "AI Researcher", -33.8688, 151.2093),
    Profile::new(10, "George Taylor", "Blockchain Developer", 55.7558, 37.6173),
    Profile::new(11, "Hannah Martinez", "Cybersecurity Analyst", 19.4326, -99.1332),
    Profile::new(12, "Ian Foster", "Cloud Architect", -37.8136, 144.9631),
    Profile::new(13, "Julia Chang", "Mobile App Developer", 25.0330, 121.5654),
];

/// The compiled-in profile set, in display order.
pub fn all_profiles() -> &'static [Profile] {
    &PROFILES
}

pub fn find_profile(id: u32) -> Option<&'static Profile> {
    PROFILES.iter().find(|p| p.id == id)
}
