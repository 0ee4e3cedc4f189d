//! Static display catalog for the landing page. Nothing here mutates after
//! load; components borrow straight from these tables.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestimonialEntry {
    pub name: &'static str,
    pub course: &'static str,
    pub feedback: &'static str,
    pub rating: u8,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "IoT Automation",
        description: "Smart home automation, sensor networks, and IoT device integration projects",
        icon: "🏠",
        features: &[
            "Arduino & Raspberry Pi",
            "Sensor Integration",
            "Mobile App Control",
            "Real-time Monitoring",
        ],
    },
    ProjectEntry {
        title: "AI & Machine Learning",
        description: "Intelligent systems, predictive analytics, and machine learning applications",
        icon: "🤖",
        features: &[
            "Computer Vision",
            "Natural Language Processing",
            "Predictive Models",
            "Deep Learning",
        ],
    },
    ProjectEntry {
        title: "RFID Systems",
        description: "RFID-based attendance, library management, and access control systems",
        icon: "📱",
        features: &[
            "Attendance Systems",
            "Access Control",
            "Inventory Management",
            "Library Systems",
        ],
    },
    ProjectEntry {
        title: "Web Development",
        description: "Modern web applications with responsive design and latest technologies",
        icon: "💻",
        features: &[
            "Responsive Design",
            "Full-Stack Development",
            "E-commerce Solutions",
            "CMS Development",
        ],
    },
    ProjectEntry {
        title: "Embedded Systems",
        description: "Microcontroller-based projects and embedded software development",
        icon: "⚡",
        features: &[
            "Microcontroller Programming",
            "PCB Design",
            "Firmware Development",
            "Hardware Integration",
        ],
    },
];

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Expert Team",
        description: "Experienced developers and engineers",
        icon: "👥",
    },
    FeatureEntry {
        title: "Quality Assurance",
        description: "Rigorous testing and quality checks",
        icon: "✅",
    },
    FeatureEntry {
        title: "Timely Delivery",
        description: "Projects delivered on or before deadline",
        icon: "⏰",
    },
    FeatureEntry {
        title: "24/7 Support",
        description: "Round-the-clock technical support",
        icon: "🆘",
    },
];

pub const TESTIMONIALS: &[TestimonialEntry] = &[
    TestimonialEntry {
        name: "Rahul Sharma",
        course: "Computer Science Engineering",
        feedback: "Excellent project development service! Got my IoT project completed with detailed documentation.",
        rating: 5,
    },
    TestimonialEntry {
        name: "Priya Patel",
        course: "Electronics & Communication",
        feedback: "Professional team that delivered my RFID attendance system project on time with complete explanation.",
        rating: 5,
    },
    TestimonialEntry {
        name: "Amit Kumar",
        course: "Information Technology",
        feedback: "Great experience! The AI project was well-designed and helped me understand machine learning concepts.",
        rating: 5,
    },
];

/// Whole catalog in one value, used by the dev hook export.
#[derive(Serialize)]
pub struct Catalog {
    pub projects: &'static [ProjectEntry],
    pub features: &'static [FeatureEntry],
    pub testimonials: &'static [TestimonialEntry],
}

pub fn catalog() -> Catalog {
    Catalog {
        projects: PROJECTS,
        features: FEATURES,
        testimonials: TESTIMONIALS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        assert_eq!(PROJECTS.len(), 5);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        for project in PROJECTS {
            assert_eq!(project.features.len(), 4);
        }
    }

    #[test]
    fn ratings_stay_in_range() {
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating), "{} has rating {}", t.name, t.rating);
        }
    }

    #[test]
    fn catalog_serializes_for_dev_hook() {
        let json = serde_json::to_value(catalog()).unwrap();
        assert_eq!(json["projects"].as_array().unwrap().len(), 5);
        assert_eq!(json["testimonials"][0]["name"], "Rahul Sharma");
    }
}
