//! Static copy for the sections.

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [NavLink],
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "HOME", href: "#", dropdown: &[] },
    NavItem {
        label: "SERVICES",
        href: "#services",
        dropdown: &[
            NavLink { label: "Residential", href: "#services/residential" },
            NavLink { label: "Commercial", href: "#services/commercial" },
            NavLink { label: "Industrial", href: "#services/industrial" },
        ],
    },
    NavItem { label: "ABOUT", href: "#about", dropdown: &[] },
    NavItem { label: "PROJECTS", href: "#projects", dropdown: &[] },
    NavItem { label: "CONTACT", href: "#contact", dropdown: &[] },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Preconstruction Planning",
        description: "Comprehensive planning and strategic analysis to ensure project success from inception. We focus on cost estimation, scheduling, and risk assessment.",
        image: "/images/services/preconstruction.jpg",
    },
    Service {
        title: "Architectural Modelling",
        description: "State-of-the-art 3D modeling and visualization services utilizing advanced BIM technology for precise and detailed architectural designs.",
        image: "/images/services/architectural.jpg",
    },
    Service {
        title: "Construction Management",
        description: "Expert project oversight and coordination ensuring timely delivery, quality standards, and efficient resource management throughout construction.",
        image: "/images/services/construction-management.jpg",
    },
];

pub struct Stat {
    pub value: u64,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 2035, label: "Year Established", icon: "📅" },
    Stat { value: 206, label: "Projects Completed", icon: "✅" },
    Stat { value: 870, label: "Contractors Appointed", icon: "👷" },
    Stat { value: 26, label: "Awards Won", icon: "🏆" },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static [&'static str],
    pub gallery: &'static [&'static str],
}

impl Project {
    /// Card number, zero-padded to two digits.
    pub fn number(&self) -> String {
        format!("{:0>2}", self.id)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Infrastructure Development",
        summary: "Major highway overpass construction showcasing our infrastructure capabilities",
        category: "Infrastructure",
        image: "/images/projects/infrastructure.jpg",
        description: &[
            "Our infrastructure development project showcases our commitment to building sustainable and efficient transportation solutions. This project involved the construction of a major highway overpass, demonstrating our expertise in large-scale infrastructure work.",
            "The project required careful planning and coordination with multiple stakeholders, including local government authorities and environmental agencies. We implemented innovative construction techniques to minimize disruption to existing traffic flow while maintaining the highest safety standards.",
        ],
        gallery: &[
            "/images/projects/infrastructure.jpg",
            "/images/projects/commercial.jpg",
            "/images/projects/residential.jpg",
            "/images/projects/industrial.jpg",
        ],
    },
    Project {
        id: "2",
        title: "Commercial Construction",
        summary: "Large-scale commercial building development with modern safety standards",
        category: "Commercial",
        image: "/images/projects/commercial.jpg",
        description: &[
            "This commercial construction project represents our vision for modern business spaces. The development includes state-of-the-art office facilities, retail spaces, and underground parking, all designed with sustainability in mind.",
            "Our team worked closely with architects and designers to create a space that combines functionality with aesthetic appeal. The project incorporates smart building technology and energy-efficient systems throughout.",
        ],
        gallery: &[
            "/images/projects/commercial.jpg",
            "/images/projects/infrastructure.jpg",
            "/images/projects/residential.jpg",
            "/images/projects/industrial.jpg",
        ],
    },
    Project {
        id: "3",
        title: "Residential Complex",
        summary: "Multi-story residential complex with state-of-the-art facilities",
        category: "Residential",
        image: "/images/projects/residential.jpg",
        description: &[
            "The residential complex project showcases our expertise in creating high-end living spaces. This multi-story development combines luxury amenities with sustainable living practices, setting new standards in residential construction.",
            "The project features a mix of apartment sizes, communal spaces, and recreational facilities. We implemented advanced construction techniques to ensure optimal space utilization and energy efficiency.",
        ],
        gallery: &[
            "/images/projects/residential.jpg",
            "/images/projects/infrastructure.jpg",
            "/images/projects/commercial.jpg",
            "/images/projects/industrial.jpg",
        ],
    },
    Project {
        id: "4",
        title: "Industrial Development",
        summary: "Industrial facility construction with advanced technological integration",
        category: "Industrial",
        image: "/images/projects/industrial.jpg",
        description: &[
            "This industrial development project demonstrates our capability to create modern manufacturing facilities. The project involved constructing a state-of-the-art industrial complex with advanced automation systems and efficient workflow design.",
            "We worked closely with industrial engineers to optimize the layout for maximum productivity while maintaining strict safety standards. The facility incorporates modern technology throughout its operations.",
        ],
        gallery: &[
            "/images/projects/industrial.jpg",
            "/images/projects/infrastructure.jpg",
            "/images/projects/commercial.jpg",
            "/images/projects/residential.jpg",
        ],
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub struct Client {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client { name: "TIPOX", icon: "🏢", description: "Leading Commercial Development" },
    Client { name: "EXCIPIA", icon: "🏭", description: "Industrial Solutions Provider" },
    Client { name: "Vide", icon: "📦", description: "Warehouse & Distribution" },
    Client { name: "DEHOTEL", icon: "🏨", description: "Luxury Hotel Chain" },
    Client { name: "UMBER & CO", icon: "🏛", description: "Real Estate Development" },
];

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { icon: "📞", title: "Phone", content: "123-456-7890" },
    ContactInfo { icon: "✉", title: "Email", content: "info@sphereconstruction.com" },
    ContactInfo {
        icon: "📍",
        title: "Address",
        content: "123 Construction Ave, Building City, ST 12345",
    },
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3153.0636262610164!2d-122.42111548441636!3d37.77492977975835!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x8085809c6c8f4459%3A0xb10ed6d9b5050fa5!2sHayes+Valley%2C+San+Francisco%2C+CA!5e0!3m2!1sen!2sus!4v1565285772599!5m2!1sen!2sus";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_numbers_are_padded() {
        assert_eq!(PROJECTS[0].number(), "01");
        assert_eq!(PROJECTS[3].number(), "04");
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_project("3").map(|p| p.title), Some("Residential Complex"));
        assert!(find_project("99").is_none());
    }

    #[test]
    fn every_project_has_a_gallery() {
        assert!(PROJECTS.iter().all(|p| !p.gallery.is_empty() && !p.description.is_empty()));
    }
}
