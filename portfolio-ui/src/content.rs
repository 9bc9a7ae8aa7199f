//! Page Content
//!
//! Static content compiled into the page: testimonials, projects, skills,
//! experience and contact details.

/// A client quote shown in the testimonials carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Star rating, 1 to 5
    pub rating: u8,
}

impl Testimonial {
    /// Number of stars to draw
    pub fn stars(&self) -> usize {
        usize::from(self.rating.clamp(1, 5))
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rodri Chen - Japan",
        role: "Fiverr-Client",
        content: "Working with Manahil was an exceptional experience! They efficiently converted my Figma designs into a stunning WordPress website, paying meticulous attention to detail and ensuring everything was pixel-perfect. Their communication was prompt and professional throughout the project, and they delivered ahead of schedule. I highly recommend Manahil for anyone looking for top-notch WordPress development services",
        rating: 5,
    },
    Testimonial {
        name: "Abdul Majeed - UAE",
        role: "Small Business Owner",
        content: "I recently had the pleasure of working with someone who efficiently converted my Figma designs into Elementor with remarkable speed. Their communication skills were exceptional, ensuring a smooth and collaborative process throughout. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Talha Jabbar - Pakistan",
        role: "University Student",
        content: "Manahil did a great job developing my project. She was professional, quick to understand the requirements, and delivered everything on time with clean and efficient code. I highly recommend her for any frontend development work!",
        rating: 5,
    },
    Testimonial {
        name: "Saad Khan - Pakistan",
        role: "Startup Founder",
        content: "Professional, reliable, and delivered exactly what we needed. The React app is fast and user-friendly.",
        rating: 5,
    },
];

/// Which tab a project is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Code,
    WordPress,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Code => "Code Projects",
            ProjectKind::WordPress => "WordPress Projects",
        }
    }

    pub fn projects(&self) -> &'static [Project] {
        match self {
            ProjectKind::Code => CODE_PROJECTS,
            ProjectKind::WordPress => WORDPRESS_PROJECTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub featured: bool,
    /// Grid span classes
    pub span: &'static str,
    pub code_link: Option<&'static str>,
    pub live_link: &'static str,
}

impl Project {
    /// Technology badges shown on the card
    pub fn badges(&self, kind: ProjectKind) -> &'static [&'static str] {
        let limit = match (kind, self.featured) {
            (_, true) => 4,
            (ProjectKind::Code, false) => 2,
            (ProjectKind::WordPress, false) => 3,
        };
        &self.tech[..limit.min(self.tech.len())]
    }

    /// Code link worth rendering; `#` placeholders are dropped
    pub fn code_href(&self) -> Option<&'static str> {
        self.code_link.filter(|link| *link != "#")
    }
}

pub const CODE_PROJECTS: &[Project] = &[
    Project {
        title: "SABZA Admin Panel",
        description: "An admin dashboard built with React, Tailwind CSS, Shadcn UI, and OAuth authentication. Designed to manage SABZA’s climate and sustainability projects with a clean UI, project listings, updates, and role-based access.",
        tech: &["React", "OAuth", "Chart.js", "Tailwind CSS", "Shadcn UI"],
        image: "/sabza.JPG",
        featured: true,
        span: "md:col-span-2 lg:col-span-2",
        code_link: Some("https://github.com/ManahilMustafa/Admin-Panel-SabzaProjects"),
        live_link: "https://admin-panel-sabza-projects.vercel.app/",
    },
    Project {
        title: "The BlackArt",
        description: "An online art marketplace featuring real-time bidding and painting sales. Built with React and Tailwind, it includes live auctions, interactive dashboards, and seamless REST API integration for smooth user experience.",
        tech: &["React", "REST API", "Tailwind"],
        image: "/seven.png",
        featured: false,
        span: "lg:col-span-1",
        code_link: Some("https://github.com/ManahilMustafa/ArtMart-Gallery"),
        live_link: "https://theblackart.temp2025.com/",
    },
    Project {
        title: "Prescripto: Doctor Appointment",
        description: "A doctor appointment booking platform built with Next.js and TypeScript. It features patient registration, doctor listings, scheduling, and a responsive UI, deployed on Vercel for fast performance.",
        tech: &["Next.js", "TypeScript", "Tailwind CSS", "Vercel"],
        image: "/doctor.png",
        featured: false,
        span: "lg:col-span-1",
        code_link: Some("https://github.com/ManahilMustafa/doctor-appointment-site"),
        live_link: "https://doctor-appointment-site-neon.vercel.app/",
    },
    Project {
        title: "Gericht: Restaurant Menu",
        description: "A modern restaurant menu website built with React. It features elegant UI design, dynamic food and drinks sections, and a fully responsive layout for an engaging dining experience.",
        tech: &["React", "Framer", "JavaScript"],
        image: "/menu.png",
        featured: false,
        span: "lg:col-span-1",
        code_link: Some("#"),
        live_link: "https://resturant-jsx.vercel.app/",
    },
    Project {
        title: "Scrowise",
        description: "A secure escrow management platform built with React, providing safe transactions between buyers and sellers. It includes user authentication, transaction tracking, and a clean, responsive UI for trust and transparency.",
        tech: &["React", "Node.js", "Express", "MongoDB"],
        image: "/scro.jpg",
        featured: false,
        span: "lg:col-span-1",
        code_link: Some("https://github.com/ManahilMustafa/Scrowise"),
        live_link: "https://scrowise.vercel.app/#",
    },
    Project {
        title: "Brainwave",
        description: "A modern personal portfolio website built with React and Tailwind CSS. It showcases projects, skills, and experience with a stylish UI, smooth animations, and responsive design.",
        tech: &["React", "Tailwind CSS", "JavaScript"],
        image: "/brain.png",
        featured: false,
        span: "md:col-span-2 lg:col-span-2",
        code_link: Some("https://github.com/ManahilMustafa/Brainwave-react"),
        live_link: "https://brainwave-react-five.vercel.app/",
    },
];

pub const WORDPRESS_PROJECTS: &[Project] = &[
    Project {
        title: "Permian Waste Valet",
        description: "Professional trash valet and pressure washing service website built using a purchased WordPress theme, customized for business needs.",
        tech: &["Theme Customization", "Elementor Pro", "Custom CSS", "SEO"],
        image: "/trash.JPG",
        featured: true,
        span: "md:col-span-2 lg:col-span-2",
        code_link: None,
        live_link: "https://permianwastevalet.com/",
    },
    Project {
        title: "Elite Comfort Hub",
        description: "A premium e-commerce site built on WordPress with a purchased theme, customized to showcase and sell high-end home comfort products like massage chairs, accent chairs, and sofas, featuring free shipping, extended warranties, and smooth shopping experience.",
        tech: &["WooCommerce", "Custom Theme", "Payment Gateway"],
        image: "/comfort.JPG",
        featured: false,
        span: "lg:col-span-1",
        code_link: None,
        live_link: "https://elitecomforthub.co.uk/",
    },
    Project {
        title: "Goditela – Slow Travel Experiences",
        description: "A WordPress site for curated slow-travel experiences for over-65 explorers. Built with a purchased theme and customized to feature small-group trips, cultural immersion, and mindful travel in Italy.",
        tech: &["Custom Theme", "ACF", "Google Maps"],
        image: "/cards.JPG",
        featured: false,
        span: "lg:col-span-1",
        code_link: None,
        live_link: "https://www.goditela.com/",
    },
    Project {
        title: "Traveling With Cents",
        description: "A boutique WordPress travel agency website featuring accessible and personalized vacation planning, including luxury getaways, cruises, and custom itineraries tailored for clients across the United States. Built using a purchased theme and customized to showcase services, travel expertise, and easy booking.",
        tech: &["WordPress", "Custom Post Types", "ACF Pro", "Maps"],
        image: "/cup.JPG",
        featured: false,
        span: "lg:col-span-1",
        code_link: None,
        live_link: "https://www.travelingwithcents.com/",
    },
    Project {
        title: "K&B Wellness Services",
        description: "A professional WordPress site for mental and emotional wellness services in Illinois and Indiana. The site was built using a purchased theme and customized to feature therapy bookings, service overviews, and personalized mental health support.",
        tech: &["WordPress", "Booking System", "HIPAA Compliance"],
        image: "/well.JPG",
        featured: false,
        span: "lg:col-span-1",
        code_link: None,
        live_link: "https://yourdomain.com/medical",
    },
    Project {
        title: "Educational Platform",
        description: "Online learning platform with course management and student tracking",
        tech: &["WordPress", "LearnDash", "Custom Development", "LMS"],
        image: "/food.JPG",
        featured: false,
        span: "md:col-span-2 lg:col-span-2",
        code_link: None,
        live_link: "https://www.recipetineats.com/",
    },
];

/// A titled list of skill badges
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend / React Development",
        skills: &[
            "React.js",
            "JavaScript (ES6+)",
            "HTML5",
            "CSS3",
            "Tailwind CSS",
            "Bootstrap",
            "Redux",
            "API Integration",
            "OAuth",
            "Responsive Design",
            "Git & GitHub",
            "Netlify",
            "Vercel",
        ],
    },
    SkillGroup {
        title: "WordPress Development",
        skills: &[
            "Elementor",
            "Elementor Pro",
            "WooCommerce",
            "SEO Optimization",
            "Html, Css, Js",
            "Performance Optimization",
        ],
    },
];

/// A position on the experience timeline
#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        title: "React.js Developer",
        summary: "2 Years • Internships, Jobs & Freelance",
        highlights: &[
            "Built responsive and dynamic UIs using React.js, Tailwind CSS, and Bootstrap",
            "Integrated REST APIs and implemented secure authentication with OAuth",
            "Applied Redux and Context API for scalable state management",
            "Collaborated with design and backend teams to deliver pixel-perfect features",
            "Deployed projects on Netlify/Vercel and optimized for performance & SEO",
        ],
    },
    Role {
        title: "WordPress Developer",
        summary: "Client Websites, E-commerce & Landing Pages",
        highlights: &[
            "Designed and customized websites using Elementor & Elementor Pro",
            "Developed high-converting landing pages for businesses and campaigns",
            "Customized WordPress themes to match client requirements",
            "Built WooCommerce stores with product management & payment integration",
            "Applied SEO optimization and performance best practices",
        ],
    },
];

pub const OWNER_NAME: &str = "Manahil Mustafa";
pub const BRAND: &str = "Manahil";
pub const HEADLINE: &str = "Frontend & Wordpress Developer";
pub const TAGLINE: &str =
    "2+ Years of Experience in React.js & WordPress | Turning Ideas into Powerful Web Experiences";

/// Per-character delay of the hero headline
pub const HEADLINE_DELAY_MS: u32 = 80;

/// Particles front-loaded in the hero
pub const HERO_PARTICLES: usize = 30;

pub const CONTACT_EMAIL: &str = "mustafamanahil2@gmail.com";
pub const CONTACT_PHONE: &str = "+92 342 5613587";
pub const CONTACT_LOCATION: &str = "Pakistan";

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ManahilMustafa",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/manahil-mustafa-/",
    },
];

pub const FIVERR_LINK: SocialLink = SocialLink {
    label: "Fiverr",
    href: "https://www.fiverr.com/manahilmusta090",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_ratings_in_range() {
        assert!(!TESTIMONIALS.is_empty());
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating), "{}", t.name);
            assert_eq!(t.stars(), usize::from(t.rating));
        }
    }

    #[test]
    fn test_stars_are_clamped() {
        let t = Testimonial {
            name: "",
            role: "",
            content: "",
            rating: 9,
        };
        assert_eq!(t.stars(), 5);
        assert_eq!(Testimonial { rating: 0, ..t }.stars(), 1);
    }

    #[test]
    fn test_badge_limits() {
        let sabza = &CODE_PROJECTS[0];
        assert!(sabza.featured);
        assert_eq!(sabza.badges(ProjectKind::Code).len(), 4);

        let blackart = &CODE_PROJECTS[1];
        assert_eq!(blackart.badges(ProjectKind::Code), &["React", "REST API"]);

        let comfort = &WORDPRESS_PROJECTS[1];
        assert_eq!(comfort.badges(ProjectKind::WordPress).len(), 3);
    }

    #[test]
    fn test_badges_never_exceed_tech_list() {
        let project = Project {
            tech: &["Rust"],
            featured: true,
            ..CODE_PROJECTS[0]
        };
        assert_eq!(project.badges(ProjectKind::Code), &["Rust"]);
    }

    #[test]
    fn test_placeholder_code_links_are_hidden() {
        let gericht = CODE_PROJECTS
            .iter()
            .find(|p| p.title.starts_with("Gericht"))
            .unwrap();
        assert_eq!(gericht.code_href(), None);
        assert!(CODE_PROJECTS[0].code_href().is_some());
        assert!(WORDPRESS_PROJECTS.iter().all(|p| p.code_href().is_none()));
    }

    #[test]
    fn test_tabs_list_their_projects() {
        assert_eq!(ProjectKind::Code.projects().len(), 6);
        assert_eq!(ProjectKind::WordPress.projects().len(), 6);
    }
}
