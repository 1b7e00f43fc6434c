//! Static project and skill tables rendered by the showcase and skills panel.
//!
//! Both tables are fixed at compile time. Project ids in [`PROJECT_IDS`] define
//! the order used for cyclic next/previous navigation in the modal.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_link: Option<&'static str>,
    pub code_link: &'static str,
}

pub const PROJECT_IDS: [&str; 6] = ["cod", "ac", "smartsort", "portfolio", "python", "webdev"];

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: "cod",
        title: "Call Of Duty Tribute Site",
        image: "Media/COD SS.png",
        description: "A comprehensive tribute website celebrating the iconic Call of Duty franchise. This project showcases modern web design principles with responsive layouts, smooth animations, and an immersive user experience that captures the essence of the game series.",
        tech: &["HTML5", "CSS3", "Tailwind CSS", "Bootstrap", "JavaScript", "Responsive Design"],
        features: &[
            "Fully responsive design that works seamlessly across all devices",
            "Modern UI with smooth animations and transitions",
            "Interactive timeline showcasing COD game history",
            "Optimized performance with lazy loading images",
            "Cross-browser compatible and accessible",
        ],
        live_link: Some("https://call-of-duty-tribute.netlify.app/"),
        code_link: "https://github.com/Divyansh3105",
    },
    ProjectRecord {
        id: "ac",
        title: "Assassin's Creed Tribute Site",
        image: "Media/AC SS.png",
        description: "An elegant tribute to the Assassin's Creed series, featuring a sleek design that embodies the stealth and sophistication of the franchise. The site demonstrates advanced CSS techniques and fluid transitions inspired by the game's iconic aesthetic.",
        tech: &["HTML5", "CSS3", "JavaScript", "CSS Animations", "Flexbox", "Grid Layout"],
        features: &[
            "Stunning visual design with parallax scrolling effects",
            "Fluid CSS animations and transitions",
            "Interactive character showcase section",
            "Optimized for performance and SEO",
            "Mobile-first responsive approach",
        ],
        live_link: Some("https://assassins-creed-tribute.netlify.app/"),
        code_link: "https://github.com/Divyansh3105",
    },
    ProjectRecord {
        id: "smartsort",
        title: "Smart Sort Selector",
        image: "Media/Smart Sorter SS.png",
        description: "An interactive Python application that visualizes various sorting algorithms in real-time. Built with Tkinter, this educational tool helps users understand how different sorting algorithms work through visual representation and step-by-step execution.",
        tech: &["Python", "Tkinter", "Algorithms", "Data Structures", "GUI Design"],
        features: &[
            "Visual representation of 6+ sorting algorithms",
            "Real-time algorithm execution with adjustable speed",
            "Interactive controls for array size and values",
            "Color-coded visualization for better understanding",
            "Educational tool for learning algorithm complexity",
        ],
        live_link: None,
        code_link: "https://github.com/Divyansh3105/Smart-Sort-Selector",
    },
    ProjectRecord {
        id: "portfolio",
        title: "Portfolio Website",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=600&fit=crop",
        description: "A modern, responsive portfolio website showcasing my projects and skills. Built with vanilla HTML, CSS, and JavaScript, featuring smooth animations, glassmorphism design, and an intuitive user interface.",
        tech: &["HTML5", "CSS3", "JavaScript", "Responsive Design", "Animations", "Glassmorphism"],
        features: &[
            "Modern glassmorphism UI with gradient accents",
            "Smooth scroll animations and transitions",
            "Fully responsive across all screen sizes",
            "Interactive project showcases with modals",
            "Optimized performance and accessibility",
        ],
        live_link: Some("https://divyansh3105.github.io/"),
        code_link: "https://github.com/Divyansh3105/Divyansh3105.github.io",
    },
    ProjectRecord {
        id: "python",
        title: "Python Projects Collection",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        description: "A curated collection of Python scripts and mini-projects demonstrating various programming concepts, from basic automation to advanced data manipulation. Each project showcases different aspects of Python programming.",
        tech: &["Python", "Automation", "Data Analysis", "File Handling", "APIs"],
        features: &[
            "Diverse range of Python applications",
            "Well-documented and commented code",
            "Practical real-world use cases",
            "Modular and reusable code structure",
            "Beginner to intermediate level projects",
        ],
        live_link: None,
        code_link: "https://github.com/Divyansh3105/Python",
    },
    ProjectRecord {
        id: "webdev",
        title: "Web Development Experiments",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=600&fit=crop",
        description: "A collection of experimental web development projects exploring modern frameworks, libraries, and design patterns. These projects serve as a playground for testing new technologies and implementing creative ideas.",
        tech: &["HTML5", "CSS3", "JavaScript", "React", "Node.js", "Modern Frameworks"],
        features: &[
            "Exploration of cutting-edge web technologies",
            "Implementation of modern design patterns",
            "Responsive and accessible interfaces",
            "Performance optimization techniques",
            "Progressive web app features",
        ],
        live_link: None,
        code_link: "https://github.com/Divyansh3105",
    },
];

pub fn project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|record| record.id == id)
}

/// Position of `id` in the navigation order.
pub fn project_index(id: &str) -> Option<usize> {
    PROJECT_IDS.iter().position(|candidate| *candidate == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    pub level: SkillLevel,
    pub percentage: u8,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Tools,
    Languages,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Languages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Languages => "languages",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Languages => "Languages",
        }
    }

    pub fn skills(self) -> &'static [SkillRecord] {
        match self {
            Self::Frontend => &FRONTEND_SKILLS,
            Self::Backend => &BACKEND_SKILLS,
            Self::Tools => &TOOL_SKILLS,
            Self::Languages => &LANGUAGE_SKILLS,
        }
    }
}

/// Skills for a category key such as `"backend"`; `None` for unknown keys.
pub fn skills_for(category: &str) -> Option<&'static [SkillRecord]> {
    SkillCategory::from_str(category).map(SkillCategory::skills)
}

const fn skill(
    name: &'static str,
    level: SkillLevel,
    percentage: u8,
    icon: &'static str,
    description: &'static str,
) -> SkillRecord {
    SkillRecord {
        name,
        level,
        percentage,
        icon,
        description,
    }
}

static FRONTEND_SKILLS: [SkillRecord; 6] = [
    skill(
        "HTML5",
        SkillLevel::Advanced,
        95,
        "https://www.vectorlogo.zone/logos/w3_html5/w3_html5-icon.svg",
        "Semantic markup and modern HTML5 features",
    ),
    skill(
        "CSS3",
        SkillLevel::Advanced,
        90,
        "https://www.vectorlogo.zone/logos/w3_css/w3_css-icon.svg",
        "Animations, Grid, Flexbox, and responsive design",
    ),
    skill(
        "JavaScript",
        SkillLevel::Intermediate,
        85,
        "https://www.vectorlogo.zone/logos/javascript/javascript-icon.svg",
        "ES6+, DOM manipulation, and async programming",
    ),
    skill(
        "Tailwind CSS",
        SkillLevel::Advanced,
        88,
        "https://www.vectorlogo.zone/logos/tailwindcss/tailwindcss-icon.svg",
        "Utility-first CSS framework for rapid development",
    ),
    skill(
        "Bootstrap",
        SkillLevel::Advanced,
        85,
        "https://www.vectorlogo.zone/logos/getbootstrap/getbootstrap-icon.svg",
        "Responsive component library and grid system",
    ),
    skill(
        "React",
        SkillLevel::Beginner,
        60,
        "https://www.vectorlogo.zone/logos/reactjs/reactjs-icon.svg",
        "Component-based UI development",
    ),
];

static BACKEND_SKILLS: [SkillRecord; 4] = [
    skill(
        "Python",
        SkillLevel::Intermediate,
        80,
        "https://www.vectorlogo.zone/logos/python/python-icon.svg",
        "Backend development and automation scripts",
    ),
    skill(
        "Node.js",
        SkillLevel::Beginner,
        55,
        "https://www.vectorlogo.zone/logos/nodejs/nodejs-icon.svg",
        "Server-side JavaScript runtime",
    ),
    skill(
        "MySQL",
        SkillLevel::Intermediate,
        75,
        "https://www.vectorlogo.zone/logos/mysql/mysql-icon.svg",
        "Relational database management",
    ),
    skill(
        "MongoDB",
        SkillLevel::Beginner,
        50,
        "https://www.vectorlogo.zone/logos/mongodb/mongodb-icon.svg",
        "NoSQL database for modern applications",
    ),
];

static TOOL_SKILLS: [SkillRecord; 4] = [
    skill(
        "Git",
        SkillLevel::Advanced,
        90,
        "https://www.vectorlogo.zone/logos/git-scm/git-scm-icon.svg",
        "Version control and collaboration",
    ),
    skill(
        "VS Code",
        SkillLevel::Advanced,
        95,
        "https://www.vectorlogo.zone/logos/visualstudio_code/visualstudio_code-icon.svg",
        "Primary code editor with extensions",
    ),
    skill(
        "Figma",
        SkillLevel::Intermediate,
        70,
        "https://www.vectorlogo.zone/logos/figma/figma-icon.svg",
        "UI/UX design and prototyping",
    ),
    skill(
        "GitHub",
        SkillLevel::Advanced,
        88,
        "https://www.vectorlogo.zone/logos/github/github-icon.svg",
        "Code hosting and project management",
    ),
];

static LANGUAGE_SKILLS: [SkillRecord; 4] = [
    skill(
        "JavaScript",
        SkillLevel::Intermediate,
        85,
        "https://www.vectorlogo.zone/logos/javascript/javascript-icon.svg",
        "Primary language for web development",
    ),
    skill(
        "Python",
        SkillLevel::Intermediate,
        80,
        "https://www.vectorlogo.zone/logos/python/python-icon.svg",
        "Scripting and backend development",
    ),
    skill(
        "TypeScript",
        SkillLevel::Beginner,
        55,
        "https://www.vectorlogo.zone/logos/typescriptlang/typescriptlang-icon.svg",
        "Typed superset of JavaScript",
    ),
    skill(
        "SQL",
        SkillLevel::Intermediate,
        75,
        "https://www.vectorlogo.zone/logos/mysql/mysql-icon.svg",
        "Database query language",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_navigation_id_has_a_record() {
        for id in PROJECT_IDS {
            let record = project(id).expect("navigation id should resolve");
            assert_eq!(record.id, id);
        }
        assert_eq!(PROJECT_IDS.len(), PROJECTS.len());
    }

    #[test]
    fn unknown_project_is_none() {
        assert!(project("missing").is_none());
        assert!(project_index("missing").is_none());
    }

    #[test]
    fn skill_percentages_stay_in_range() {
        for category in SkillCategory::ALL {
            assert!(!category.skills().is_empty());
            for record in category.skills() {
                assert!(record.percentage <= 100, "{} out of range", record.name);
            }
        }
    }

    #[test]
    fn category_keys_resolve() {
        assert_eq!(skills_for("backend").map(<[SkillRecord]>::len), Some(4));
        assert!(skills_for("design").is_none());
        assert_eq!(SkillCategory::default(), SkillCategory::Frontend);
    }
}
