//! Page content
//!
//! All copy lives here as plain data so the sections stay purely about
//! structure and motion.

pub const SITE_OWNER: &str = "Umar Abdullah";

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Works", anchor: "work" },
    NavLink { label: "Experience", anchor: "exp" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const HERO_HEADLINE: [&str; 3] = [
    "Websites shouldn\u{2019}t",
    "be forgotten. I build",
    "the kind that aren\u{2019}t.",
];

pub const HERO_PARAGRAPH: &str = "Synthesizing technical precision with aesthetic \
authority. I architect refined digital systems that prioritize clarity, typography, \
and the choreography of motion.";

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Frontend Development",
        description: "Responsive, accessible, and scalable UI built with React & Next.js.",
    },
    Service {
        title: "Full-Stack Foundations",
        description: "Robust APIs and secure authentication, prioritizing structure and logic.",
    },
    Service {
        title: "Performance & SEO",
        description: "Optimizing Core Web Vitals for fast loads and better visibility.",
    },
    Service {
        title: "UI to Code Translation",
        description: "Converting Figma designs into pixel-perfect, interactive code.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

/// Long-form case studies
pub const PROOF_PROJECTS: [Project; 3] = [
    Project {
        title: "Sai Constructions",
        description: "Multi-page construction company website with smooth hero \
            animations, scroll reveals, and horizontal interactions, delivered in a \
            two-member team with strong client approval.",
        tech: &["React", "GSAP", "JavaScript", "Tailwind CSS"],
        link: "https://saiconstructiongroups.com/",
    },
    Project {
        title: "Iunoware Pvt Ltd.",
        description: "Modernized a legacy front-end by migrating from HTML & Bootstrap \
            to React and Tailwind, rebuilding key homepage sections into modular, \
            reusable components.",
        tech: &["React", "GSAP", "JavaScript", "Tailwind CSS"],
        link: "https://iunoware.com/",
    },
    Project {
        title: "Terra Loom",
        description: "End-to-end client website, from layout implementation to \
            deployment, with SEO-optimized product pages, lazy loading, and \
            performance-focused image handling.",
        tech: &["HTML", "Bootstrap", "JavaScript"],
        link: "#",
    },
];

/// Horizontal rail cards
pub const SELECTED_PROJECTS: [Project; 4] = [
    Project {
        title: "Sai Constructions",
        description: "Construction company website with animated, responsive layouts \
            and smooth scroll interactions.",
        tech: &["React", "GSAP", "Tailwind"],
        link: "https://saiconstructiongroups.com/",
    },
    Project {
        title: "Iunoware",
        description: "Legacy frontend migrated to React and Tailwind with modular \
            components for better scalability and modern UX.",
        tech: &["React", "GSAP", "Tailwind"],
        link: "https://iunoware.com/",
    },
    Project {
        title: "FinPulse Fintech",
        description: "Real-time financial tracking with bank-grade security protocols.",
        tech: &["Next.js", "D3.js", "Prisma"],
        link: "#",
    },
    Project {
        title: "MediFlow Portal",
        description: "Improving patient throughput by 25% with digital workflow.",
        tech: &["React", "Express", "Firebase"],
        link: "#",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct SkillDomain {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_DOMAINS: [SkillDomain; 4] = [
    SkillDomain {
        title: "Frontend Engineering",
        description: "Building performance-first, accessible, and scalable user interfaces.",
        skills: &["HTML5", "CSS3", "JavaScript (ES6+)", "TypeScript", "React.js", "Next.js"],
    },
    SkillDomain {
        title: "Backend & Data",
        description: "Designing secure architectures and managing data across SQL and \
            NoSQL ecosystems.",
        skills: &["Node.js", "Express.js", "RESTful APIs", "MongoDB", "PostgreSQL", "JWT / OAuth"],
    },
    SkillDomain {
        title: "UI, Motion & Styling",
        description: "Crafting immersive digital experiences through precision styling \
            and fluid animations.",
        skills: &["Tailwind CSS", "GSAP", "Bootstrap", "Responsive Design", "Motion Design"],
    },
    SkillDomain {
        title: "Tooling & Workflow",
        description: "Maintaining a disciplined development process through version \
            control and collaborative testing.",
        skills: &["Git", "GitHub", "Postman", "CI/CD Basics", "Vite", "NPM / Yarn"],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 1] = [Experience {
    role: "Software Developer Intern",
    company: "Iunoware Pvt Ltd.",
    period: "July 2025 \u{2014} Present",
    bullets: &[
        "Involved in the complete website development lifecycle, from initial client \
            discussions and requirement gathering to final delivery and demo.",
        "Collaborated with the team to translate business goals into structured \
            layouts and user-focused designs.",
        "Contributed to decisions around color palettes, typography, and overall \
            visual direction.",
        "Built and refined responsive, production-ready web interfaces, iterating on \
            internal reviews and client feedback.",
    ],
}];

pub const CONTACT_HEADLINE: [&str; 2] = [
    "Open to Frontend, React &",
    "Full-Stack Opportunities",
];

pub const CONTACT_PARAGRAPH: &str = "Currently exploring frontend, React, and \
full-stack roles where UI quality, performance, and scalability are priorities.";

#[derive(Clone, Copy, Debug)]
pub struct ContactLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink { name: "GitHub", url: "https://github.com/" },
    ContactLink { name: "LinkedIn", url: "https://www.linkedin.com/" },
    ContactLink { name: "Message", url: "mailto:uu0339843@gmail.com" },
    ContactLink { name: "Call", url: "tel:+919047812365" },
];
