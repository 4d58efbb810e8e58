//! Static content of the hero, tech stack and contact sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub language: &'static str,
    /// Icon path relative to the asset directory
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: [&'static str; 2],
    /// Typed out below the headline
    pub tagline: &'static str,
    pub summary: &'static str,
    pub tech_summary: &'static [&'static str],
    pub social: &'static [SocialLink],
    pub tech_badges: &'static [TechBadge],
    pub site: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "ALJANE Sourour",
    headline: ["Développeuse", "Web & Mobile"],
    tagline: "Passionnée par les technologies modernes",
    summary: "Je conçois et développe des sites web modernes, fonctionnels et adaptatifs, \
              en alliant créativité et performance.",
    tech_summary: &[
        "Front-end : HTML5, CSS3, JavaScript, Bootstrap, SASS, React, Tailwind, TypeScript",
        "Back-end : PHP, Node.js, MySQL, MongoDB",
        "Outils : Git/GitHub, Docker, Figma",
    ],
    social: &[
        SocialLink {
            label: "Mail",
            url: "mailto:rabaasourour@gmail.com",
        },
        SocialLink {
            label: "Linkedin",
            url: "https://www.linkedin.com/in/sourour-aljane-9075b6296/",
        },
        SocialLink {
            label: "Github",
            url: "https://github.com/rabaaSourour",
        },
    ],
    tech_badges: &[
        TechBadge { language: "HTML", icon: "assets/tech/html.svg" },
        TechBadge { language: "CSS", icon: "assets/tech/css.svg" },
        TechBadge { language: "JavaScript", icon: "assets/tech/javascript.svg" },
        TechBadge { language: "Sass", icon: "assets/tech/sass.svg" },
        TechBadge { language: "Tailwind CSS", icon: "assets/tech/tailwind.svg" },
        TechBadge { language: "Bootstrap", icon: "assets/tech/bootstrap.svg" },
        TechBadge { language: "ReactJS", icon: "assets/tech/reactjs.svg" },
        TechBadge { language: "Three.js", icon: "assets/tech/threejs.svg" },
        TechBadge { language: "Node.js", icon: "assets/tech/nodejs.svg" },
        TechBadge { language: "PHP", icon: "assets/tech/php.svg" },
        TechBadge { language: "MySQL", icon: "assets/tech/mysql.svg" },
        TechBadge { language: "MongoDb", icon: "assets/tech/mongodb.svg" },
        TechBadge { language: "Docker", icon: "assets/tech/docker.svg" },
        TechBadge { language: "Figma", icon: "assets/tech/figma.svg" },
    ],
    site: "https://rabaasourour.github.io/portfolio/",
};
